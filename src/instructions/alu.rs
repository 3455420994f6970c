//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register compares
//! - BIT: Bit test
//!
//! ADC and SBC honour the decimal flag. In decimal mode both operands are
//! converted from BCD, combined in binary, and converted back. The V flag is
//! left untouched in decimal mode.

use crate::addressing::AddressingMode;
use crate::status::{C, N, V, Z};
use crate::{MemoryBus, CPU};

/// Converts a packed BCD byte to its binary value. Invalid digits are not
/// rejected, so 0xFF converts to 165.
fn bcd_to_bin(value: u8) -> i32 {
    ((value >> 4) as i32) * 10 + (value & 0x0F) as i32
}

/// Converts a binary value to packed BCD, keeping the two low decimal digits.
///
/// Division truncates toward zero, so negative inputs produce the same bit
/// pattern as the classic two's-complement arithmetic would.
fn bin_to_bcd(value: i32) -> u8 {
    ((((value / 10) % 10) << 4) | (value % 10)) as u8
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Binary mode:
/// - C: Set if the unsigned sum exceeds 255
/// - V: Set if both operands share a sign and the result sign differs
/// - Z, N: From the result
///
/// Decimal mode:
/// - C: Set if the decimal sum exceeds 99
/// - V: Unchanged
/// - Z, N: From the BCD result
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0300, &[0xF8, 0x18, 0xA9, 0x15, 0x69, 0x27]); // SED; CLC; LDA #$15; ADC #$27
///
/// let mut cpu = CPU::with_entry_point(memory, 0x0300);
/// cpu.run_batch(4);
///
/// assert_eq!(cpu.a(), 0x42);
/// assert!(!cpu.flag_c());
/// ```
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let carry_in = cpu.p.carry();

    if cpu.flag_d() {
        let sum = bcd_to_bin(cpu.a) + bcd_to_bin(value) + carry_in as i32;
        cpu.p.set_if(C, sum > 99);
        cpu.a = bin_to_bcd(sum);
        cpu.p.set_nz(cpu.a);
        return;
    }

    let a = cpu.a;
    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    cpu.p.set_if(C, sum > 0xFF);
    cpu.p.set_nz(result);

    // Same-signed operands producing a differently signed result
    let overflow = (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0;
    cpu.p.set_if(V, overflow);

    cpu.a = result;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry acts as an inverted borrow.
///
/// Binary mode:
/// - C: Set if no borrow occurred
/// - V: Set if the operands differ in sign and the result sign differs from A
/// - Z, N: From the result
///
/// Decimal mode:
/// - C: Set if the decimal difference did not go below zero; otherwise
///   cleared and 100 is added before converting back to BCD
/// - V: Unchanged
/// - Z, N: From the BCD result
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let carry_in = cpu.p.carry() as i32;

    if cpu.flag_d() {
        let mut diff = bcd_to_bin(cpu.a) - bcd_to_bin(value) - 1 + carry_in;
        if diff & 0xFF00 == 0 {
            cpu.p.set_if(C, true);
        } else {
            cpu.p.set_if(C, false);
            diff += 100;
        }
        cpu.a = bin_to_bcd(diff);
        cpu.p.set_nz(cpu.a);
        return;
    }

    let a = cpu.a;
    let diff = a as i32 - value as i32 - 1 + carry_in;
    let result = diff as u8;

    cpu.p.set_if(C, diff & 0xFF00 == 0);
    cpu.p.set_nz(result);

    let overflow = (a ^ value) & 0x80 != 0 && (a ^ result) & 0x80 != 0;
    cpu.p.set_if(V, overflow);

    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a &= value;
    cpu.p.set_nz(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a |= value;
    cpu.p.set_nz(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a ^= value;
    cpu.p.set_nz(cpu.a);
}

/// Shared compare: C = register >= operand, Z and N from the wrapped difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.p.set_if(C, register >= value);
    cpu.p.set_nz(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.a;
    compare(cpu, register, mode);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.x;
    compare(cpu, register, mode);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.y;
    compare(cpu, register, mode);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Flags affected:
/// - V: Bit 6 of the operand
/// - N: Bit 7 of the operand
/// - Z: Set if `A & operand` is zero
///
/// The immediate form (65C02) follows the same rule as the memory forms.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.p.set_if(V, value & 0x40 != 0);
    cpu.p.set_if(N, value & 0x80 != 0);
    cpu.p.set_if(Z, cpu.a & value == 0);
}
