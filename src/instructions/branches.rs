//! # Branch Instructions
//!
//! This module implements the relative branch operations:
//! - BCC, BCS: Branch on Carry clear/set
//! - BNE, BEQ: Branch on Zero clear/set
//! - BPL, BMI: Branch on Negative clear/set
//! - BVC, BVS: Branch on Overflow clear/set
//! - BRA: Branch Always (65C02)
//!
//! All branches use relative addressing with a signed 8-bit offset measured
//! from the address of the following instruction. The displacement byte is
//! consumed whether or not the branch is taken. No flags are affected.

use crate::addressing::AddressingMode;
use crate::status::{C, N, V, Z};
use crate::{MemoryBus, CPU};

fn branch<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, taken: bool) {
    let target = cpu.effective_address(mode);
    if taken {
        cpu.pc = target;
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0300, &[0x90, 0x10]); // BCC +16
///
/// let mut cpu = CPU::with_entry_point(memory, 0x0300);
/// cpu.step();
///
/// assert_eq!(cpu.pc(), 0x0312);
/// ```
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.p.is_set(C);
    branch(cpu, mode, taken);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.p.is_set(C);
    branch(cpu, mode, taken);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.p.is_set(Z);
    branch(cpu, mode, taken);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.p.is_set(Z);
    branch(cpu, mode, taken);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.p.is_set(N);
    branch(cpu, mode, taken);
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.p.is_set(N);
    branch(cpu, mode, taken);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.p.is_set(V);
    branch(cpu, mode, taken);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.p.is_set(V);
    branch(cpu, mode, taken);
}

/// Executes the BRA (Branch Always) instruction.
pub(crate) fn execute_bra<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch(cpu, mode, true);
}
