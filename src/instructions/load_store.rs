//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: Load a register, setting Z and N
//! - STA, STX, STY: Store a register, no flags affected
//! - STZ: Store zero (65C02)

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0300, &[0xA9, 0x00]); // LDA #$00
///
/// let mut cpu = CPU::with_entry_point(memory, 0x0300);
/// cpu.set_a(0x55);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x00);
/// assert!(cpu.flag_z());
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.a = cpu.operand_value(mode);
    cpu.p.set_nz(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.x = cpu.operand_value(mode);
    cpu.p.set_nz(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.y = cpu.operand_value(mode);
    cpu.p.set_nz(cpu.y);
}

fn store<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, value: u8) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.a;
    store(cpu, mode, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.x;
    store(cpu, mode, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.y;
    store(cpu, mode, value);
}

/// Executes the STZ (Store Zero) instruction.
pub(crate) fn execute_stz<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    store(cpu, mode, 0x00);
}
