//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing and touch exactly one flag.
//! There is no "set overflow" instruction.

use crate::status::{C, D, I, V};
use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::with_entry_point(memory, 0x8000);
/// cpu.set_flag_c(true);
/// cpu.step();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(C, false);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(C, true);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(I, false);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(I, true);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(V, false);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(D, false);
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Subsequent ADC and SBC instructions operate on packed BCD.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.set_if(D, true);
}
