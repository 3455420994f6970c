//! # Stack Instructions
//!
//! - PHA, PHX, PHY: Push a register (65C02 adds X and Y)
//! - PLA, PLX, PLY: Pull a register, setting Z and N
//! - PHP: Push status with R and B forced set
//! - PLP: Pull status verbatim
//!
//! The stack lives in page one (0x0100-0x01FF) and grows downward. SP wraps
//! at both ends without any error.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push_byte(value);
}

pub(crate) fn execute_phx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.x;
    cpu.push_byte(value);
}

pub(crate) fn execute_phy<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.y;
    cpu.push_byte(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has R and B set. The live register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.p.pushed();
    cpu.push_byte(value);
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop_byte();
    cpu.p.set_nz(cpu.a);
}

pub(crate) fn execute_plx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.pop_byte();
    cpu.p.set_nz(cpu.x);
}

pub(crate) fn execute_ply<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.pop_byte();
    cpu.p.set_nz(cpu.y);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every bit of the pulled byte is loaded, including B and R.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p.0 = cpu.pop_byte();
}
