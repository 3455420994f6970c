//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Read-modify-write memory
//! - INX, INY, DEX, DEY: Index registers
//! - INA, DEA: Accumulator (65C02, printed as `INC A` / `DEC A`)
//!
//! All wrap modulo 256 and set Z and N from the result. Carry is untouched.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

fn modify_memory<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, delta: i8) {
    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr).wrapping_add_signed(delta);
    cpu.memory.write(addr, value);
    cpu.p.set_nz(value);
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify_memory(cpu, mode, 1);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify_memory(cpu, mode, -1);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_nz(cpu.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_nz(cpu.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_nz(cpu.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_nz(cpu.y);
}

pub(crate) fn execute_ina<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.a.wrapping_add(1);
    cpu.p.set_nz(cpu.a);
}

pub(crate) fn execute_dea<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.a.wrapping_sub(1);
    cpu.p.set_nz(cpu.a);
}
