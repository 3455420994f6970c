//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA: Copy between A and the index registers
//! - TSX: Copy SP into X
//! - TXS: Copy X into SP
//!
//! Every transfer sets Z and N from the copied value except TXS, which
//! affects no flags.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.p.set_nz(cpu.x);
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.p.set_nz(cpu.y);
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.p.set_nz(cpu.a);
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.p.set_nz(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.p.set_nz(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// No flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
