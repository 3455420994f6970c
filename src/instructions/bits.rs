//! # Memory Bit Instructions (65C02)
//!
//! - TRB: Test and Reset Bits
//! - TSB: Test and Set Bits
//!
//! Both read-modify-write memory using the accumulator as a mask. Z reflects
//! the value written back. No other flags change.

use crate::addressing::AddressingMode;
use crate::status::Z;
use crate::{MemoryBus, CPU};

/// Executes the TRB instruction: clears in memory every bit set in A.
pub(crate) fn execute_trb<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr) & !cpu.a;
    cpu.memory.write(addr, value);
    cpu.p.set_if(Z, value == 0);
}

/// Executes the TSB instruction: sets in memory every bit set in A.
pub(crate) fn execute_tsb<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr) | cpu.a;
    cpu.memory.write(addr, value);
    cpu.p.set_if(Z, value == 0);
}
