//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic Shift Left (bit 7 into C, 0 into bit 0)
//! - LSR: Logical Shift Right (bit 0 into C, 0 into bit 7)
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each has an accumulator form and read-modify-write memory forms. Z and N
//! are set from the shifted value.

use crate::addressing::AddressingMode;
use crate::status::C;
use crate::{MemoryBus, CPU};

/// Applies `op` to the accumulator or the memory operand, writing the result
/// back and updating C, Z and N. `op` returns `(result, carry_out)`.
fn shift<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: impl Fn(u8, bool) -> (u8, bool),
) {
    let carry_in = cpu.p.is_set(C);

    if mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(cpu.a, carry_in);
        cpu.a = result;
        cpu.p.set_if(C, carry_out);
        cpu.p.set_nz(result);
        return;
    }

    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr);
    let (result, carry_out) = op(value, carry_in);
    cpu.memory.write(addr, result);
    cpu.p.set_if(C, carry_out);
    cpu.p.set_nz(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0300, 0x0A); // ASL A
///
/// let mut cpu = CPU::with_entry_point(memory, 0x0300);
/// cpu.set_a(0x81);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x02);
/// assert!(cpu.flag_c());
/// ```
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, |v, _| (v << 1, v & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, |v, _| (v >> 1, v & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, |v, c| ((v << 1) | c as u8, v & 0x80 != 0));
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, |v, c| ((v >> 1) | ((c as u8) << 7), v & 0x01 != 0));
}
