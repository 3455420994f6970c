//! # Control Flow Instructions
//!
//! This module implements instructions that redirect execution:
//! - JMP: Jump (absolute, indirect, and 65C02 absolute indexed indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//!
//! It also holds the hardware interrupt entry sequence used by [`CPU::irq`].
//!
//! Return addresses follow the 6502 convention: JSR pushes the address of its
//! own last byte and RTS adds one after popping.

use crate::addressing::AddressingMode;
use crate::cpu::IRQ_VECTOR;
use crate::status::{B, I, R};
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Indirect JMP reads its pointer without the NMOS page-wrap bug: a pointer
/// at 0x10FF takes its high byte from 0x1100.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.effective_address(mode);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC - 1 (the address of the JSR's high operand byte), then jumps.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0300, &[0x20, 0x00, 0x40]); // JSR $4000
/// memory.write(0x4000, 0x60);               // RTS
///
/// let mut cpu = CPU::with_entry_point(memory, 0x0300);
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x4000);
/// assert_eq!(cpu.memory().peek(0x01FF), 0x03);
/// assert_eq!(cpu.memory().peek(0x01FE), 0x02);
///
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x0303);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let target = cpu.effective_address(mode);
    let ret = cpu.pc.wrapping_sub(1);
    cpu.push_word(ret);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pop_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops the status byte exactly as PLP does, then pops PC. Unlike RTS, no
/// adjustment is made to the popped address.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    super::stack::execute_plp(cpu);
    cpu.pc = cpu.pop_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Sequence:
/// 1. Push PC + 1 (PC already points past the opcode, so this skips the
///    padding byte that follows BRK)
/// 2. Set B
/// 3. Push status with R and B forced set
/// 4. Set I
/// 5. Load PC from the vector at 0xFFFE
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let ret = cpu.pc.wrapping_add(1);
    cpu.push_word(ret);
    cpu.p.set_if(B, true);
    let pushed = cpu.p.pushed();
    cpu.push_byte(pushed);
    cpu.p.set_if(I, true);
    cpu.pc = cpu.word_at(IRQ_VECTOR);
}

/// Hardware interrupt entry.
///
/// Same sequence as BRK, except that PC is pushed as-is and the pushed status
/// has B clear. The caller is responsible for checking the I flag.
pub(crate) fn enter_interrupt<M: MemoryBus>(cpu: &mut CPU<M>) {
    let ret = cpu.pc;
    cpu.push_word(ret);
    cpu.p.set_if(B, false);
    let pushed = cpu.p.bits() | R;
    cpu.push_byte(pushed);
    cpu.p.set_if(I, true);
    cpu.pc = cpu.word_at(IRQ_VECTOR);
}
