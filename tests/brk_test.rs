//! Tests for BRK, RTI and the hardware interrupt entry.

use apple1_core::status::{B, C, I, R};
use apple1_core::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.load(0x8000, program);
    CPU::new(memory)
}

// ========== BRK ==========

#[test]
fn test_brk_sequence() {
    let mut cpu = setup_cpu(&[0x00, 0xEA]);
    cpu.set_status(C);

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFC);
    // Return address skips the padding byte after BRK
    assert_eq!(cpu.memory().peek(0x01FF), 0x80);
    assert_eq!(cpu.memory().peek(0x01FE), 0x02);
    assert_eq!(cpu.memory().peek(0x01FD), C | R | B);
    assert!(cpu.flag_i());
    assert!(cpu.flag_b());
}

#[test]
fn test_brk_then_rti_returns_past_padding() {
    let mut cpu = setup_cpu(&[0x00, 0xFF, 0xE8]); // BRK; padding; INX
    cpu.memory_mut().write(0x9000, 0x40); // RTI
    cpu.set_status(C);

    assert_eq!(cpu.run_batch(3), 3);

    assert_eq!(cpu.x(), 1);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFF);
    // RTI restores the pushed byte verbatim, including B and R
    assert_eq!(cpu.status(), C | R | B);
}

// ========== RTI ==========

#[test]
fn test_rti_does_not_adjust_pc() {
    let mut cpu = setup_cpu(&[0x40]); // RTI
    cpu.memory_mut().write(0x01FD, 0x00); // status
    cpu.memory_mut().write(0x01FE, 0x34); // PC low
    cpu.memory_mut().write(0x01FF, 0x12); // PC high
    cpu.set_sp(0xFC);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.status(), 0x00);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== Hardware Interrupt ==========

#[test]
fn test_irq_masked_when_i_set() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_flag_i(true);

    assert!(!cpu.irq());

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_irq_pushes_pc_and_status_without_break() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_status(C);

    assert!(cpu.irq());

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.memory().peek(0x01FF), 0x80);
    assert_eq!(cpu.memory().peek(0x01FE), 0x00);
    assert_eq!(cpu.memory().peek(0x01FD), C | R);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_b());
}

#[test]
fn test_irq_pushes_status_before_setting_i() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_status(C | B);

    assert!(cpu.irq());

    let pushed = cpu.memory().peek(0x01FD);
    assert_eq!(pushed & I, 0);
    assert_eq!(pushed & B, 0);
    assert_eq!(cpu.status() & I, I);
}

#[test]
fn test_irq_then_rti_resumes() {
    let mut cpu = setup_cpu(&[0xE8]); // INX
    cpu.memory_mut().write(0x9000, 0x40); // RTI

    cpu.irq();
    cpu.step();

    assert_eq!(cpu.pc(), 0x8000);
    assert!(!cpu.flag_i());

    cpu.step();
    assert_eq!(cpu.x(), 1);
}
