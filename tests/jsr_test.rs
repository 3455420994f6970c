//! Tests for JMP, JSR and RTS.

use apple1_core::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_jsr_pushes_return_minus_one() {
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x90]); // JSR $9000

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.memory().peek(0x01FF), 0x80);
    assert_eq!(cpu.memory().peek(0x01FE), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x90, 0xE8]); // JSR $9000; INX
    cpu.memory_mut().write(0x9000, 0xC8); // INY
    cpu.memory_mut().write(0x9001, 0x60); // RTS

    assert_eq!(cpu.run_batch(4), 4);

    assert_eq!(cpu.x(), 1);
    assert_eq!(cpu.y(), 1);
    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu(&[0x4C, 0x34, 0x12]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect_has_no_page_wrap_bug() {
    let mut cpu = setup_cpu(&[0x6C, 0xFF, 0x10]); // JMP ($10FF)
    cpu.memory_mut().write(0x10FF, 0x34);
    cpu.memory_mut().write(0x1100, 0x12);
    cpu.memory_mut().write(0x1000, 0x56);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_absolute_indexed_indirect() {
    let mut cpu = setup_cpu(&[0x7C, 0x00, 0x30]); // JMP ($3000,X)
    cpu.memory_mut().write(0x3006, 0x00);
    cpu.memory_mut().write(0x3007, 0x40);
    cpu.set_x(0x06);

    cpu.step();

    assert_eq!(cpu.pc(), 0x4000);
}
