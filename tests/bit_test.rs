//! Tests for the BIT (Bit Test) instruction, including the 65C02 forms.

use apple1_core::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_bit_zero_page_copies_bits_6_and_7() {
    let mut cpu = setup_cpu(&[0x24, 0x10]); // BIT $10
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0xFF);

    cpu.step();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.a(), 0xFF);
}

#[test]
fn test_bit_sets_zero_when_no_common_bits() {
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x20]); // BIT $2000
    cpu.memory_mut().write(0x2000, 0x0F);
    cpu.set_a(0xF0);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    cpu.step();

    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn test_bit_immediate() {
    let mut cpu = setup_cpu(&[0x89, 0x40]); // BIT #$40
    cpu.set_a(0x40);

    cpu.step();

    assert!(!cpu.flag_z());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_bit_zero_page_x() {
    let mut cpu = setup_cpu(&[0x34, 0x10]); // BIT $10,X
    cpu.memory_mut().write(0x0013, 0x80);
    cpu.set_x(0x03);
    cpu.set_a(0x01);

    cpu.step();

    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_bit_absolute_x() {
    let mut cpu = setup_cpu(&[0x3C, 0x00, 0x20]); // BIT $2000,X
    cpu.memory_mut().write(0x2001, 0x01);
    cpu.set_x(0x01);
    cpu.set_a(0x01);

    cpu.step();

    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8003);
}
