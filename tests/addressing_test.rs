//! Effective-address resolution for every addressing mode, observed through
//! LDA/STA/JMP so only the public API is used.

use apple1_core::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_indirect_x_wraps_index_in_zero_page() {
    let mut cpu = setup_cpu(&[0xA1, 0xFF]); // LDA ($FF,X)
    cpu.set_x(0x02);
    // (0xFF + 2) & 0xFF = 0x01
    cpu.memory_mut().write(0x0001, 0x00);
    cpu.memory_mut().write(0x0002, 0x30);
    cpu.memory_mut().write(0x3000, 0x99);

    cpu.step();

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_indirect_y_pointer_at_end_of_zero_page() {
    let mut cpu = setup_cpu(&[0xB1, 0xFF]); // LDA ($FF),Y
    // High byte comes from 0x0100, not 0x0000
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0100, 0x40);
    cpu.memory_mut().write(0x0000, 0x50);
    cpu.memory_mut().write(0x4001, 0x77);
    cpu.set_y(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_indirect_y_crosses_page() {
    let mut cpu = setup_cpu(&[0xB1, 0x20]); // LDA ($20),Y
    cpu.memory_mut().write(0x0020, 0xF0);
    cpu.memory_mut().write(0x0021, 0x30);
    cpu.memory_mut().write(0x3110, 0x12);
    cpu.set_y(0x20);

    cpu.step();

    assert_eq!(cpu.a(), 0x12);
}

#[test]
fn test_zero_page_y_wraps() {
    let mut cpu = setup_cpu(&[0x96, 0xFF]); // STX $FF,Y
    cpu.set_x(0xAB);
    cpu.set_y(0x03);

    cpu.step();

    assert_eq!(cpu.memory().peek(0x0002), 0xAB);
}

#[test]
fn test_absolute_x_crosses_page() {
    let mut cpu = setup_cpu(&[0x9D, 0xF0, 0x20]); // STA $20F0,X
    cpu.set_x(0x20);
    cpu.set_a(0x5A);

    cpu.step();

    assert_eq!(cpu.memory().peek(0x2110), 0x5A);
}

#[test]
fn test_indirect_zero_page_store() {
    let mut cpu = setup_cpu(&[0x92, 0x30]); // STA ($30)
    cpu.memory_mut().write(0x0030, 0x00);
    cpu.memory_mut().write(0x0031, 0x05);
    cpu.set_a(0x3C);
    cpu.set_y(0x10);

    cpu.step();

    // No index applied
    assert_eq!(cpu.memory().peek(0x0500), 0x3C);
    assert_eq!(cpu.memory().peek(0x0510), 0x00);
}

#[test]
fn test_instruction_sizes_advance_pc() {
    // NOP (1); LDA #imm (2); LDA abs (3); LDA ($zp) (2); ASL A (1)
    let mut cpu = setup_cpu(&[0xEA, 0xA9, 0x00, 0xAD, 0x00, 0x20, 0xB2, 0x10, 0x0A]);

    let mut pcs = Vec::new();
    for _ in 0..5 {
        cpu.step();
        pcs.push(cpu.pc());
    }

    assert_eq!(pcs, vec![0x8001, 0x8003, 0x8006, 0x8008, 0x8009]);
}
