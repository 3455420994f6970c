//! Tests for the relative branch instructions, including the 65C02 BRA.

use apple1_core::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

/// Runs a single branch with the given flag setup and returns the new PC.
fn branch_target(opcode: u8, offset: u8, setup: impl Fn(&mut CPU<FlatMemory>)) -> u16 {
    let mut cpu = setup_cpu(&[opcode, offset]);
    setup(&mut cpu);
    cpu.step();
    cpu.pc()
}

#[test]
fn test_branch_taken_forward() {
    assert_eq!(branch_target(0x90, 0x10, |c| c.set_flag_c(false)), 0x8012); // BCC
    assert_eq!(branch_target(0xB0, 0x10, |c| c.set_flag_c(true)), 0x8012); // BCS
    assert_eq!(branch_target(0xF0, 0x10, |c| c.set_flag_z(true)), 0x8012); // BEQ
    assert_eq!(branch_target(0xD0, 0x10, |c| c.set_flag_z(false)), 0x8012); // BNE
    assert_eq!(branch_target(0x30, 0x10, |c| c.set_flag_n(true)), 0x8012); // BMI
    assert_eq!(branch_target(0x10, 0x10, |c| c.set_flag_n(false)), 0x8012); // BPL
    assert_eq!(branch_target(0x70, 0x10, |c| c.set_flag_v(true)), 0x8012); // BVS
    assert_eq!(branch_target(0x50, 0x10, |c| c.set_flag_v(false)), 0x8012); // BVC
}

#[test]
fn test_branch_not_taken_skips_operand() {
    assert_eq!(branch_target(0x90, 0x10, |c| c.set_flag_c(true)), 0x8002);
    assert_eq!(branch_target(0xB0, 0x10, |c| c.set_flag_c(false)), 0x8002);
    assert_eq!(branch_target(0xF0, 0x10, |c| c.set_flag_z(false)), 0x8002);
    assert_eq!(branch_target(0xD0, 0x10, |c| c.set_flag_z(true)), 0x8002);
    assert_eq!(branch_target(0x30, 0x10, |c| c.set_flag_n(false)), 0x8002);
    assert_eq!(branch_target(0x10, 0x10, |c| c.set_flag_n(true)), 0x8002);
    assert_eq!(branch_target(0x70, 0x10, |c| c.set_flag_v(false)), 0x8002);
    assert_eq!(branch_target(0x50, 0x10, |c| c.set_flag_v(true)), 0x8002);
}

#[test]
fn test_branch_backward() {
    // -4 from 0x8002
    assert_eq!(branch_target(0xD0, 0xFC, |c| c.set_flag_z(false)), 0x7FFE);
}

#[test]
fn test_branch_to_self() {
    // BRA -2 is the classic "JMP *" trap
    let mut cpu = setup_cpu(&[0x80, 0xFE]);
    cpu.run_batch(10);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_bra_always_taken() {
    assert_eq!(branch_target(0x80, 0x7F, |_| {}), 0x8081);
    assert_eq!(branch_target(0x80, 0x80, |_| {}), 0x7F82);
}

#[test]
fn test_branch_leaves_flags() {
    let mut cpu = setup_cpu(&[0xF0, 0x02]);
    cpu.set_flag_z(true);
    cpu.set_flag_c(true);
    let status = cpu.status();

    cpu.step();

    assert_eq!(cpu.status(), status);
}
