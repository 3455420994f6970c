//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes a few instructions to find edge cases and crashes.

#![no_main]

use apple1_core::{FlatMemory, MemoryBus, OPCODE_TABLE, CPU};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status register, every bit pattern allowed
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // IRQ vector
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);

    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::with_entry_point(memory, 0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];
    let executed = cpu.step();

    // Undefined opcodes halt without moving PC; everything else executes
    assert_eq!(executed, !OPCODE_TABLE[opcode as usize].is_illegal());
    if !executed {
        assert!(cpu.halted());
        assert_eq!(cpu.pc(), 0x8000);
    }

    let _ = cpu.run_batch(input.steps as usize);
    let _ = cpu.dump();
});
