//! # Apple 1 Emulator Core
//!
//! A 65C02 interpreter wired to the Apple 1 memory map: 64KB of RAM, a
//! 256-byte BIOS page at 0xFF00, and the keyboard and display registers of
//! the PIA at 0xD010-0xD013.
//!
//! The crate is host-agnostic. Display output and bus diagnostics go through
//! the [`HostIo`] trait; terminals, file loading and event loops belong to the
//! embedding program.
//!
//! ## Quick Start
//!
//! ```rust
//! use apple1_core::{Apple1, MachineConfig, RecordingHost};
//!
//! // Echo one key: LDA $D010; STA $D012; then an undefined opcode halts
//! let program = [0xAD, 0x10, 0xD0, 0x8D, 0x12, 0xD0, 0x02];
//!
//! let config = MachineConfig::default().with_entry_point(0x0280);
//! let mut apple = Apple1::with_config(RecordingHost::new(), config);
//! apple.load_binary(&program, 0x0280);
//! apple.press_key('x');
//!
//! apple.run_batch(1000);
//!
//! assert!(apple.halted());
//! assert_eq!(apple.host().output, "X");
//! ```
//!
//! ## Using the CPU on its own
//!
//! ```rust
//! use apple1_core::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // Reset vector low byte
//! memory.write(0xFFFD, 0x80); // Reset vector high byte
//!
//! let cpu = CPU::new(memory);
//!
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `opcodes` - 256-entry opcode table
//! - `addressing` - Addressing mode enumeration
//! - `status` - Processor status register
//! - `memory` - MemoryBus trait and a flat test memory
//! - `disassembler` - Instruction decoding and formatting
//! - `devices` - Apple 1 keyboard and display registers
//! - `bus` - Apple 1 address decoding
//! - `machine` - CPU and bus wired together
//! - `host` - Host callback trait and stock hosts

pub mod addressing;
pub mod bus;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod error;
pub mod host;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::Apple1Bus;
pub use config::{MachineConfig, BIOS_BASE, BIOS_SIZE};
pub use cpu::{CPU, IRQ_VECTOR, RESET_VECTOR, STACK_BASE};
pub use disassembler::{disassemble, disassemble_at, DisassemblyOptions, Instruction};
pub use error::ImageError;
pub use host::{HostIo, LogHost, RecordingHost};
pub use machine::Apple1;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};

#[cfg(feature = "wasm")]
pub use wasm::Apple1Emulator;
