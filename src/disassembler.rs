//! 65C02 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//!
//! Two entry points are provided:
//! - [`disassemble`] walks a byte slice and returns decoded [`Instruction`]s
//! - [`disassemble_at`] renders the single instruction at an address on a live
//!   memory bus, as shown in CPU state dumps
//!
//! Operands are printed in the machine monitor style used by the state dump:
//! `LDA ($12), Y`, `STA $0200, X`, `JMP ($FFFC)`.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::MemoryBus;

pub use decoder::decode_instruction;
pub use formatter::format_instruction;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,
}

impl Instruction {
    /// Operand interpreted as a little-endian word, if the instruction has two
    /// operand bytes.
    pub fn operand_word(&self) -> Option<u16> {
        match self.operand_bytes.as_slice() {
            [lo, hi] => Some(u16::from_le_bytes([*lo, *hi])),
            _ => None,
        }
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Address of the first byte of the slice (affects branch targets)
    pub start_address: u16,
}

impl DisassemblyOptions {
    pub fn at(start_address: u16) -> Self {
        Self { start_address }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Undefined opcodes, and instructions cut short by the end of the slice, are
/// emitted as single-byte `.byte` directives.
///
/// # Examples
///
/// ```
/// use apple1_core::disassembler::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0xA9, 0x8D, 0x20, 0xEF, 0xFF, 0x02];
/// let listing: Vec<String> = disassemble(&code, DisassemblyOptions::at(0x0300))
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, vec!["LDA #$8D", "JSR $FFEF", ".byte $02"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[pc..], address)
            .unwrap_or_else(|| decoder::data_byte(bytes[pc], address));
        pc += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Renders the instruction stored at `addr` on a memory bus.
///
/// Memory is read with [`MemoryBus::peek`], so peripherals are never
/// disturbed. Undefined opcodes render as `???`. For `(zp), Y` the pointer
/// stored in zero page is appended in brackets.
///
/// # Examples
///
/// ```
/// use apple1_core::{FlatMemory, disassembler::disassemble_at};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x0300, &[0xB1, 0x24]); // LDA ($24), Y
/// mem.load(0x0024, &[0x56, 0x34]);
///
/// assert_eq!(disassemble_at(&mem, 0x0300), "LDA ($24), Y  [$3456]");
/// ```
pub fn disassemble_at<M: MemoryBus>(mem: &M, addr: u16) -> String {
    let bytes = [
        mem.peek(addr),
        mem.peek(addr.wrapping_add(1)),
        mem.peek(addr.wrapping_add(2)),
    ];

    let Some(instr) = decoder::decode_instruction(&bytes, addr) else {
        return "???".to_string();
    };

    let mut text = formatter::format_instruction(&instr);
    if instr.addressing_mode == AddressingMode::IndirectY {
        let zp = instr.operand_bytes[0] as u16;
        let pointer = u16::from_le_bytes([mem.peek(zp), mem.peek(zp.wrapping_add(1))]);
        text.push_str(&format!("  [${:04X}]", pointer));
    }
    text
}
