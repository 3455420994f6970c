//! Instruction decoder for the 65C02 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `Some(Instruction)` if the opcode is defined and the slice holds all of its
/// operand bytes, `None` otherwise
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.is_illegal() {
        return None;
    }

    let operand_len = metadata.addressing_mode.operand_bytes() as usize;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
    })
}

/// A `.byte` directive standing in for an undecodable byte.
pub(crate) fn data_byte(byte: u8, address: u16) -> Instruction {
    Instruction {
        address,
        opcode: byte,
        mnemonic: ".byte",
        addressing_mode: AddressingMode::Implied,
        operand_bytes: vec![byte],
        size_bytes: 1,
    }
}
