//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    // Undecodable byte
    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = instr.operand_word().unwrap_or(0);

    match instr.addressing_mode {
        Implied => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X}, X", byte),
        ZeroPageY => format!("${:02X}, Y", byte),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add_signed(byte as i8 as i16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X}, X", word),
        AbsoluteY => format!("${:04X}, Y", word),
        Indirect => format!("(${:04X})", word),
        AbsoluteIndexedIndirect => format!("(${:04X}, X)", word),
        IndirectX => format!("(${:02X}, X)", byte),
        IndirectY => format!("(${:02X}), Y", byte),
        IndirectZeroPage => format!("(${:02X})", byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
        operands: &[u8],
    ) -> Instruction {
        Instruction {
            address: 0x1000,
            opcode,
            mnemonic,
            addressing_mode: mode,
            operand_bytes: operands.to_vec(),
            size_bytes: 1 + operands.len() as u8,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr(0xA9, "LDA", AddressingMode::Immediate, &[0x42]);
        assert_eq!(format_instruction(&i), "LDA #$42");
    }

    #[test]
    fn test_format_indexed_has_space_after_comma() {
        let i = instr(0xB5, "LDA", AddressingMode::ZeroPageX, &[0x12]);
        assert_eq!(format_instruction(&i), "LDA $12, X");
        let i = instr(0x01, "ORA", AddressingMode::IndirectX, &[0x12]);
        assert_eq!(format_instruction(&i), "ORA ($12, X)");
    }

    #[test]
    fn test_format_relative_backwards() {
        let i = instr(0xD0, "BNE", AddressingMode::Relative, &[0xFE]);
        assert_eq!(format_instruction(&i), "BNE $1000");
    }

    #[test]
    fn test_format_accumulator() {
        let i = instr(0x1A, "INC", AddressingMode::Accumulator, &[]);
        assert_eq!(format_instruction(&i), "INC A");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let i = instr(0xFF, ".byte", AddressingMode::Implied, &[0xFF]);
        assert_eq!(format_instruction(&i), ".byte $FF");
    }
}
