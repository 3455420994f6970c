//! # Addressing Modes
//!
//! This module defines the 15 addressing modes understood by the 65C02 core.
//! Each mode determines how many operand bytes follow the opcode and how the
//! CPU turns them into an effective address.

/// 65C02 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX,
///   IndirectY, IndirectZeroPage
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect, AbsoluteIndexedIndirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Indexed indirect: word stored at zero page `(operand + X) & 0xFF`.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// Indirect indexed: word stored at zero page operand, plus Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// 16-bit address indexed by X. No page-crossing penalty is modelled.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. No page-crossing penalty is modelled.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Signed 8-bit displacement from the address of the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Word stored at a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Word stored at `operand + X` (65C02 `JMP (abs,X)`).
    AbsoluteIndexedIndirect,

    /// Word stored at a zero page pointer, no index (65C02 addition).
    ///
    /// Example: LDA ($40)
    IndirectZeroPage,

    /// Operates directly on the accumulator register.
    ///
    /// Example: ROL A
    Accumulator,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteIndexedIndirect => 2,
            _ => 1,
        }
    }

    /// Total instruction size in bytes (opcode plus operands).
    pub const fn instruction_size(self) -> u8 {
        self.operand_bytes() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_sizes() {
        assert_eq!(AddressingMode::Implied.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::IndirectZeroPage.operand_bytes(), 1);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::AbsoluteIndexedIndirect.operand_bytes(), 2);
        assert_eq!(AddressingMode::Indirect.instruction_size(), 3);
    }
}
