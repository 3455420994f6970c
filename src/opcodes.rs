//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for both execution and disassembly.
//!
//! The table covers:
//! - **151 documented NMOS instructions**
//! - **27 65C02 additions** (BRA, PHX/PHY/PLX/PLY, STZ, TRB/TSB, INC A/DEC A,
//!   `(zp)` addressing, `JMP (abs,X)`, `BIT #imm` and indexed BIT)
//! - **NOP at 0x07**, a single-byte no-op
//! - **77 undefined slots**, mapped to [`Operation::Illegal`] with mnemonic "???"
//!
//! Each entry pairs an [`Operation`] with an [`AddressingMode`]. The CPU's
//! `step` is a single lookup into this table followed by a dispatch on the
//! operation, so what the disassembler prints is always what the CPU executes.

use crate::addressing::AddressingMode;

/// Operation performed by an opcode, independent of its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bra,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dea,
    Dec,
    Dex,
    Dey,
    Eor,
    Ina,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Phx,
    Phy,
    Pla,
    Plp,
    Plx,
    Ply,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Stz,
    Tax,
    Tay,
    Trb,
    Tsb,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undefined opcode slot; executing it halts the CPU.
    Illegal,
}

impl Operation {
    /// Assembler mnemonic for this operation.
    ///
    /// `Ina`/`Dea` print as INC/DEC since they use accumulator addressing
    /// (`INC A`, `DEC A`).
    pub const fn mnemonic(self) -> &'static str {
        use Operation::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Bra => "BRA",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dea | Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Ina | Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Phx => "PHX",
            Phy => "PHY",
            Pla => "PLA",
            Plp => "PLP",
            Plx => "PLX",
            Ply => "PLY",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Stz => "STZ",
            Tax => "TAX",
            Tay => "TAY",
            Trb => "TRB",
            Tsb => "TSB",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Illegal => "???",
        }
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use apple1_core::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation executed for this opcode.
    pub operation: Operation,

    /// Instruction mnemonic ("???" for undefined slots).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Returns true for undefined opcode slots.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.operation, Operation::Illegal)
    }
}

const fn op(operation: Operation, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        operation,
        mnemonic: operation.mnemonic(),
        addressing_mode,
        size_bytes: addressing_mode.instruction_size(),
    }
}

const ILL: OpcodeMetadata = op(Operation::Illegal, AddressingMode::Implied);

use AddressingMode::{
    Absolute as ABS, AbsoluteIndexedIndirect as AIX, AbsoluteX as ABX, AbsoluteY as ABY,
    Accumulator as ACC, Immediate as IMM, Implied as IMP, Indirect as IND, IndirectX as IZX,
    IndirectY as IZY, IndirectZeroPage as IZP, Relative as REL, ZeroPage as ZP,
    ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use apple1_core::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert!(illegal.is_illegal());
/// assert_eq!(illegal.mnemonic, "???");
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op(Brk, IMP), op(Ora, IZX), ILL,          ILL,          op(Tsb, ZP),  op(Ora, ZP),  op(Asl, ZP),  op(Nop, IMP),
    op(Php, IMP), op(Ora, IMM), op(Asl, ACC), ILL,          op(Tsb, ABS), op(Ora, ABS), op(Asl, ABS), ILL,
    // 0x10
    op(Bpl, REL), op(Ora, IZY), op(Ora, IZP), ILL,          op(Trb, ZP),  op(Ora, ZPX), op(Asl, ZPX), ILL,
    op(Clc, IMP), op(Ora, ABY), op(Ina, ACC), ILL,          op(Trb, ABS), op(Ora, ABX), op(Asl, ABX), ILL,
    // 0x20
    op(Jsr, ABS), op(And, IZX), ILL,          ILL,          op(Bit, ZP),  op(And, ZP),  op(Rol, ZP),  ILL,
    op(Plp, IMP), op(And, IMM), op(Rol, ACC), ILL,          op(Bit, ABS), op(And, ABS), op(Rol, ABS), ILL,
    // 0x30
    op(Bmi, REL), op(And, IZY), op(And, IZP), ILL,          op(Bit, ZPX), op(And, ZPX), op(Rol, ZPX), ILL,
    op(Sec, IMP), op(And, ABY), op(Dea, ACC), ILL,          op(Bit, ABX), op(And, ABX), op(Rol, ABX), ILL,
    // 0x40
    op(Rti, IMP), op(Eor, IZX), ILL,          ILL,          ILL,          op(Eor, ZP),  op(Lsr, ZP),  ILL,
    op(Pha, IMP), op(Eor, IMM), op(Lsr, ACC), ILL,          op(Jmp, ABS), op(Eor, ABS), op(Lsr, ABS), ILL,
    // 0x50
    op(Bvc, REL), op(Eor, IZY), op(Eor, IZP), ILL,          ILL,          op(Eor, ZPX), op(Lsr, ZPX), ILL,
    op(Cli, IMP), op(Eor, ABY), op(Phy, IMP), ILL,          ILL,          op(Eor, ABX), op(Lsr, ABX), ILL,
    // 0x60
    op(Rts, IMP), op(Adc, IZX), ILL,          ILL,          op(Stz, ZP),  op(Adc, ZP),  op(Ror, ZP),  ILL,
    op(Pla, IMP), op(Adc, IMM), op(Ror, ACC), ILL,          op(Jmp, IND), op(Adc, ABS), op(Ror, ABS), ILL,
    // 0x70
    op(Bvs, REL), op(Adc, IZY), op(Adc, IZP), ILL,          op(Stz, ZPX), op(Adc, ZPX), op(Ror, ZPX), ILL,
    op(Sei, IMP), op(Adc, ABY), op(Ply, IMP), ILL,          op(Jmp, AIX), op(Adc, ABX), op(Ror, ABX), ILL,
    // 0x80
    op(Bra, REL), op(Sta, IZX), ILL,          ILL,          op(Sty, ZP),  op(Sta, ZP),  op(Stx, ZP),  ILL,
    op(Dey, IMP), op(Bit, IMM), op(Txa, IMP), ILL,          op(Sty, ABS), op(Sta, ABS), op(Stx, ABS), ILL,
    // 0x90
    op(Bcc, REL), op(Sta, IZY), op(Sta, IZP), ILL,          op(Sty, ZPX), op(Sta, ZPX), op(Stx, ZPY), ILL,
    op(Tya, IMP), op(Sta, ABY), op(Txs, IMP), ILL,          op(Stz, ABS), op(Sta, ABX), op(Stz, ABX), ILL,
    // 0xA0
    op(Ldy, IMM), op(Lda, IZX), op(Ldx, IMM), ILL,          op(Ldy, ZP),  op(Lda, ZP),  op(Ldx, ZP),  ILL,
    op(Tay, IMP), op(Lda, IMM), op(Tax, IMP), ILL,          op(Ldy, ABS), op(Lda, ABS), op(Ldx, ABS), ILL,
    // 0xB0
    op(Bcs, REL), op(Lda, IZY), op(Lda, IZP), ILL,          op(Ldy, ZPX), op(Lda, ZPX), op(Ldx, ZPY), ILL,
    op(Clv, IMP), op(Lda, ABY), op(Tsx, IMP), ILL,          op(Ldy, ABX), op(Lda, ABX), op(Ldx, ABY), ILL,
    // 0xC0
    op(Cpy, IMM), op(Cmp, IZX), ILL,          ILL,          op(Cpy, ZP),  op(Cmp, ZP),  op(Dec, ZP),  ILL,
    op(Iny, IMP), op(Cmp, IMM), op(Dex, IMP), ILL,          op(Cpy, ABS), op(Cmp, ABS), op(Dec, ABS), ILL,
    // 0xD0
    op(Bne, REL), op(Cmp, IZY), op(Cmp, IZP), ILL,          ILL,          op(Cmp, ZPX), op(Dec, ZPX), ILL,
    op(Cld, IMP), op(Cmp, ABY), op(Phx, IMP), ILL,          ILL,          op(Cmp, ABX), op(Dec, ABX), ILL,
    // 0xE0
    op(Cpx, IMM), op(Sbc, IZX), ILL,          ILL,          op(Cpx, ZP),  op(Sbc, ZP),  op(Inc, ZP),  ILL,
    op(Inx, IMP), op(Sbc, IMM), op(Nop, IMP), ILL,          op(Cpx, ABS), op(Sbc, ABS), op(Inc, ABS), ILL,
    // 0xF0
    op(Beq, REL), op(Sbc, IZY), op(Sbc, IZP), ILL,          ILL,          op(Sbc, ZPX), op(Inc, ZPX), ILL,
    op(Sed, IMP), op(Sbc, ABY), op(Plx, IMP), ILL,          ILL,          op(Sbc, ABX), op(Inc, ABX), ILL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_slot_count() {
        let illegal = OPCODE_TABLE.iter().filter(|m| m.is_illegal()).count();
        assert_eq!(illegal, 77);
    }

    #[test]
    fn test_65c02_additions_present() {
        assert_eq!(OPCODE_TABLE[0x80].operation, Operation::Bra);
        assert_eq!(OPCODE_TABLE[0x7C].addressing_mode, AddressingMode::AbsoluteIndexedIndirect);
        assert_eq!(OPCODE_TABLE[0xB2].addressing_mode, AddressingMode::IndirectZeroPage);
        assert_eq!(OPCODE_TABLE[0x1A].operation, Operation::Ina);
        assert_eq!(OPCODE_TABLE[0x1A].mnemonic, "INC");
        assert_eq!(OPCODE_TABLE[0x9E].operation, Operation::Stz);
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        for metadata in OPCODE_TABLE.iter() {
            assert_eq!(
                metadata.size_bytes,
                metadata.addressing_mode.operand_bytes() + 1
            );
        }
    }
}
