//! # 65C02 Instruction Implementations
//!
//! This module contains the implementations of all 65C02 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and, where the instruction has operands, the addressing mode it was decoded with.
//!
//! By the time an `execute_*` function runs, PC already points at the first operand byte.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **bits**: 65C02 memory bit operations (TRB, TSB)
//! - **branches**: Branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS, BRA)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY, INA, DEA)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK) and interrupt entry
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP, PHX, PHY, PLX, PLY)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod bits;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
