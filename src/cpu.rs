//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 65C02 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): packed N, V, R, B, D, I, Z, C bits
//! - **Halt flag**: set by undefined opcodes, cleared only by [`CPU::reset`]
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run_batch()`: Execute up to N instructions, stopping early on halt
//!
//! Each step is one lookup into [`OPCODE_TABLE`] and one dispatch on the
//! resulting [`Operation`]. Nothing in this module returns errors: an undefined
//! opcode sets the halt flag and leaves every register untouched.

use crate::addressing::AddressingMode;
use crate::disassembler::disassemble_at;
use crate::instructions::{
    alu, bits, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::opcodes::{Operation, OPCODE_TABLE};
use crate::status::{Status, B, C, D, I, N, R, V, Z};
use crate::MemoryBus;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the reset vector (low byte).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (low byte).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 65C02 CPU state and execution context.
///
/// The CPU owns its memory bus and reaches RAM and peripherals only through the
/// [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0300, 0xA9); // LDA #$42
/// memory.write(0x0301, 0x42);
///
/// let mut cpu = CPU::with_entry_point(memory, 0x0300);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x0302);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) p: Status,

    /// Set when an undefined opcode was fetched
    pub(crate) halted: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU that starts at the address held in the reset vector
    /// (0xFFFC/0xFFFD, little-endian).
    ///
    /// Registers are in the power-on state: A, X, Y zero, SP = 0xFF, only the
    /// reserved status bit set.
    pub fn new(memory: M) -> Self {
        let pc = u16::from_le_bytes([memory.peek(RESET_VECTOR), memory.peek(RESET_VECTOR + 1)]);
        Self::with_entry_point(memory, pc)
    }

    /// Creates a new CPU in the power-on state with PC set to `pc`.
    pub fn with_entry_point(memory: M, pc: u16) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0xFF,
            p: Status::new(),
            halted: false,
            memory,
        }
    }

    /// Restores the power-on register state, clears the halt flag and sets PC.
    ///
    /// Memory is left untouched.
    pub fn reset(&mut self, pc: u16) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFF;
        self.p = Status::new();
        self.halted = false;
        self.pc = pc;
    }

    /// Executes one instruction.
    ///
    /// Returns `true` if an instruction ran. Returns `false` without touching
    /// any register when the CPU is halted, or when the opcode at PC is
    /// undefined (which sets the halt flag).
    ///
    /// # Examples
    ///
    /// ```
    /// use apple1_core::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0200, 0x02); // undefined opcode
    ///
    /// let mut cpu = CPU::with_entry_point(mem, 0x0200);
    /// assert!(!cpu.step());
    /// assert!(cpu.halted());
    /// assert_eq!(cpu.pc(), 0x0200);
    /// ```
    pub fn step(&mut self) -> bool {
        if self.halted {
            return false;
        }

        let opcode = self.memory.read(self.pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        if metadata.is_illegal() {
            log::warn!(
                "illegal opcode ${:02X} at ${:04X}, halting",
                opcode,
                self.pc
            );
            self.halted = true;
            return false;
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", self.dump());
        }

        self.pc = self.pc.wrapping_add(1);
        self.execute(metadata.operation, metadata.addressing_mode);
        true
    }

    /// Executes up to `count` instructions, stopping the instant the halt flag
    /// becomes set.
    ///
    /// Returns the number of instructions actually executed.
    pub fn run_batch(&mut self, count: usize) -> usize {
        let mut executed = 0;
        while executed < count && self.step() {
            executed += 1;
        }
        executed
    }

    /// Requests a hardware interrupt.
    ///
    /// Ignored (returns `false`) while the I flag is set. Otherwise pushes PC
    /// and the status byte with B clear, sets I and jumps through the vector at
    /// 0xFFFE.
    pub fn irq(&mut self) -> bool {
        if self.p.is_set(I) {
            return false;
        }
        control::enter_interrupt(self);
        true
    }

    fn execute(&mut self, operation: Operation, mode: AddressingMode) {
        use Operation::*;
        match operation {
            Adc => alu::execute_adc(self, mode),
            And => alu::execute_and(self, mode),
            Bit => alu::execute_bit(self, mode),
            Cmp => alu::execute_cmp(self, mode),
            Cpx => alu::execute_cpx(self, mode),
            Cpy => alu::execute_cpy(self, mode),
            Eor => alu::execute_eor(self, mode),
            Ora => alu::execute_ora(self, mode),
            Sbc => alu::execute_sbc(self, mode),

            Trb => bits::execute_trb(self, mode),
            Tsb => bits::execute_tsb(self, mode),

            Bcc => branches::execute_bcc(self, mode),
            Bcs => branches::execute_bcs(self, mode),
            Beq => branches::execute_beq(self, mode),
            Bmi => branches::execute_bmi(self, mode),
            Bne => branches::execute_bne(self, mode),
            Bpl => branches::execute_bpl(self, mode),
            Bra => branches::execute_bra(self, mode),
            Bvc => branches::execute_bvc(self, mode),
            Bvs => branches::execute_bvs(self, mode),

            Brk => control::execute_brk(self),
            Jmp => control::execute_jmp(self, mode),
            Jsr => control::execute_jsr(self, mode),
            Nop => {}
            Rti => control::execute_rti(self),
            Rts => control::execute_rts(self),

            Clc => flags::execute_clc(self),
            Cld => flags::execute_cld(self),
            Cli => flags::execute_cli(self),
            Clv => flags::execute_clv(self),
            Sec => flags::execute_sec(self),
            Sed => flags::execute_sed(self),
            Sei => flags::execute_sei(self),

            Dea => inc_dec::execute_dea(self),
            Dec => inc_dec::execute_dec(self, mode),
            Dex => inc_dec::execute_dex(self),
            Dey => inc_dec::execute_dey(self),
            Ina => inc_dec::execute_ina(self),
            Inc => inc_dec::execute_inc(self, mode),
            Inx => inc_dec::execute_inx(self),
            Iny => inc_dec::execute_iny(self),

            Lda => load_store::execute_lda(self, mode),
            Ldx => load_store::execute_ldx(self, mode),
            Ldy => load_store::execute_ldy(self, mode),
            Sta => load_store::execute_sta(self, mode),
            Stx => load_store::execute_stx(self, mode),
            Sty => load_store::execute_sty(self, mode),
            Stz => load_store::execute_stz(self, mode),

            Asl => shifts::execute_asl(self, mode),
            Lsr => shifts::execute_lsr(self, mode),
            Rol => shifts::execute_rol(self, mode),
            Ror => shifts::execute_ror(self, mode),

            Pha => stack::execute_pha(self),
            Php => stack::execute_php(self),
            Phx => stack::execute_phx(self),
            Phy => stack::execute_phy(self),
            Pla => stack::execute_pla(self),
            Plp => stack::execute_plp(self),
            Plx => stack::execute_plx(self),
            Ply => stack::execute_ply(self),

            Tax => transfer::execute_tax(self),
            Tay => transfer::execute_tay(self),
            Tsx => transfer::execute_tsx(self),
            Txa => transfer::execute_txa(self),
            Txs => transfer::execute_txs(self),
            Tya => transfer::execute_tya(self),

            // Filtered out in step()
            Illegal => self.halted = true,
        }
    }

    // ========== Operand Fetch and Addressing ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch();
        let hi = self.fetch();
        u16::from_le_bytes([lo, hi])
    }

    /// Reads the little-endian word at `addr`, `addr + 1`.
    ///
    /// The high byte is not wrapped within the page, so a pointer at 0x00FF
    /// takes its high byte from 0x0100.
    pub(crate) fn word_at(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read(addr);
        let hi = self.memory.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Resolves the effective address for `mode`, consuming operand bytes.
    ///
    /// For `Immediate` this is the operand value itself and for `Accumulator`
    /// it is the accumulator. `Implied` resolves to 0.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::IndirectX => {
                let zp = self.fetch().wrapping_add(self.x);
                self.word_at(zp as u16)
            }
            AddressingMode::ZeroPage | AddressingMode::Immediate => self.fetch() as u16,
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::IndirectY => {
                let zp = self.fetch();
                self.word_at(zp as u16).wrapping_add(self.y as u16)
            }
            AddressingMode::ZeroPageX => self.fetch().wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.fetch().wrapping_add(self.y) as u16,
            AddressingMode::AbsoluteX => self.fetch_word().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.fetch_word().wrapping_add(self.y as u16),
            AddressingMode::Relative => {
                // PC already points past the displacement byte
                let offset = self.fetch() as i8;
                self.pc.wrapping_add_signed(offset as i16)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                self.word_at(ptr)
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch_word().wrapping_add(self.x as u16);
                self.word_at(ptr)
            }
            AddressingMode::IndirectZeroPage => {
                let zp = self.fetch();
                self.word_at(zp as u16)
            }
            AddressingMode::Accumulator => self.a as u16,
            AddressingMode::Implied => 0,
        }
    }

    /// Resolves the operand value for `mode`.
    ///
    /// Immediate operands are used directly; accumulator mode yields A; every
    /// other mode reads through the bus at the effective address.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch(),
            AddressingMode::Accumulator => self.a,
            _ => {
                let addr = self.effective_address(mode);
                self.memory.read(addr)
            }
        }
    }

    // ========== Stack ==========

    /// Writes `value` at the stack pointer, then decrements SP (wrapping).
    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes the high byte, then the low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_byte(hi);
        self.push_byte(lo);
    }

    /// Increments SP (wrapping), then reads the byte it points to.
    pub(crate) fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pops the low byte, then the high byte.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop_byte();
        let hi = self.pop_byte();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Diagnostics ==========

    /// Renders registers, flags and the instruction at PC.
    ///
    /// Flags appear as `NVRBDIZC` letters, uppercase when set. Memory is read
    /// with [`MemoryBus::peek`], so dumping never disturbs peripherals.
    ///
    /// # Examples
    ///
    /// ```
    /// use apple1_core::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFF00, 0xD8); // CLD
    ///
    /// let cpu = CPU::with_entry_point(mem, 0xFF00);
    /// assert_eq!(
    ///     cpu.dump(),
    ///     "PC = $FF00 A = $00 X = $00 Y = $00 SP = $FF nvRbdizc  CLD"
    /// );
    /// ```
    pub fn dump(&self) -> String {
        format!(
            "PC = ${:04X} A = ${:02X} X = ${:02X} Y = ${:02X} SP = ${:02X} {}  {}",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.p,
            disassemble_at(&self.memory, self.pc)
        )
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the raw status register.
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns true once an undefined opcode has been fetched.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.is_set(N)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.is_set(V)
    }

    /// Returns true if the reserved bit is set.
    pub fn flag_r(&self) -> bool {
        self.p.is_set(R)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.p.is_set(B)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.is_set(D)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.is_set(I)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.is_set(Z)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.is_set(C)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets PC. The next `step` fetches from `addr`.
    pub fn jump_to(&mut self, addr: u16) {
        self.pc = addr;
    }

    pub fn set_status(&mut self, value: u8) {
        self.p = Status(value);
    }

    /// Sets Z and N from `value`, leaving every other flag untouched.
    pub fn set_nz(&mut self, value: u8) {
        self.p.set_nz(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set_if(N, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set_if(V, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set_if(B, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set_if(D, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set_if(I, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set_if(Z, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set_if(C, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(pc: u16, program: &[u8]) -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(pc, program);
        CPU::with_entry_point(mem, pc)
    }

    #[test]
    fn test_cpu_initialization() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0xFF);

        let cpu = CPU::new(mem);

        assert_eq!(cpu.pc(), 0xFF00);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), R);
        assert!(!cpu.halted());
    }

    #[test]
    fn test_push_pop_byte_round_trip() {
        let mut cpu = cpu_at(0x0200, &[]);
        let sp = cpu.sp();

        cpu.push_byte(0xA5);
        assert_eq!(cpu.sp(), sp.wrapping_sub(1));
        assert_eq!(cpu.memory().peek(0x01FF), 0xA5);

        assert_eq!(cpu.pop_byte(), 0xA5);
        assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn test_push_pop_word_round_trip() {
        let mut cpu = cpu_at(0x0200, &[]);
        let sp = cpu.sp();

        cpu.push_word(0xBEEF);
        // High byte pushed first
        assert_eq!(cpu.memory().peek(0x01FF), 0xBE);
        assert_eq!(cpu.memory().peek(0x01FE), 0xEF);

        assert_eq!(cpu.pop_word(), 0xBEEF);
        assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = cpu_at(0x0200, &[]);
        cpu.set_sp(0x00);

        cpu.push_byte(0x11);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().peek(0x0100), 0x11);

        assert_eq!(cpu.pop_byte(), 0x11);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_indirect_x_pointer_not_wrapped_in_zero_page() {
        // ($FE,X) with X=1 reads the pointer from $FF/$100
        let mut cpu = cpu_at(0x0200, &[0xFE]);
        cpu.set_x(0x01);
        cpu.memory_mut().write(0x00FF, 0x34);
        cpu.memory_mut().write(0x0100, 0x12);

        assert_eq!(cpu.effective_address(AddressingMode::IndirectX), 0x1234);
    }

    #[test]
    fn test_relative_is_from_next_instruction() {
        let mut cpu = cpu_at(0x0200, &[0xFE]);
        // After fetching the displacement PC = 0x0201; -2 gives 0x01FF
        assert_eq!(cpu.effective_address(AddressingMode::Relative), 0x01FF);
        assert_eq!(cpu.pc(), 0x0201);
    }

    #[test]
    fn test_absolute_indexed_indirect() {
        let mut cpu = cpu_at(0x0200, &[0x00, 0x30]);
        cpu.set_x(0x04);
        cpu.memory_mut().write(0x3004, 0xCD);
        cpu.memory_mut().write(0x3005, 0xAB);

        assert_eq!(
            cpu.effective_address(AddressingMode::AbsoluteIndexedIndirect),
            0xABCD
        );
    }

    #[test]
    fn test_halted_cpu_does_not_step() {
        let mut cpu = cpu_at(0x0200, &[0x02, 0xEA]);
        assert!(!cpu.step());
        assert!(cpu.halted());
        assert!(!cpu.step());
        assert_eq!(cpu.pc(), 0x0200);
    }

    #[test]
    fn test_reset_clears_halt() {
        let mut cpu = cpu_at(0x0200, &[0x02]);
        cpu.step();
        assert!(cpu.halted());

        cpu.reset(0x0300);
        assert!(!cpu.halted());
        assert_eq!(cpu.pc(), 0x0300);
        assert_eq!(cpu.sp(), 0xFF);
    }
}
