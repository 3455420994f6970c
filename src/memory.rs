//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! machine it runs in. The CPU never owns RAM directly; every fetch, operand
//! read and store goes through this interface.
//!
//! ## Design Principles
//!
//! - No bus errors: reads always yield a byte, writes never fail
//! - `read` takes `&mut self` because memory-mapped registers have read side
//!   effects (the Apple 1 keyboard register consumes a key when read)
//! - `peek` is the side-effect-free view used by diagnostics

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use apple1_core::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.peek(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use apple1_core::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&mut self, addr: u16) -> u8 {
///         self.peek(addr)
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
///
///     fn peek(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// May have side effects on memory-mapped registers. Must never panic.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Writes to read-only or unmapped locations may be ignored. Must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a byte without triggering any side effects.
    ///
    /// Used by the disassembler and state dumps so that inspecting memory never
    /// consumes keyboard input or raises host warnings.
    fn peek(&self, addr: u16) -> u8;
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are plain RAM initialized to 0x00. Useful as a test
/// double for the CPU and for running full-memory test images.
///
/// # Examples
///
/// ```
/// use apple1_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `origin`, wrapping at 0xFFFF.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_load_wraps() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFF, &[0x11, 0x22]);

        assert_eq!(mem.peek(0xFFFF), 0x11);
        assert_eq!(mem.peek(0x0000), 0x22);
    }
}
