//! The Apple 1 machine: a 65C02 wired to the Apple 1 bus.
//!
//! [`Apple1`] owns the CPU, which in turn owns the bus, RAM, peripherals and
//! host. It is the type an embedding program drives: load a BIOS, optionally a
//! program, queue keystrokes, then call [`Apple1::run_batch`] at whatever
//! cadence the host's event loop prefers.

use crate::bus::Apple1Bus;
use crate::config::{MachineConfig, BIOS_SIZE};
use crate::cpu::CPU;
use crate::error::ImageError;
use crate::host::HostIo;

/// Apple 1 emulator core.
///
/// # Examples
///
/// ```
/// use apple1_core::{Apple1, MachineConfig, RecordingHost};
///
/// // LDA #$C8; STA $D012; LDA #$C9; STA $D012; .byte $02 (halt)
/// let program = [0xA9, 0xC8, 0x8D, 0x12, 0xD0, 0xA9, 0xC9, 0x8D, 0x12, 0xD0, 0x02];
///
/// let config = MachineConfig::default().with_entry_point(0x0300);
/// let mut apple = Apple1::with_config(RecordingHost::new(), config);
/// apple.load_binary(&program, 0x0300);
///
/// assert_eq!(apple.run_batch(100), 4);
/// assert!(apple.halted());
/// assert_eq!(apple.host().output, "HI");
/// ```
pub struct Apple1<H: HostIo> {
    cpu: CPU<Apple1Bus<H>>,
    config: MachineConfig,
}

impl<H: HostIo> Apple1<H> {
    /// Creates a machine with the default configuration (PC = 0xFF00).
    pub fn new(host: H) -> Self {
        Self::with_config(host, MachineConfig::default())
    }

    pub fn with_config(host: H, config: MachineConfig) -> Self {
        let bus = Apple1Bus::new(host);
        Self {
            cpu: CPU::with_entry_point(bus, config.entry_point),
            config,
        }
    }

    // ========== Execution ==========

    /// Executes one instruction. Returns false if the CPU is halted.
    pub fn step(&mut self) -> bool {
        self.cpu.step()
    }

    /// Executes up to `count` instructions, stopping early on halt.
    ///
    /// Returns the number of instructions executed.
    pub fn run_batch(&mut self, count: usize) -> usize {
        self.cpu.run_batch(count)
    }

    /// Requests a hardware interrupt; see [`CPU::irq`].
    pub fn irq(&mut self) -> bool {
        self.cpu.irq()
    }

    /// Returns the CPU to its power-on state at the configured entry point.
    ///
    /// Clears the halt flag. Memory and peripherals are kept.
    pub fn reset(&mut self) {
        self.cpu.reset(self.config.entry_point);
        log::debug!("reset to ${:04X}", self.config.entry_point);
    }

    pub fn halted(&self) -> bool {
        self.cpu.halted()
    }

    /// CPU state dump; see [`CPU::dump`].
    pub fn dump(&self) -> String {
        self.cpu.dump()
    }

    // ========== Keyboard ==========

    /// Queues `text` as keystrokes. `'\n'` is typed as carriage return.
    pub fn fill_key_buf(&mut self, text: &str) {
        self.cpu.memory_mut().fill_key_buf(text);
    }

    /// Presses a single key on the host keyboard.
    ///
    /// Newline is sent as carriage return and letters are upper-cased when
    /// the configuration asks for it. Characters outside Latin-1 cannot be
    /// typed and clear the pending key.
    pub fn press_key(&mut self, ch: char) {
        let ch = if self.config.uppercase_keys {
            ch.to_ascii_uppercase()
        } else {
            ch
        };
        let code = match ch {
            '\n' => b'\r',
            ch => u8::try_from(ch).unwrap_or(0),
        };
        self.set_last_key(code);
    }

    /// Stores a raw key code as the pending key.
    pub fn set_last_key(&mut self, code: u8) {
        self.cpu.memory_mut().set_last_key(code);
    }

    // ========== Loading ==========

    /// Copies a BIOS image into 0xFF00-0xFFFF.
    pub fn load_bios(&mut self, bios: &[u8; BIOS_SIZE]) {
        self.cpu.memory_mut().load_bios(bios);
    }

    pub fn load_bios_slice(&mut self, bios: &[u8]) -> Result<(), ImageError> {
        self.cpu.memory_mut().load_bios_slice(bios)
    }

    /// Copies a program image into RAM at `origin`; see
    /// [`Apple1Bus::load_binary`].
    pub fn load_binary(&mut self, data: &[u8], origin: u16) {
        self.cpu.memory_mut().load_binary(data, origin);
    }

    pub fn load_program_slice(&mut self, data: &[u8], origin: u16) -> Result<(), ImageError> {
        self.cpu.memory_mut().load_program_slice(data, origin)
    }

    // ========== Accessors ==========

    pub fn cpu(&self) -> &CPU<Apple1Bus<H>> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU<Apple1Bus<H>> {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Apple1Bus<H> {
        self.cpu.memory()
    }

    pub fn bus_mut(&mut self) -> &mut Apple1Bus<H> {
        self.cpu.memory_mut()
    }

    pub fn host(&self) -> &H {
        self.bus().host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.bus_mut().host_mut()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}
