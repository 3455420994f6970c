//! Apple 1 memory bus.
//!
//! A flat 64KB RAM with the peripheral window at 0xD000-0xDFFF carved out.
//! CPU traffic to the window is routed to the keyboard and display; all other
//! addresses are plain RAM. Accesses to addresses 0 and 1 are legal but
//! reported to the host, since on the Apple 1 they usually mean a stray
//! pointer.

use crate::config::{BIOS_BASE, BIOS_SIZE};
use crate::devices::{self, Display, Keyboard, Register};
use crate::error::ImageError;
use crate::host::HostIo;
use crate::MemoryBus;

/// Apple 1 address space: RAM, BIOS page and PIA registers.
///
/// # Examples
///
/// ```
/// use apple1_core::{Apple1Bus, MemoryBus, RecordingHost};
///
/// let mut bus = Apple1Bus::new(RecordingHost::new());
/// bus.write(0xD012, 0xC8); // 'H' with bit 7 set
///
/// assert_eq!(bus.host().output, "H");
/// assert_eq!(bus.read(0xD012), 0x48);
/// ```
pub struct Apple1Bus<H: HostIo> {
    ram: Box<[u8; 65536]>,
    keyboard: Keyboard,
    display: Display,
    host: H,
}

impl<H: HostIo> Apple1Bus<H> {
    /// Creates a bus with zeroed RAM, an empty keyboard and a clear display.
    pub fn new(host: H) -> Self {
        Self {
            ram: Box::new([0; 65536]),
            keyboard: Keyboard::new(),
            display: Display::new(),
            host,
        }
    }

    // ========== Image Loading ==========

    /// Copies a BIOS image into 0xFF00-0xFFFF.
    pub fn load_bios(&mut self, bios: &[u8; BIOS_SIZE]) {
        let base = BIOS_BASE as usize;
        self.ram[base..base + BIOS_SIZE].copy_from_slice(bios);
        log::debug!("loaded {}-byte BIOS at ${:04X}", BIOS_SIZE, BIOS_BASE);
    }

    /// Like [`load_bios`](Self::load_bios) for a slice of unchecked length.
    pub fn load_bios_slice(&mut self, bios: &[u8]) -> Result<(), ImageError> {
        let image: &[u8; BIOS_SIZE] = bios
            .try_into()
            .map_err(|_| ImageError::BiosSize {
                expected: BIOS_SIZE,
                actual: bios.len(),
            })?;
        self.load_bios(image);
        Ok(())
    }

    /// Copies `data` into RAM starting at `origin`.
    ///
    /// Loading writes RAM directly: the peripheral window is not decoded and
    /// no address 0/1 warnings are raised. Bytes that would land past 0xFFFF
    /// are dropped and reported once through [`HostIo::error`].
    pub fn load_binary(&mut self, data: &[u8], origin: u16) {
        let start = origin as usize;
        let fits = data.len().min(self.ram.len() - start);
        self.ram[start..start + fits].copy_from_slice(&data[..fits]);

        let dropped = data.len() - fits;
        if dropped > 0 {
            self.host.error(&format!(
                "Load out of range: {} bytes dropped from {}",
                dropped,
                start + fits
            ));
        }
        log::debug!("loaded {} bytes at ${:04X}", fits, origin);
    }

    /// Like [`load_binary`](Self::load_binary), rejecting an empty image.
    pub fn load_program_slice(&mut self, data: &[u8], origin: u16) -> Result<(), ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        self.load_binary(data, origin);
        Ok(())
    }

    // ========== Keyboard ==========

    /// Queues `text` as keystrokes; see [`Keyboard::fill`].
    pub fn fill_key_buf(&mut self, text: &str) {
        self.keyboard.fill(text);
        log::debug!("keyboard queue filled with {} bytes", text.len());
    }

    /// Stores a raw key code as the pending key.
    pub fn set_last_key(&mut self, code: u8) {
        self.keyboard.set_last_key(code);
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    // ========== Host ==========

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Clears RAM and peripheral state, keeping the host.
    pub fn clear(&mut self) {
        self.ram.fill(0);
        self.keyboard = Keyboard::new();
        self.display = Display::new();
    }

    // ========== Peripheral Window ==========

    fn io_read(&mut self, addr: u16) -> u8 {
        match devices::decode_read(addr) {
            Some(Register::Keyboard) => {
                let key = self.keyboard.read();
                if !key.available {
                    self.host.warn("Reading keyboard but no key available");
                }
                key.value
            }
            Some(Register::KeyboardControl) => self.keyboard.status(),
            Some(Register::Display) => self.display.read(),
            Some(Register::DisplayControl) => {
                self.host.warn("Read from display status");
                0
            }
            None => {
                self.host.error(&format!("Read from Unknown I/O Address: {}", addr));
                0
            }
        }
    }

    fn io_write(&mut self, addr: u16, value: u8) {
        match devices::decode_write(addr) {
            Some(Register::Keyboard) => {
                self.host.warn(&format!("Write to keyboard I/O: {}", value));
            }
            Some(Register::KeyboardControl) => {
                self.host.warn(&format!("Write to keyboard status I/O: {}", value));
            }
            Some(Register::Display) => {
                let ch = self.display.write(value);
                self.host.on_output(ch);
            }
            Some(Register::DisplayControl) => {
                self.host.warn(&format!("Write to display status I/O: {}", value));
            }
            None => {
                self.host.error(&format!("Write to Unknown I/O Address: {}", addr));
            }
        }
    }

    fn io_peek(&self, addr: u16) -> u8 {
        match devices::decode_read(addr) {
            Some(Register::Keyboard) => self.keyboard.peek(),
            Some(Register::KeyboardControl) => self.keyboard.status(),
            Some(Register::Display) => self.display.read(),
            Some(Register::DisplayControl) | None => 0,
        }
    }
}

impl<H: HostIo> MemoryBus for Apple1Bus<H> {
    fn read(&mut self, addr: u16) -> u8 {
        if addr <= 1 {
            self.host.warn(&format!("Read from {}", addr));
        }
        if devices::is_io(addr) {
            return self.io_read(addr);
        }
        self.ram[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr <= 1 {
            self.host.warn(&format!("Write to {}", addr));
        }
        if devices::is_io(addr) {
            self.io_write(addr, value);
            return;
        }
        self.ram[addr as usize] = value;
    }

    fn peek(&self, addr: u16) -> u8 {
        if devices::is_io(addr) {
            return self.io_peek(addr);
        }
        self.ram[addr as usize]
    }
}
