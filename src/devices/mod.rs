//! Apple 1 peripheral registers.
//!
//! The Apple 1 talks to its keyboard and display through a 6820 PIA decoded
//! into the 0xD000-0xDFFF window. Only four registers are meaningful:
//!
//! | Address | Register | Read | Write |
//! |---------|----------|------|-------|
//! | 0xD010  | KBD      | next key, bit 7 set | warning |
//! | 0xD011  | KBDCR    | 0x80 key pending, 0x01 idle | warning |
//! | 0xD012  | DSP      | last character written, bit 7 clear | output character |
//! | 0xD013  | DSPCR    | warning, reads 0 | warning |
//!
//! Reads decode the exact address (0xD0F2 is accepted as an alias of DSP).
//! Writes are folded with `(addr & 0xF00F) | 0x0010` before decoding, so
//! mirrors such as 0xD0F2 or 0xD312 reach the same registers.

pub mod display;
pub mod keyboard;

pub use display::Display;
pub use keyboard::{KeyRead, Keyboard};

/// First address of the peripheral window.
pub const IO_START: u16 = 0xD000;

/// Last address of the peripheral window.
pub const IO_END: u16 = 0xDFFF;

/// Keyboard data register.
pub const KBD: u16 = 0xD010;

/// Keyboard control/status register.
pub const KBD_CR: u16 = 0xD011;

/// Display data register.
pub const DSP: u16 = 0xD012;

/// Alternate read address of the display data register.
pub const DSP_ALT: u16 = 0xD0F2;

/// Display control register.
pub const DSP_CR: u16 = 0xD013;

/// A decoded peripheral register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Keyboard,
    KeyboardControl,
    Display,
    DisplayControl,
}

/// Returns true if `addr` falls in the peripheral window.
pub const fn is_io(addr: u16) -> bool {
    addr >= IO_START && addr <= IO_END
}

/// Decodes a read address. Only the literal register addresses match.
pub const fn decode_read(addr: u16) -> Option<Register> {
    match addr {
        KBD => Some(Register::Keyboard),
        KBD_CR => Some(Register::KeyboardControl),
        DSP | DSP_ALT => Some(Register::Display),
        DSP_CR => Some(Register::DisplayControl),
        _ => None,
    }
}

/// Folds a write address onto the register block.
pub const fn fold_write(addr: u16) -> u16 {
    (addr & 0xF00F) | 0x0010
}

/// Decodes a write address after folding.
pub const fn decode_write(addr: u16) -> Option<Register> {
    match fold_write(addr) {
        KBD => Some(Register::Keyboard),
        KBD_CR => Some(Register::KeyboardControl),
        DSP => Some(Register::Display),
        DSP_CR => Some(Register::DisplayControl),
        _ => None,
    }
}
