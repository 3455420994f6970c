//! Apple 1 display: a write-only character sink with a readable latch.

/// Display output latch.
///
/// The CPU writes a character to DSP; the low seven bits are shown and the
/// full byte is latched. Reading DSP returns the latch with bit 7 clear, which
/// the Woz Monitor polls to see that the display is ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Display {
    latch: u8,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches `value` and returns the character to show.
    ///
    /// Carriage return is translated to `'\n'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use apple1_core::devices::Display;
    ///
    /// let mut dsp = Display::new();
    /// assert_eq!(dsp.write(0xC1), 'A');
    /// assert_eq!(dsp.write(0x8D), '\n');
    /// assert_eq!(dsp.read(), 0x0D);
    /// ```
    pub fn write(&mut self, value: u8) -> char {
        self.latch = value;
        match value & 0x7F {
            b'\r' => '\n',
            ch => ch as char,
        }
    }

    /// Last written byte with bit 7 clear.
    pub fn read(&self) -> u8 {
        self.latch & 0x7F
    }
}
