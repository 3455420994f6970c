//! # Processor Status Register (P)
//!
//! The status register is kept as a packed bitmask rather than separate
//! booleans, so PHP/PLP/RTI/BRK move it to and from the stack unchanged.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 7   | N    | Negative (bit 7 of last result) |
//! | 6   | V    | Signed overflow |
//! | 5   | R    | Reserved, forced set on pushes |
//! | 4   | B    | Break |
//! | 3   | D    | Decimal (BCD) mode |
//! | 2   | I    | Interrupt disable |
//! | 1   | Z    | Zero |
//! | 0   | C    | Carry |

/// Carry flag.
pub const C: u8 = 0x01;

/// Zero flag.
pub const Z: u8 = 0x02;

/// Interrupt disable flag.
pub const I: u8 = 0x04;

/// Decimal mode flag.
pub const D: u8 = 0x08;

/// Break flag.
pub const B: u8 = 0x10;

/// Reserved bit, forced set whenever status is pushed.
pub const R: u8 = 0x20;

/// Overflow flag.
pub const V: u8 = 0x40;

/// Negative flag.
pub const N: u8 = 0x80;

/// Processor status register.
///
/// # Examples
///
/// ```
/// use apple1_core::status::{Status, N, Z};
///
/// let mut p = Status::new();
/// p.set_nz(0x80);
/// assert!(p.is_set(N));
/// assert!(!p.is_set(Z));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(pub u8);

impl Status {
    /// Power-on status: only the reserved bit set.
    pub const fn new() -> Self {
        Self(R)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Value pushed by PHP and BRK (reserved and break forced set).
    pub const fn pushed(self) -> u8 {
        self.0 | R | B
    }

    /// Returns true if every bit in `flag` is set.
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Set or clear `flag` based on `condition`.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Set Z iff `value == 0` and N iff bit 7 of `value` is set.
    ///
    /// All other bits are left untouched.
    pub fn set_nz(&mut self, value: u8) {
        self.set_if(Z, value == 0);
        self.set_if(N, value & 0x80 != 0);
    }

    /// Carry as 0 or 1, for arithmetic carry-in.
    pub const fn carry(self) -> u8 {
        self.0 & C
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the flags as `NVRBDIZC` letters, uppercase when set.
impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const LETTERS: [(u8, char); 8] = [
            (N, 'N'),
            (V, 'V'),
            (R, 'R'),
            (B, 'B'),
            (D, 'D'),
            (I, 'I'),
            (Z, 'Z'),
            (C, 'C'),
        ];
        for (flag, letter) in LETTERS {
            let shown = if self.is_set(flag) {
                letter
            } else {
                letter.to_ascii_lowercase()
            };
            write!(f, "{}", shown)?;
        }
        Ok(())
    }
}
