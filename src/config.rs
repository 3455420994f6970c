//! Machine configuration and memory map constants.

/// First address of the BIOS (Woz Monitor) page.
pub const BIOS_BASE: u16 = 0xFF00;

/// Size of the BIOS image in bytes.
pub const BIOS_SIZE: usize = 256;

/// Apple 1 machine configuration.
///
/// # Examples
///
/// ```
/// use apple1_core::MachineConfig;
///
/// let config = MachineConfig::default()
///     .with_entry_point(0x0280)
///     .with_uppercase_keys(false);
///
/// assert_eq!(config.entry_point, 0x0280);
/// assert!(!config.uppercase_keys);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// PC after construction and after every reset
    pub entry_point: u16,

    /// Fold letters passed to `press_key` to upper case
    pub uppercase_keys: bool,
}

impl MachineConfig {
    pub fn with_entry_point(mut self, entry_point: u16) -> Self {
        self.entry_point = entry_point;
        self
    }

    pub fn with_uppercase_keys(mut self, uppercase_keys: bool) -> Self {
        self.uppercase_keys = uppercase_keys;
        self
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            entry_point: BIOS_BASE,
            uppercase_keys: true,
        }
    }
}
