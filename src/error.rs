//! Error types for host-facing image loading.
//!
//! Instruction execution and bus traffic never fail; only converting host
//! data into machine images does.

use thiserror::Error;

/// Errors from loading BIOS or program images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The BIOS image is not exactly one page long.
    #[error("BIOS image must be {expected} bytes, got {actual}")]
    BiosSize { expected: usize, actual: usize },

    /// A program image with no bytes.
    #[error("program image is empty")]
    Empty,
}
