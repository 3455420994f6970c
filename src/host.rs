//! Host callbacks for the Apple 1 peripherals.
//!
//! The machine core never touches a terminal or a logger directly. Display
//! output and every bus anomaly (reads of address 0/1, writes to the keyboard
//! registers, unknown I/O addresses, out-of-range loads) are forwarded to a
//! [`HostIo`] implementation supplied by the embedding program.
//!
//! Two implementations ship with the crate:
//! - [`LogHost`] writes characters to any `std::io::Write` and routes
//!   diagnostics through the `log` facade
//! - [`RecordingHost`] captures everything in memory, for tests and tooling

use std::io::{self, Write};

/// Callbacks from the peripheral emulation to the embedding host.
///
/// # Examples
///
/// ```
/// use apple1_core::HostIo;
///
/// struct Counter {
///     chars: usize,
/// }
///
/// impl HostIo for Counter {
///     fn on_output(&mut self, _ch: char) {
///         self.chars += 1;
///     }
///     fn warn(&mut self, _message: &str) {}
///     fn error(&mut self, _message: &str) {}
/// }
/// ```
pub trait HostIo {
    /// A character written to the display. Carriage returns arrive as `'\n'`.
    fn on_output(&mut self, ch: char);

    /// A recoverable anomaly, such as reading the keyboard with no key ready.
    fn warn(&mut self, message: &str);

    /// Access to an address the machine does not decode, or a load that does
    /// not fit in memory.
    fn error(&mut self, message: &str);
}

/// Host that prints display output and logs diagnostics.
pub struct LogHost<W: Write> {
    out: W,
}

impl<W: Write> LogHost<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl LogHost<io::Stdout> {
    /// Host writing display output to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> HostIo for LogHost<W> {
    fn on_output(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        let result = self
            .out
            .write_all(ch.encode_utf8(&mut buf).as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::error!("display output failed: {}", e);
        }
    }

    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

/// Host that records every callback.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingHost {
    /// Display output, in order
    pub output: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the display output captured so far.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl HostIo for RecordingHost {
    fn on_output(&mut self, ch: char) {
        self.output.push(ch);
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_host_writes_utf8() {
        let mut host = LogHost::new(Vec::new());
        host.on_output('H');
        host.on_output('\n');
        assert_eq!(host.into_inner(), b"H\n");
    }

    #[test]
    fn test_recording_host_take_output() {
        let mut host = RecordingHost::new();
        host.on_output('A');
        host.warn("w");
        assert_eq!(host.take_output(), "A");
        assert!(host.output.is_empty());
        assert_eq!(host.warnings, vec!["w".to_string()]);
    }
}
