//! Apple 1 keyboard: a scalar last-key register plus an optional queue of
//! pre-typed input.

/// Result of reading the keyboard data register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRead {
    /// Value seen by the CPU (key code with bit 7 set)
    pub value: u8,

    /// False when no key was available; `value` is then 0x80
    pub available: bool,
}

/// Queued keystrokes, consumed front to back.
#[derive(Debug, Clone)]
struct KeyQueue {
    bytes: Vec<u8>,
    cursor: usize,
}

impl KeyQueue {
    fn next(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(byte)
    }

    fn is_exhausted(&self) -> bool {
        self.cursor >= self.bytes.len()
    }
}

/// Keyboard state.
///
/// Key codes are stored without bit 7; reads set it, as the real keyboard
/// strobe does.
///
/// # Examples
///
/// ```
/// use apple1_core::devices::Keyboard;
///
/// let mut kbd = Keyboard::new();
/// kbd.fill("HI");
///
/// assert_eq!(kbd.status(), 0x80);
/// assert_eq!(kbd.read().value, b'H' | 0x80);
/// assert_eq!(kbd.read().value, b'I' | 0x80);
/// assert_eq!(kbd.status(), 0x01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    queue: Option<KeyQueue>,
    last_key: u8,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a queue of keystrokes, replacing any previous queue.
    ///
    /// `'\n'` is translated to carriage return. Text is queued as UTF-8
    /// bytes. An empty string clears the queue.
    pub fn fill(&mut self, text: &str) {
        if text.is_empty() {
            self.queue = None;
            return;
        }

        let bytes = text
            .bytes()
            .map(|b| if b == b'\n' { b'\r' } else { b })
            .collect();
        self.queue = Some(KeyQueue { bytes, cursor: 0 });
    }

    /// Stores a raw key code as the pending key.
    pub fn set_last_key(&mut self, code: u8) {
        self.last_key = code;
    }

    pub fn last_key(&self) -> u8 {
        self.last_key
    }

    /// Returns true while queued keystrokes remain.
    pub fn has_queue(&self) -> bool {
        self.queue.is_some()
    }

    /// Reads the data register, consuming a key.
    ///
    /// A queued key takes precedence over the scalar key. When the queue is
    /// found exhausted it is dropped and the read sees no key. The last key is
    /// cleared after every read.
    pub fn read(&mut self) -> KeyRead {
        let mut key = self.last_key;

        if let Some(queue) = self.queue.as_mut() {
            key = queue.next().unwrap_or(0);
            if queue.is_exhausted() {
                self.queue = None;
            }
            self.last_key = key;
        }

        let available = self.last_key != 0;
        self.last_key = 0;
        KeyRead {
            value: key | 0x80,
            available,
        }
    }

    /// The value the next [`read`](Self::read) would return, without
    /// consuming anything.
    pub fn peek(&self) -> u8 {
        let key = match &self.queue {
            Some(queue) => queue.bytes.get(queue.cursor).copied().unwrap_or(0),
            None => self.last_key,
        };
        key | 0x80
    }

    /// Control register: 0x80 while a key is pending or queued, 0x01 otherwise.
    pub fn status(&self) -> u8 {
        if self.queue.is_none() && self.last_key == 0 {
            0x01
        } else {
            0x80
        }
    }
}
