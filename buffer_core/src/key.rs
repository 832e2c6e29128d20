//! Platform-independent key representation

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Platform-independent key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Key {
    // Printable input
    Char(char),

    // Editing keys
    Tab,
    Enter,
    Backspace,
    Delete,

    // Cursor motion
    Left,
    Right,

    // Host requests
    CtrlS,
}

impl Key {
    /// Convert an ASCII byte to a Key (for byte-stream input sources).
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            0x08 | 0x7F => Some(Key::Backspace),
            b'\r' | b'\n' => Some(Key::Enter),
            b'\t' => Some(Key::Tab),
            0x13 => Some(Key::CtrlS),
            ch if (0x20..0x7F).contains(&ch) => Some(Key::Char(ch as char)),
            _ => None,
        }
    }
}
