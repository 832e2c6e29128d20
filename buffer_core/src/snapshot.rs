//! Session snapshot for deterministic parity testing

use alloc::string::String;

#[cfg(any(test, feature = "serde_support"))]
use serde::{Deserialize, Serialize};

/// Complete session state snapshot for parity testing
///
/// Captures the logical view of a session (content with the gap removed,
/// the logical cursor offset, and the status-line location) so that two
/// hosts driving identical command traces can compare states cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde_support"), derive(Serialize, Deserialize))]
pub struct SessionSnapshot {
    pub content: String,
    pub cursor_offset: usize,
    pub line: usize,
    pub col: usize,
    pub dirty: bool,
}

impl SessionSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.content.as_bytes());
        hasher.update(b"\0");
        hasher.update(self.cursor_offset.to_le_bytes());
        hasher.update(self.line.to_le_bytes());
        hasher.update(self.col.to_le_bytes());
        hasher.update([self.dirty as u8]);

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
