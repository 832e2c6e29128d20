#![no_std]

//! # Buffer Core
//!
//! Gap-buffer editing mechanism shared by any host shell.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same command trace => same buffer state
//! - **Mechanism over policy**: Core edits bytes, hosts decide rendering and persistence
//! - **No ambient authority**: Saves are requested through outcomes, never performed
//!
//! ## Design
//!
//! The core provides:
//! - GapBuffer: cursor-relative byte store with amortized O(1) edits
//! - EditCommand/EditOutcome: the discrete command stream and its results
//! - EditSession: caller-owned editing state, no process-wide singleton
//! - SessionSnapshot: deterministic state for parity testing
//! - Key event abstraction: platform-independent input representation

extern crate alloc;

pub mod buffer;
pub mod command;
pub mod key;
pub mod session;
pub mod snapshot;

pub use buffer::{Boundary, GapBuffer, LineCol, Lines};
pub use command::{EditCommand, EditOutcome};
pub use key::Key;
pub use session::EditSession;
pub use snapshot::SessionSnapshot;
