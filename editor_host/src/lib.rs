//! # Editor Host
//!
//! Host-side collaborators for the gap-buffer editing core.
//!
//! ## Philosophy
//!
//! - **Thin glue**: The buffer owns the document; this crate only feeds it
//!   keys and consumes its content
//! - **Policy at the edge**: Newline translation and save targets are host
//!   decisions the core never sees
//! - **Testable**: Fully testable with injected key events and an
//!   in-memory document store
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A windowing or font-rendering layer (those remain external)
//! - A modal editor
//! - A full-featured editor with syntax highlighting
//!
//! ## Design
//!
//! - The `Editor` driver owns one `EditSession` and routes key events
//! - Saves flow through a `DocumentStore`, which applies the newline policy
//! - The view pulls display text one line at a time, never materializing
//!   the whole document

pub mod config;
pub mod editor;
pub mod io;
pub mod render;

pub use config::EditorConfig;
pub use editor::{Editor, EditorAction, EditorError};
pub use io::{
    DocumentHandle, DocumentStore, FileDocumentStore, IoError, NewlineMode, SaveReport,
};
pub use render::EditorView;
