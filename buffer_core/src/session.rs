//! Editing session state machine
//!
//! The session is a caller-owned value: there is no process-wide editor
//! state. Hosts construct one per open document and feed it commands or
//! key events; rendering reads the buffer only after an edit has fully
//! applied.

use crate::{
    buffer::{GapBuffer, LineCol},
    command::{EditCommand, EditOutcome},
    key::Key,
    snapshot::SessionSnapshot,
};

/// One editing session over one document.
pub struct EditSession {
    buffer: GapBuffer,
    dirty: bool,
}

impl EditSession {
    /// Create a session over an empty document.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            dirty: false,
        }
    }

    /// Apply one edit command and return the outcome.
    pub fn apply(&mut self, command: EditCommand) -> EditOutcome {
        match command {
            EditCommand::InsertChar(byte) => {
                self.buffer.insert(byte);
                self.dirty = true;
                EditOutcome::Changed
            }
            EditCommand::DeleteForward(count) => {
                let count = isize::try_from(count).unwrap_or(isize::MAX);
                match self.buffer.delete_chars(count) {
                    Ok(()) => {
                        self.dirty = true;
                        EditOutcome::Changed
                    }
                    Err(boundary) => EditOutcome::Boundary(boundary),
                }
            }
            EditCommand::DeleteBackward(count) => {
                let count = isize::try_from(count).unwrap_or(isize::MAX);
                match self.buffer.delete_chars(-count) {
                    Ok(()) => {
                        self.dirty = true;
                        EditOutcome::Changed
                    }
                    Err(boundary) => EditOutcome::Boundary(boundary),
                }
            }
            EditCommand::SetPoint(index) => {
                self.buffer.set_point(index);
                EditOutcome::CursorMoved
            }
            EditCommand::MoveColumns(amount) => {
                self.buffer.move_point_by(amount);
                EditOutcome::CursorMoved
            }
        }
    }

    /// Apply a key event, translating it to edit commands.
    ///
    /// Tab expands to `tab_width` spaces; Ctrl+S requests a save from the
    /// host without touching the buffer.
    pub fn apply_key(&mut self, key: Key, tab_width: usize) -> EditOutcome {
        match key {
            Key::Char(ch) => {
                let mut encoded = [0u8; 4];
                for &byte in ch.encode_utf8(&mut encoded).as_bytes() {
                    self.apply(EditCommand::InsertChar(byte));
                }
                EditOutcome::Changed
            }
            Key::Tab => {
                for _ in 0..tab_width {
                    self.apply(EditCommand::InsertChar(b' '));
                }
                EditOutcome::Changed
            }
            Key::Enter => self.apply(EditCommand::InsertChar(b'\n')),
            Key::Backspace => self.apply(EditCommand::DeleteBackward(1)),
            Key::Delete => self.apply(EditCommand::DeleteForward(1)),
            Key::Left => self.apply(EditCommand::MoveColumns(-1)),
            Key::Right => self.apply(EditCommand::MoveColumns(1)),
            Key::CtrlS => EditOutcome::RequestSave,
        }
    }

    /// Replace the document content and reset session state.
    pub fn load(&mut self, content: &[u8]) {
        self.buffer = GapBuffer::from_bytes(content);
        self.dirty = false;
    }

    /// Get a complete snapshot of session state (for parity testing)
    pub fn snapshot(&self) -> SessionSnapshot {
        let location = self.buffer.location();
        SessionSnapshot {
            content: self.buffer.as_string(),
            cursor_offset: self.buffer.cursor_offset(),
            line: location.line,
            col: location.col,
            dirty: self.dirty,
        }
    }

    // Public accessors for rendering/testing

    pub fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    pub fn location(&self) -> LineCol {
        self.buffer.location()
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
