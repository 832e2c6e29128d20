//! Edit command vocabulary and outcomes

use crate::buffer::Boundary;

/// One discrete edit command from the input collaborator.
///
/// Each command maps 1:1 onto a buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert one byte at the cursor
    InsertChar(u8),
    /// Delete characters after the cursor (Delete-key semantics)
    DeleteForward(usize),
    /// Delete characters before the cursor (Backspace semantics)
    DeleteBackward(usize),
    /// Place the cursor at an absolute storage offset
    SetPoint(usize),
    /// Move the cursor by a raw column offset
    MoveColumns(isize),
}

/// Outcome from applying a command or key to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Buffer content changed
    Changed,
    /// Cursor moved; content untouched
    CursorMoved,
    /// The edit hit a document edge and nothing changed
    Boundary(Boundary),
    /// Host should persist the current content
    RequestSave,
}

impl EditOutcome {
    /// True when the command modified the document content.
    pub fn changed(&self) -> bool {
        matches!(self, EditOutcome::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_predicate() {
        assert!(EditOutcome::Changed.changed());
        assert!(!EditOutcome::CursorMoved.changed());
        assert!(!EditOutcome::Boundary(Boundary::AtBufferStart).changed());
        assert!(!EditOutcome::RequestSave.changed());
    }
}
