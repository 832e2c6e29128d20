//! Main editor driver

use std::path::PathBuf;

use buffer_core::{EditOutcome, EditSession, Key};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::io::{DocumentHandle, DocumentStore, FileDocumentStore, IoError};
use crate::render::EditorView;

/// Editor error
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("no document to save into")]
    NoDocument,
}

/// Editor result
pub type EditorResult<T> = Result<T, EditorError>;

/// Editor action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Continue editing
    Continue,
    /// Document was saved
    Saved,
}

/// The editor driver: one session, one optional document, one view.
///
/// Owns the session on behalf of the host shell and routes key events
/// into it; a save request coming back from the session is dispatched
/// through the document store with the configured newline policy.
pub struct Editor<S: DocumentStore = FileDocumentStore> {
    session: EditSession,
    document: Option<DocumentHandle>,
    view: EditorView,
    config: EditorConfig,
    store: S,
    status_message: String,
}

impl Editor<FileDocumentStore> {
    /// Create an editor over the filesystem store.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_store(FileDocumentStore, config)
    }
}

impl<S: DocumentStore> Editor<S> {
    /// Create an editor over a caller-provided document store.
    pub fn with_store(store: S, config: EditorConfig) -> Self {
        let view = EditorView::new(config.viewport_lines, config.max_line_chars);
        Self {
            session: EditSession::new(),
            document: None,
            view,
            config,
            store,
            status_message: String::new(),
        }
    }

    /// Start over with an empty, unsaved document.
    pub fn new_document(&mut self) {
        self.session = EditSession::new();
        self.document = None;
        self.status_message = "New document".into();
    }

    /// Open a document from the store.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> EditorResult<()> {
        let path = path.into();
        let content = self.store.open(&path)?;
        self.session.load(&content);
        self.document = Some(DocumentHandle::new(path, self.config.newline_mode));
        self.status_message = "Document loaded".into();
        Ok(())
    }

    /// Process a key event
    pub fn process_key(&mut self, key: Key) -> EditorResult<EditorAction> {
        match self.session.apply_key(key, self.config.tab_width) {
            EditOutcome::RequestSave => self.save(),
            EditOutcome::Boundary(boundary) => {
                self.status_message = boundary.to_string();
                Ok(EditorAction::Continue)
            }
            EditOutcome::Changed | EditOutcome::CursorMoved => {
                self.status_message.clear();
                Ok(EditorAction::Continue)
            }
        }
    }

    /// Save to the current document.
    pub fn save(&mut self) -> EditorResult<EditorAction> {
        let handle = self.document.clone().ok_or(EditorError::NoDocument)?;
        self.save_to(handle)
    }

    /// Save to a new path (Save As). The host shell owns path prompts;
    /// by the time a path reaches the editor, dialogs are done.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> EditorResult<EditorAction> {
        let handle = DocumentHandle::new(path.into(), self.config.newline_mode);
        self.save_to(handle)
    }

    fn save_to(&mut self, handle: DocumentHandle) -> EditorResult<EditorAction> {
        let content = self.session.buffer().contents();
        let report = self
            .store
            .save(&handle.path, &content, handle.newline_mode)?;
        self.session.mark_saved();
        self.status_message = report.message;
        self.document = Some(handle);
        Ok(EditorAction::Saved)
    }

    /// Render the editor view
    pub fn render(&self) -> String {
        let label = self.document.as_ref().map(DocumentHandle::label);
        self.view
            .render(&self.session, label.as_deref(), &self.status_message)
    }

    /// Get buffer content as string
    pub fn get_content(&self) -> String {
        self.session.buffer().as_string()
    }

    // Accessors for host shells and tests

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn document(&self) -> Option<&DocumentHandle> {
        self.document.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

impl Default for Editor<FileDocumentStore> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
