//! Document I/O operations
//!
//! The persistence collaborator: the buffer emits bytes, this module
//! decides where they go and how newlines are encoded on the way out.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document I/O error
#[derive(Debug, Error)]
pub enum IoError {
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Newline convention used when emitting the buffer to a byte sink.
///
/// Translation is this collaborator's job; the buffer stores bare `\n`
/// and never branches on the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewlineMode {
    /// Bare `\n`
    Lf,
    /// `\r\n` pairs (e.g. Windows targets)
    CrLf,
}

impl NewlineMode {
    /// The convention the running platform expects.
    pub fn native() -> Self {
        if cfg!(windows) {
            NewlineMode::CrLf
        } else {
            NewlineMode::Lf
        }
    }
}

/// Encode buffer content for a sink: under `CrLf` every `\n` becomes `\r\n`.
pub fn encode_newlines(content: &[u8], mode: NewlineMode) -> Vec<u8> {
    match mode {
        NewlineMode::Lf => content.to_vec(),
        NewlineMode::CrLf => {
            let mut out = Vec::with_capacity(content.len());
            for &byte in content {
                if byte == b'\n' {
                    out.push(b'\r');
                }
                out.push(byte);
            }
            out
        }
    }
}

/// Normalize sink content on the way in: `\r\n` becomes `\n`.
///
/// A lone `\r` is ordinary content and passes through untouched.
pub fn normalize_newlines(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'\r' && raw.get(i + 1) == Some(&b'\n') {
            i += 1;
        }
        out.push(raw[i]);
        i += 1;
    }
    out
}

/// An open document: its save target plus the newline policy it uses.
///
/// The path is a label and destination, not an authority; the host shell
/// decides which paths the editor may touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    pub path: PathBuf,
    pub newline_mode: NewlineMode,
}

impl DocumentHandle {
    pub fn new(path: impl Into<PathBuf>, newline_mode: NewlineMode) -> Self {
        Self {
            path: path.into(),
            newline_mode,
        }
    }

    /// Short name for the status line.
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Save result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Encoded bytes written to the sink
    pub bytes_written: usize,
    /// Status message
    pub message: String,
}

impl SaveReport {
    pub fn new(bytes_written: usize, message: impl Into<String>) -> Self {
        Self {
            bytes_written,
            message: message.into(),
        }
    }
}

/// Persistence abstraction: where documents come from and go to.
pub trait DocumentStore {
    /// Read a document, normalized to bare `\n` line endings.
    fn open(&mut self, path: &Path) -> Result<Vec<u8>, IoError>;

    /// Write a document, encoding newlines per `mode`.
    fn save(&mut self, path: &Path, content: &[u8], mode: NewlineMode)
        -> Result<SaveReport, IoError>;
}

/// Filesystem-backed document store.
pub struct FileDocumentStore;

impl DocumentStore for FileDocumentStore {
    fn open(&mut self, path: &Path) -> Result<Vec<u8>, IoError> {
        match fs::read(path) {
            Ok(raw) => Ok(normalize_newlines(&raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(IoError::NotFound(path.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(
        &mut self,
        path: &Path,
        content: &[u8],
        mode: NewlineMode,
    ) -> Result<SaveReport, IoError> {
        let encoded = encode_newlines(content, mode);
        fs::write(path, &encoded)?;
        Ok(SaveReport::new(
            encoded.len(),
            format!("Saved {}", path.display()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lf_is_identity() {
        assert_eq!(encode_newlines(b"a\nb\n", NewlineMode::Lf), b"a\nb\n");
    }

    #[test]
    fn test_encode_crlf_translates_each_newline() {
        assert_eq!(encode_newlines(b"a\nb\n", NewlineMode::CrLf), b"a\r\nb\r\n");
    }

    #[test]
    fn test_encode_crlf_without_newlines() {
        assert_eq!(encode_newlines(b"abc", NewlineMode::CrLf), b"abc");
    }

    #[test]
    fn test_normalize_collapses_crlf() {
        assert_eq!(normalize_newlines(b"a\r\nb\r\n"), b"a\nb\n");
    }

    #[test]
    fn test_normalize_keeps_lone_cr() {
        assert_eq!(normalize_newlines(b"a\rb"), b"a\rb");
    }

    #[test]
    fn test_normalize_round_trip() {
        let content = b"one\ntwo\nthree";
        let encoded = encode_newlines(content, NewlineMode::CrLf);
        assert_eq!(normalize_newlines(&encoded), content);
    }

    #[test]
    fn test_document_handle_label() {
        let handle = DocumentHandle::new("/tmp/notes/test.txt", NewlineMode::Lf);
        assert_eq!(handle.label(), "test.txt");
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("editor_host_io_{}.txt", std::process::id()));
        let mut store = FileDocumentStore;

        let report = store
            .save(&path, b"hello\nworld", NewlineMode::CrLf)
            .unwrap();
        assert_eq!(report.bytes_written, 12);

        let content = store.open(&path).unwrap();
        assert_eq!(content, b"hello\nworld");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_missing_document() {
        let mut store = FileDocumentStore;
        let result = store.open(Path::new("/nonexistent/definitely/missing.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
