//! Document acquisition.
//!
//! The engine itself never touches the filesystem; it is handed a
//! document string. This module provides the seam between the two: a
//! [`DocumentSource`] yields the reference text, and [`load_or_empty`]
//! implements the degraded-start policy where a missing document
//! produces an empty corpus instead of a crash.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while acquiring a reference document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document does not exist at the described location.
    #[error("document unavailable: {0}")]
    Unavailable(String),
    /// The document exists but could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can produce the reference document text.
pub trait DocumentSource {
    /// Human-readable description of where the document comes from,
    /// used in log and advisory messages.
    fn describe(&self) -> String;

    /// Loads the full document text.
    fn load(&self) -> Result<String, SourceError>;
}

/// A reference document on the local filesystem.
///
/// The path is injected by the caller; nothing in the library assumes
/// a particular location.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String, SourceError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::Unavailable(self.describe()))
            }
            Err(err) => Err(SourceError::Io(err)),
        }
    }
}

/// Loads the document, degrading to an empty corpus on failure.
///
/// A missing reference document is an operational condition, not a
/// programming error: the engine still starts and answers every query
/// with the fallback message. The error is returned alongside so the
/// caller can surface an advisory to the operator.
pub fn load_or_empty(source: &dyn DocumentSource) -> (String, Option<SourceError>) {
    match source.load() {
        Ok(text) => {
            tracing::debug!(source = %source.describe(), bytes = text.len(), "document loaded");
            (text, None)
        }
        Err(err) => {
            tracing::warn!(source = %source.describe(), %err, "document load failed, starting with empty corpus");
            (String::new(), Some(err))
        }
    }
}
