//! Error types for texcards-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while turning document bytes into text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("document is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },
}

/// Errors that can occur while loading lecture files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("no flashcards found in {}", .dir.display())]
    NothingToServe { dir: PathBuf },
}

impl LoadError {
    /// True when loading succeeded but produced no cards.
    pub fn is_empty_deck(&self) -> bool {
        matches!(self, Self::NothingToServe { .. })
    }
}
