//! Error types for list storage and definition lookups.
//!
//! `VocabError` covers failures the user has to hear about. `SourceError` is
//! what a single definition tier reports; the resolver treats every variant
//! as a soft miss and moves on to the next tier.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the word list store and the quiz engine.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The word to remove is not in the list.
    #[error("\"{0}\" not found in word list. Remember, words are case-sensitive.")]
    WordNotFound(String),

    /// The pre-removal backup could not be written; the list was left untouched.
    #[error("failed to back up word list to {}, master list not overwritten", path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing list file is missing or unreadable.
    #[error("word list unavailable at {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A quiz asked for more words than the list holds.
    #[error("cannot quiz on {requested} words, the list only has {available}")]
    InsufficientWords { requested: usize, available: usize },

    /// Reading the quiz answer from the terminal failed.
    #[error("failed to read quiz input")]
    Prompt(#[source] std::io::Error),

    /// Writing to the backing list file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors a single definition source can report.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no definition for the word.
    #[error("no definition found")]
    NotFound,

    /// The source could not be reached or returned garbage.
    #[error("transport error: {0}")]
    Transport(String),

    /// The source is not usable in this process (e.g. unreadable directory).
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Returns `true` for the plain "this source doesn't know the word" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound)
    }
}
