//! Flat-file word list.
//!
//! The backing file holds one word or phrase per line. Comma-separated cells
//! are accepted on read and rewritten one per line whenever the list is
//! rewritten. Lookups compare against the trimmed, lower-cased form.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::VocabError;

/// Suffix appended to the list path for the pre-removal backup.
pub const BACKUP_SUFFIX: &str = ".bu";

/// The master word list, backed by a plain text file.
#[derive(Debug, Clone)]
pub struct ListStore {
    path: PathBuf,
}

impl ListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the backup written before every removal.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Read every entry, normalized to lower case.
    pub fn load(&self) -> Result<Vec<String>, VocabError> {
        let content = self.read()?;
        Ok(split_cells(&content).map(str::to_lowercase).collect())
    }

    /// Whether `word` (trimmed, lower-cased) is already in the list.
    pub fn contains(&self, word: &str) -> Result<bool, VocabError> {
        let needle = normalize(word);
        Ok(self.load()?.iter().any(|w| *w == needle))
    }

    /// Append `word` verbatim on a new line. Does not check for duplicates.
    pub fn append(&self, word: &str) -> Result<(), VocabError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        write!(file, "\n{word}").map_err(|source| self.io_error(source))?;
        info!(word, path = %self.path.display(), "added word to list");
        Ok(())
    }

    /// Remove the first entry whose normalized form equals `word` exactly.
    ///
    /// The current file is copied to [`backup_path`](Self::backup_path) before
    /// the list is rewritten. If the copy fails nothing is written. Remaining
    /// entries keep their original casing.
    pub fn remove(&self, word: &str) -> Result<(), VocabError> {
        let content = self.read()?;
        let mut entries: Vec<&str> = split_cells(&content).collect();

        let Some(pos) = entries.iter().position(|e| e.to_lowercase() == word) else {
            return Err(VocabError::WordNotFound(word.to_string()));
        };

        let backup = self.backup_path();
        fs::copy(&self.path, &backup).map_err(|source| VocabError::BackupFailed {
            path: backup.clone(),
            source,
        })?;
        debug!(backup = %backup.display(), "backed up word list");

        entries.remove(pos);
        fs::write(&self.path, entries.join("\n")).map_err(|source| self.io_error(source))?;
        info!(word, path = %self.path.display(), "removed word from list");
        Ok(())
    }

    /// Create an empty backing file (and its parent directory) if absent.
    ///
    /// Returns `true` if the file was created.
    pub fn create(&self) -> Result<bool, VocabError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| VocabError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, "").map_err(|source| self.io_error(source))?;
        Ok(true)
    }

    fn read(&self) -> Result<String, VocabError> {
        fs::read_to_string(&self.path).map_err(|source| VocabError::StorageUnavailable {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> VocabError {
        VocabError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Trimmed, lower-cased form used for every comparison.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Split file content into trimmed, non-empty cells across lines and commas.
fn split_cells(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
}
