//! User-authored definition files.
//!
//! A file named exactly after the word or phrase (no extension) inside the
//! overrides directory takes precedence over every automated lookup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use vocab_core::traits::DefinitionSource;
use vocab_core::{Definition, DefinitionKind, SourceError};

/// Reads definitions from the overrides directory.
pub struct OverrideSource {
    dir: PathBuf,
}

impl OverrideSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the override file for `word`.
    pub fn path_for(&self, word: &str) -> PathBuf {
        self.dir.join(word)
    }

    /// Create the override file for `word` (and the directory) if missing,
    /// leaving existing content alone. Returns the file path.
    pub fn touch(&self, word: &str) -> std::io::Result<PathBuf> {
        if word.is_empty() || word.contains(|c| c == '/' || c == '\\') {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("\"{word}\" cannot be used as a file name"),
            ));
        }
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(word);
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        Ok(path)
    }
}

#[async_trait]
impl DefinitionSource for OverrideSource {
    fn name(&self) -> &str {
        "user-defs"
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::UserOverride
    }

    async fn lookup(&self, word: &str) -> Result<Definition, SourceError> {
        let path = self.path_for(word);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Definition::new(word, self.kind(), text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no user definition");
                Err(SourceError::NotFound)
            }
            Err(e) => Err(SourceError::Unavailable(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }
}
