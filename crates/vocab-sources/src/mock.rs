//! Mock definition source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use vocab_core::traits::DefinitionSource;
use vocab_core::{Definition, DefinitionKind, SourceError};

/// A definition source with canned answers and call tracking.
pub struct MockSource {
    /// Map of word → definition text.
    definitions: HashMap<String, String>,
    /// Kind reported for every definition.
    kind: DefinitionKind,
    /// Number of lookups made.
    call_count: AtomicU32,
    /// Last word looked up.
    last_word: Mutex<Option<String>>,
}

impl MockSource {
    /// Create a mock that knows exactly the given words.
    pub fn new(kind: DefinitionKind, definitions: HashMap<String, String>) -> Self {
        Self {
            definitions,
            kind,
            call_count: AtomicU32::new(0),
            last_word: Mutex::new(None),
        }
    }

    /// Create a mock that knows no words.
    pub fn empty(kind: DefinitionKind) -> Self {
        Self::new(kind, HashMap::new())
    }

    /// Get the number of lookups made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last word looked up.
    pub fn last_word(&self) -> Option<String> {
        self.last_word.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn kind(&self) -> DefinitionKind {
        self.kind
    }

    async fn lookup(&self, word: &str) -> Result<Definition, SourceError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_word.lock().unwrap() = Some(word.to_string());

        self.definitions
            .get(word)
            .map(|text| Definition::new(word, self.kind, text.clone()))
            .ok_or(SourceError::NotFound)
    }
}
