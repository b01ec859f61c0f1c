//! Secondary dictionary lookup over a Free-Dictionary-style JSON API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use vocab_core::model::format_meanings;
use vocab_core::traits::DefinitionSource;
use vocab_core::{Definition, DefinitionKind, MeaningGroup, SourceError};

/// Looks words up at `<base_url><word>`.
pub struct DictionarySource {
    base_url: String,
    client: reqwest::Client,
}

impl DictionarySource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    /// Fetch meanings for `word`, grouped by part of speech in response order.
    pub async fn meanings(&self, word: &str) -> Result<Vec<MeaningGroup>, SourceError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, word))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Transport(format!("dictionary request for \"{word}\" timed out"))
                } else {
                    SourceError::Transport(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(SourceError::NotFound);
        }
        if status >= 400 {
            return Err(SourceError::Transport(format!(
                "dictionary returned HTTP {status}"
            )));
        }

        let entries: Vec<DictionaryEntry> = response
            .json()
            .await
            .map_err(|e| SourceError::Transport(format!("failed to parse response: {e}")))?;

        Ok(group_meanings(entries))
    }
}

#[derive(Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<DictionaryMeaning>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DictionaryDefinition>,
}

#[derive(Deserialize)]
struct DictionaryDefinition {
    definition: String,
}

/// Merge meanings across entries so each part of speech appears once.
fn group_meanings(entries: Vec<DictionaryEntry>) -> Vec<MeaningGroup> {
    let mut groups: Vec<MeaningGroup> = Vec::new();
    for meaning in entries.into_iter().flat_map(|e| e.meanings) {
        let defs = meaning.definitions.into_iter().map(|d| d.definition);
        match groups
            .iter_mut()
            .find(|g| g.part_of_speech == meaning.part_of_speech)
        {
            Some(group) => group.definitions.extend(defs),
            None => groups.push(MeaningGroup {
                part_of_speech: meaning.part_of_speech,
                definitions: defs.collect(),
            }),
        }
    }
    groups
}

#[async_trait]
impl DefinitionSource for DictionarySource {
    fn name(&self) -> &str {
        "dictionary"
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Dictionary
    }

    #[instrument(skip(self))]
    async fn lookup(&self, word: &str) -> Result<Definition, SourceError> {
        let text = format_meanings(&self.meanings(word).await?);
        if text.is_empty() {
            return Err(SourceError::NotFound);
        }
        Ok(Definition::new(word, self.kind(), text))
    }
}
