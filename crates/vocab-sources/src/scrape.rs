//! Definitions scraped from a dictionary web page.
//!
//! The page layout is not a stable contract. Every failure here is a soft
//! miss, and the HTML handling lives in `vocab_core::parser`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use vocab_core::parser::{number_definitions, DefContentParser, DefinitionParser};
use vocab_core::traits::DefinitionSource;
use vocab_core::{Definition, DefinitionKind, SourceError};

/// Fetches `<base_url><slug>` and parses definition blocks out of the page.
pub struct ScrapeSource {
    base_url: String,
    client: reqwest::Client,
    parser: Box<dyn DefinitionParser>,
}

impl ScrapeSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
            parser: Box::new(DefContentParser::new()),
        })
    }

    /// Swap in a different page parser.
    pub fn with_parser(mut self, parser: Box<dyn DefinitionParser>) -> Self {
        self.parser = parser;
        self
    }

    /// URL fetched for `word`.
    pub fn url_for(&self, word: &str) -> String {
        format!("{}{}", self.base_url, slug(word))
    }
}

/// Spaces become double hyphens in the site's URL scheme.
pub fn slug(word: &str) -> String {
    word.replace(' ', "--")
}

#[async_trait]
impl DefinitionSource for ScrapeSource {
    fn name(&self) -> &str {
        "web"
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::WebScrape
    }

    #[instrument(skip(self))]
    async fn lookup(&self, word: &str) -> Result<Definition, SourceError> {
        let url = self.url_for(word);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(SourceError::NotFound);
        }
        if !status.is_success() {
            return Err(SourceError::Transport(format!(
                "{url} returned HTTP {}",
                status.as_u16()
            )));
        }

        let page = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(format!("failed to read {url}: {e}")))?;

        let defs = self.parser.parse(&page);
        debug!(count = defs.len(), "parsed definition blocks");
        if defs.is_empty() {
            return Err(SourceError::NotFound);
        }

        Ok(Definition::new(word, self.kind(), number_definitions(&defs)))
    }
}
