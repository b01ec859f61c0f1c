//! Core trait definitions for definition sources.
//!
//! Implemented by the tiers in `vocab-sources`.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::{Definition, DefinitionKind};

/// One tier of the definition lookup chain.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Human-readable source name (e.g. "user-defs").
    fn name(&self) -> &str;

    /// Which kind of definition this source produces.
    fn kind(&self) -> DefinitionKind;

    /// Look up `word`. Any error is a soft miss for the resolver.
    async fn lookup(&self, word: &str) -> Result<Definition, SourceError>;
}
