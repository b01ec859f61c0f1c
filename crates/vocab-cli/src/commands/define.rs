//! The `vocab define` command and the default look-up-and-add flow.

use anyhow::Result;

use vocab_core::ListStore;
use vocab_sources::VocabConfig;

use super::build_resolver;

pub async fn execute(config: &VocabConfig, word: &str) -> Result<()> {
    let resolver = build_resolver(config)?;
    resolver.resolve(word).await;
    Ok(())
}

/// Define `word` and add it to the list if a definition exists and it is
/// not listed yet.
pub async fn lookup_and_add(config: &VocabConfig, word: &str) -> Result<()> {
    let resolver = build_resolver(config)?;
    if resolver.resolve(word).await.is_none() {
        return Ok(());
    }

    let store = ListStore::new(&config.list_path);
    if !store.contains(word)? {
        store.append(word)?;
        println!("Added \"{word}\" to the word list.");
    }

    Ok(())
}
