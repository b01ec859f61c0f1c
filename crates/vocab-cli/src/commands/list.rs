//! The `vocab add`, `vocab remove`, and `vocab list` commands.

use anyhow::Result;

use vocab_core::ListStore;
use vocab_sources::VocabConfig;

pub fn add(config: &VocabConfig, word: &str) -> Result<()> {
    ListStore::new(&config.list_path).append(word)?;
    Ok(())
}

pub fn remove(config: &VocabConfig, word: &str) -> Result<()> {
    ListStore::new(&config.list_path).remove(word)?;
    Ok(())
}

pub fn list(config: &VocabConfig) -> Result<()> {
    let store = ListStore::new(&config.list_path);
    let words = store.load()?;

    println!("\nMaster list location:\n{}\n", store.path().display());
    for word in &words {
        println!("{word}");
    }
    println!();

    Ok(())
}
