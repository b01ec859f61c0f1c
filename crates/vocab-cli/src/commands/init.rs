//! The `vocab init` command.

use anyhow::{Context, Result};

use vocab_core::ListStore;
use vocab_sources::VocabConfig;

pub fn execute(config: &VocabConfig) -> Result<()> {
    let store = ListStore::new(&config.list_path);
    if store.create()? {
        println!("Created {}", store.path().display());
    } else {
        println!("{} already exists, skipping.", store.path().display());
    }

    let defs = &config.overrides_dir;
    if defs.is_dir() {
        println!("{} already exists, skipping.", defs.display());
    } else {
        std::fs::create_dir_all(defs)
            .with_context(|| format!("failed to create {}", defs.display()))?;
        println!("Created {}", defs.display());
    }

    println!("\nNext steps:");
    println!("  1. Look up and collect a word: vocab serendipity");
    println!("  2. Write your own definition: vocab user-def <word>");
    println!("  3. Quiz yourself: vocab quiz 10");

    Ok(())
}
