//! The `vocab quiz` command.

use std::io;

use anyhow::Result;

use vocab_core::quiz::QuizEngine;
use vocab_core::ListStore;
use vocab_sources::VocabConfig;

use super::build_resolver;
use crate::console::ConsolePrompter;

pub async fn execute(config: &VocabConfig, count: Option<usize>) -> Result<()> {
    let store = ListStore::new(&config.list_path);
    let resolver = build_resolver(config)?;
    let mut prompter = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    let mut rng = rand::thread_rng();

    let summary = QuizEngine::new(&store, &resolver)
        .run(count, &mut rng, &mut prompter)
        .await?;

    println!(
        "\n{}\nQuiz complete: {} word(s), {} with a definition.",
        "=".repeat(50),
        summary.asked,
        summary.defined
    );

    Ok(())
}
