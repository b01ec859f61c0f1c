pub mod define;
pub mod init;
pub mod list;
pub mod quiz;
pub mod user_def;

use anyhow::Result;

use vocab_core::Resolver;
use vocab_sources::{create_resolver, Capabilities, VocabConfig};

use crate::console::ConsoleReporter;

/// Build the lookup chain with console output attached.
pub(crate) fn build_resolver(config: &VocabConfig) -> Result<Resolver> {
    let capabilities = Capabilities::from_config(config);
    Ok(create_resolver(config, capabilities)?
        .with_reporter(Box::new(ConsoleReporter::new(&config.overrides_dir))))
}
