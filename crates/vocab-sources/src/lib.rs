//! vocab-sources — Definition sources and configuration.
//!
//! Implements the `DefinitionSource` trait for user override files, a
//! secondary dictionary API, and dictionary web page scraping, and wires them
//! into a resolver from configuration.

pub mod config;
pub mod dictionary;
pub mod mock;
pub mod overrides;
pub mod scrape;

pub use config::{create_resolver, load_config, load_config_from, Capabilities, VocabConfig};
