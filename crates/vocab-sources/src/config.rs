//! Configuration and resolver factory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use vocab_core::traits::DefinitionSource;
use vocab_core::Resolver;

use crate::dictionary::DictionarySource;
use crate::overrides::OverrideSource;
use crate::scrape::ScrapeSource;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";
pub const DEFAULT_SCRAPE_URL: &str = "https://dictionary.reference.com/browse/";

/// Top-level vocab configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabConfig {
    /// The master word list.
    #[serde(default = "default_list_path")]
    pub list_path: PathBuf,
    /// Directory of user-authored definition files.
    #[serde(default = "default_overrides_dir")]
    pub overrides_dir: PathBuf,
    /// Secondary dictionary lookup.
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    /// Web page scraping.
    #[serde(default)]
    pub scrape: ScrapeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_dictionary_url")]
    pub base_url: String,
    /// Request timeout; none by default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    #[serde(default = "default_scrape_url")]
    pub base_url: String,
    /// Request timeout; none by default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_true() -> bool {
    true
}
fn default_dictionary_url() -> String {
    DEFAULT_DICTIONARY_URL.to_string()
}
fn default_scrape_url() -> String {
    DEFAULT_SCRAPE_URL.to_string()
}
fn default_list_path() -> PathBuf {
    config_dir().join("word-list.txt")
}
fn default_overrides_dir() -> PathBuf {
    config_dir().join("user-defs")
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_dictionary_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: default_scrape_url(),
            timeout_secs: None,
        }
    }
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            list_path: default_list_path(),
            overrides_dir: default_overrides_dir(),
            dictionary: DictionaryConfig::default(),
            scrape: ScrapeConfig::default(),
        }
    }
}

/// Optional tiers that are available in this process, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub dictionary: bool,
}

impl Capabilities {
    /// Resolve capabilities from config, warning once about disabled tiers.
    pub fn from_config(config: &VocabConfig) -> Self {
        if !config.dictionary.enabled {
            warn!(
                "secondary dictionary lookup is disabled; \
                 set [dictionary] enabled = true for better results"
            );
        }
        Self {
            dictionary: config.dictionary.enabled,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(p: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&p.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `vocab.toml` in the current directory
/// 2. `~/.config/vocab/config.toml`
///
/// Environment variable overrides: `VOCAB_LIST_PATH`, `VOCAB_USER_DEFS_DIR`,
/// `VOCAB_NO_DICTIONARY`.
pub fn load_config() -> Result<VocabConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<VocabConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("vocab.toml");
        if local.exists() {
            Some(local)
        } else {
            let global = config_dir().join("config.toml");
            global.exists().then_some(global)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<VocabConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => VocabConfig::default(),
    };

    if let Ok(list) = std::env::var("VOCAB_LIST_PATH") {
        config.list_path = PathBuf::from(list);
    }
    if let Ok(dir) = std::env::var("VOCAB_USER_DEFS_DIR") {
        config.overrides_dir = PathBuf::from(dir);
    }
    if std::env::var_os("VOCAB_NO_DICTIONARY").is_some() {
        config.dictionary.enabled = false;
    }

    config.list_path = resolve_path(&config.list_path);
    config.overrides_dir = resolve_path(&config.overrides_dir);
    config.dictionary.base_url = resolve_env_vars(&config.dictionary.base_url);
    config.scrape.base_url = resolve_env_vars(&config.scrape.base_url);

    Ok(config)
}

fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".config").join("vocab"))
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Build the lookup chain: user overrides, then the dictionary (if
/// available), then the web scrape.
pub fn create_resolver(config: &VocabConfig, capabilities: Capabilities) -> Result<Resolver> {
    let mut sources: Vec<Box<dyn DefinitionSource>> =
        vec![Box::new(OverrideSource::new(&config.overrides_dir))];

    if capabilities.dictionary {
        sources.push(Box::new(DictionarySource::new(
            &config.dictionary.base_url,
            config.dictionary.timeout_secs.map(Duration::from_secs),
        )?));
    }

    sources.push(Box::new(ScrapeSource::new(
        &config.scrape.base_url,
        config.scrape.timeout_secs.map(Duration::from_secs),
    )?));

    Ok(Resolver::new(sources))
}
