//! Configuration management.
//!
//! Every setting has a default matching the breed-history page, so the scraper
//! runs without any configuration. Values can be overridden from a TOML file and
//! from `WEIMARANER_SCRAPER_*` environment variables:
//!
//! ```toml
//! url = "https://weimaraner-club.cz/chov/historie-vymarskych-oharu/"
//! output = "weimaraner_history.json"
//! timeout_secs = 10
//! language = "cs"
//!
//! [selectors]
//! title = ".et_pb_text_0 .et_pb_text_inner h1"
//! content = ".et_pb_text_1 .et_pb_text_inner"
//! ```
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `WEIMARANER_SCRAPER_SELECTORS__CONTENT`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::DEFAULT_LANGUAGE;
use crate::utils::{BROWSER_USER_AGENT, DEFAULT_TIMEOUT};

/// Page scraped when nothing else is configured
pub const DEFAULT_URL: &str = "https://weimaraner-club.cz/chov/historie-vymarskych-oharu/";

/// Output file written when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "weimaraner_history.json";

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "weimaraner-scraper.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WEIMARANER_SCRAPER";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Page to scrape
    pub url: String,

    /// Where the JSON document is written
    pub output: PathBuf,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    pub user_agent: String,

    /// Language tag recorded in the output metadata
    pub language: String,

    /// Structural selectors locating the page parts
    pub selectors: SelectorSet,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            selectors: SelectorSet::default(),
        }
    }
}

impl ScrapeConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// CSS selectors identifying the title and the main content container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSet {
    /// Selector for the page title element
    pub title: String,

    /// Selector for the content root
    pub content: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            title: ".et_pb_text_0 .et_pb_text_inner h1".to_string(),
            content: ".et_pb_text_1 .et_pb_text_inner".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Load configuration from an optional file plus the environment
pub fn load_config(path: Option<&Path>) -> Result<ScrapeConfig, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Look for a config file in the working directory
pub fn find_config_file() -> Option<PathBuf> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}
