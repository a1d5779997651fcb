//! HTTP client utilities.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ScrapeConfig;

/// User agent of a common desktop browser; some hosts reject unknown clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client with sensible defaults
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a new HTTP client that identifies as a desktop browser
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_user_agent(BROWSER_USER_AGENT, DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with a custom user agent and request timeout
    pub fn with_user_agent(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Create a client from the scrape configuration
    pub fn from_config(config: &ScrapeConfig) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(&config.user_agent, config.timeout())
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
