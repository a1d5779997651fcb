//! The fetch → parse → classify pipeline.
//!
//! [`scrape`] runs the whole thing and never fails: fatal problems become a
//! [`ScrapeOutcome::Failure`] carrying the error message. The individual stages
//! are public so they can be driven separately, e.g. on markup loaded from disk
//! via [`extract_page`].

mod classify;
mod extract;
mod fetch;
mod image;

pub use classify::{classify_sections, theory_number};
pub use extract::{ContentExtractor, PageSelectors};
pub use fetch::fetch_page;
pub use image::{parse_aligned_image, parse_image};

use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::models::{Metadata, ScrapeOutcome, ScrapeResult};
use crate::utils::HttpClient;

/// Errors that end a scrape run
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Transport-level failure (DNS, connection, timeout, body read)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with something other than 200
    #[error("Failed to fetch page: Status code {0}")]
    BadStatus(u16),

    /// The content root selector matched nothing
    #[error("Could not find main content area")]
    MissingContentRoot,

    /// A configured selector does not parse
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// The page URL does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Network(err.to_string())
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(err: url::ParseError) -> Self {
        ScrapeError::InvalidUrl(err.to_string())
    }
}

/// Run the pipeline for the configured page
pub async fn scrape(config: &ScrapeConfig) -> ScrapeOutcome {
    match scrape_page(config).await {
        Ok(result) => ScrapeOutcome::Success(result),
        Err(e) => {
            warn!("Scrape of {} failed: {}", config.url, e);
            ScrapeOutcome::failure(e)
        }
    }
}

/// Fetch the configured page and extract its content
pub async fn scrape_page(config: &ScrapeConfig) -> Result<ScrapeResult, ScrapeError> {
    let base_url = Url::parse(&config.url)?;
    let selectors = PageSelectors::compile(&config.selectors)?;
    let client = HttpClient::from_config(config)?;

    let html = fetch_page(&client, &config.url).await?;
    extract_page(&html, &base_url, &selectors, &config.language)
}

/// Extract the structured content from raw markup
pub fn extract_page(
    html: &str,
    base_url: &Url,
    selectors: &PageSelectors,
    language: &str,
) -> Result<ScrapeResult, ScrapeError> {
    let document = Html::parse_document(html);
    let extractor = ContentExtractor::new(&document, selectors);

    let root = extractor.find_content_root()?;
    let title = extractor.find_title();
    debug!("Title: {:?}", title);

    let sections = classify_sections(&root, base_url);

    let all_images: Vec<_> = root
        .select(&classify::IMG)
        .filter_map(|img| parse_image(&img, base_url))
        .collect();

    let result = ScrapeResult {
        title,
        source_url: base_url.to_string(),
        sections,
        all_images,
        metadata: Metadata::now(language),
    };

    info!(
        "Extracted {} sections ({} theories, {} blocks) and {} images",
        result.sections.len(),
        result.theories().count(),
        result.block_count(),
        result.all_images.len()
    );

    Ok(result)
}
