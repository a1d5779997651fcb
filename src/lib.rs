//! # Weimaraner Scraper
//!
//! Fetches the Weimaraner club's breed-history page, extracts its structured
//! content (introduction, numbered theory sections, paragraphs, lists and
//! images) and writes it as a JSON document.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Output records (ScrapeResult, Section, ContentBlock, Image)
//! - [`scrape`]: The fetch → parse → classify pipeline
//! - [`output`]: JSON serialization of the outcome
//! - [`utils`]: HTTP client and URL helpers
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod output;
pub mod scrape;
pub mod utils;

// Re-export commonly used types
pub use models::{ScrapeOutcome, ScrapeResult};
pub use scrape::{scrape, ScrapeError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
