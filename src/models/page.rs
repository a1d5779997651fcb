//! The scrape result record and its failure counterpart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Image, Section};

/// Language tag recorded in the metadata
pub const DEFAULT_LANGUAGE: &str = "cs";

/// Run metadata attached to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Language of the scraped page
    pub language: String,

    /// When the record was assembled (ISO-8601)
    pub scraped_at: DateTime<Utc>,
}

impl Metadata {
    /// Metadata stamped with the current time
    pub fn now(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            scraped_at: Utc::now(),
        }
    }
}

/// Structured content of one scraped page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Page title (empty when the title element is missing)
    pub title: String,

    /// Page URL the content was fetched from
    #[serde(rename = "url")]
    pub source_url: String,

    /// Sections in document order
    pub sections: Vec<Section>,

    /// Every image in the content area, independent of paragraph ownership
    pub all_images: Vec<Image>,

    /// Run metadata
    pub metadata: Metadata,
}

impl ScrapeResult {
    /// Total number of content blocks across all sections
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.content().len()).sum()
    }

    /// Theory sections only
    pub fn theories(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|s| matches!(s, Section::Theory { .. }))
    }
}

/// What a run writes to disk: the full record or a single error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    Success(ScrapeResult),
    Failure { error: String },
}

impl ScrapeOutcome {
    /// Create a failure outcome
    pub fn failure(error: impl std::fmt::Display) -> Self {
        ScrapeOutcome::Failure {
            error: error.to_string(),
        }
    }

    /// The error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            ScrapeOutcome::Failure { error } => Some(error),
            ScrapeOutcome::Success(_) => None,
        }
    }
}

impl From<ScrapeResult> for ScrapeOutcome {
    fn from(result: ScrapeResult) -> Self {
        ScrapeOutcome::Success(result)
    }
}
