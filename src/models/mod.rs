//! Core data models for a scraped page and its content.

mod image;
mod page;
mod section;

pub use image::{Alignment, Image, ImageBuilder};
pub use page::{Metadata, ScrapeOutcome, ScrapeResult, DEFAULT_LANGUAGE};
pub use section::{ContentBlock, Section};
