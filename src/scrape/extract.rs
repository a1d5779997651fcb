//! Locating the title and the content root in a parsed page.

use scraper::{ElementRef, Html, Selector};

use super::ScrapeError;
use crate::config::SelectorSet;

/// Compiled form of a [`SelectorSet`]
#[derive(Debug, Clone)]
pub struct PageSelectors {
    title: Selector,
    content: Selector,
}

impl PageSelectors {
    /// Compile the configured selector strings
    pub fn compile(set: &SelectorSet) -> Result<Self, ScrapeError> {
        Ok(Self {
            title: parse_selector(&set.title)?,
            content: parse_selector(&set.content)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::InvalidSelector(format!("{}: {}", selector, e)))
}

/// Finds the structural parts of a page
#[derive(Debug)]
pub struct ContentExtractor<'a> {
    document: &'a Html,
    selectors: &'a PageSelectors,
}

impl<'a> ContentExtractor<'a> {
    pub fn new(document: &'a Html, selectors: &'a PageSelectors) -> Self {
        Self {
            document,
            selectors,
        }
    }

    /// Trimmed title text, or an empty string when the title element is missing
    pub fn find_title(&self) -> String {
        self.document
            .select(&self.selectors.title)
            .next()
            .map(|title| element_text(&title))
            .unwrap_or_default()
    }

    /// The main content container
    pub fn find_content_root(&self) -> Result<ElementRef<'a>, ScrapeError> {
        self.document
            .select(&self.selectors.content)
            .next()
            .ok_or(ScrapeError::MissingContentRoot)
    }
}

/// Concatenated descendant text, trimmed
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
