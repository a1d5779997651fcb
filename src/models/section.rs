//! Sections and content blocks produced by the classifier.

use serde::{Deserialize, Serialize};

use super::Image;

/// A typed piece of content inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A text paragraph and the images embedded in it
    Paragraph {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        images: Vec<Image>,
    },

    /// An unordered list
    List { items: Vec<String> },
}

impl ContentBlock {
    /// Create a paragraph block
    pub fn paragraph(text: impl Into<String>, images: Vec<Image>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            images,
        }
    }

    /// Create a list block
    pub fn list(items: Vec<String>) -> Self {
        ContentBlock::List { items }
    }

    /// The block's type tag as it appears in JSON
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
        }
    }
}

/// A run of content blocks, either the page introduction or a numbered theory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    /// Content before the first heading
    Introduction { content: Vec<ContentBlock> },

    /// Content under an `h3` heading
    Theory {
        title: String,
        number: Option<u32>,
        content: Vec<ContentBlock>,
    },
}

impl Section {
    /// An empty introduction, the classifier's starting accumulator
    pub fn introduction() -> Self {
        Section::Introduction {
            content: Vec::new(),
        }
    }

    /// An empty theory section
    pub fn theory(title: impl Into<String>, number: Option<u32>) -> Self {
        Section::Theory {
            title: title.into(),
            number,
            content: Vec::new(),
        }
    }

    /// The section's type tag as it appears in JSON
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Introduction { .. } => "introduction",
            Section::Theory { .. } => "theory",
        }
    }

    /// Blocks in document order
    pub fn content(&self) -> &[ContentBlock] {
        match self {
            Section::Introduction { content } | Section::Theory { content, .. } => content,
        }
    }

    /// Append a block
    pub fn push(&mut self, block: ContentBlock) {
        match self {
            Section::Introduction { content } | Section::Theory { content, .. } => {
                content.push(block)
            }
        }
    }

    /// Whether the section has no blocks (and would be discarded)
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}
