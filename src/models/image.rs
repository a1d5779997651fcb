//! Image model for pictures embedded in the page content.

use serde::{Deserialize, Serialize};

/// Horizontal placement of an image inside a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Right,
    Left,
    Center,
}

impl Alignment {
    /// Detect alignment from an element's class list.
    ///
    /// `alignright` wins over `alignleft`, which wins over `aligncenter`.
    pub fn from_classes<S: AsRef<str>>(classes: &[S]) -> Option<Self> {
        let has = |name: &str| classes.iter().any(|c| c.as_ref() == name);

        if has("alignright") {
            Some(Alignment::Right)
        } else if has("alignleft") {
            Some(Alignment::Left)
        } else if has("aligncenter") {
            Some(Alignment::Center)
        } else {
            None
        }
    }
}

/// An image found in the content area
///
/// All fields come straight from markup attributes; `url` is always absolute
/// once the image went through the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Absolute image URL
    pub url: String,

    /// Last path segment of `url`
    pub filename: String,

    /// Alt text (empty when absent)
    pub alt: String,

    /// Width attribute as written in markup (empty when absent)
    pub width: String,

    /// Height attribute as written in markup (empty when absent)
    pub height: String,

    /// Class list in markup order
    #[serde(default)]
    pub classes: Vec<String>,

    /// Alignment, only set for images collected inside a paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Image {
    /// Create an image from its resolved URL, deriving the filename
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let filename = crate::utils::filename_from_url(&url).to_string();
        Self {
            url,
            filename,
            alt: String::new(),
            width: String::new(),
            height: String::new(),
            classes: Vec::new(),
            alignment: None,
        }
    }
}

/// Builder for constructing Image objects
#[derive(Debug, Clone)]
pub struct ImageBuilder {
    image: Image,
}

impl ImageBuilder {
    /// Create a new builder from the resolved URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            image: Image::new(url),
        }
    }

    /// Set alt text
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.image.alt = alt.into();
        self
    }

    /// Set width
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.image.width = width.into();
        self
    }

    /// Set height
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.image.height = height.into();
        self
    }

    /// Set classes
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Build the Image
    pub fn build(self) -> Image {
        self.image
    }
}
