//! Writing the scrape outcome as JSON.
//!
//! Output is UTF-8 with non-ASCII characters written literally and four-space
//! indentation, so the Czech text stays readable in the file.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::models::ScrapeOutcome;

const INDENT: &[u8] = b"    ";

/// Errors that can occur while writing output
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a value as indented JSON text
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the outcome to `path`, replacing any existing file
pub fn write_outcome(outcome: &ScrapeOutcome, path: &Path) -> Result<(), OutputError> {
    let json = to_json_string(outcome)?;
    std::fs::write(path, json)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ContentBlock, ImageBuilder, Metadata, ScrapeResult, Section, DEFAULT_LANGUAGE,
    };
    use tempfile::tempdir;

    fn sample() -> ScrapeResult {
        let image = ImageBuilder::new("https://example.com/img/ohař.jpg")
            .alt("Výmarský ohař")
            .classes(["alignleft"])
            .build();

        let mut theory = Section::theory("2. Teorie původu", Some(2));
        theory.push(ContentBlock::paragraph("Žlutý kůň", vec![image.clone()]));
        theory.push(ContentBlock::list(vec!["první".into(), "druhá".into()]));

        let mut intro = Section::introduction();
        intro.push(ContentBlock::paragraph("Úvod", Vec::new()));

        ScrapeResult {
            title: "Historie výmarských ohařů".to_string(),
            source_url: "https://example.com/".to_string(),
            sections: vec![intro, theory],
            all_images: vec![image],
            metadata: Metadata::now(DEFAULT_LANGUAGE),
        }
    }

    #[test]
    fn test_non_ascii_is_literal_and_indented() {
        let json = to_json_string(&ScrapeOutcome::Success(sample())).unwrap();

        assert!(json.contains("Historie výmarských ohařů"));
        assert!(!json.contains("\\u"));
        assert!(json.starts_with("{\n    \"title\""));
    }

    #[test]
    fn test_roundtrip_preserves_structure() {
        let original = sample();
        let json = to_json_string(&ScrapeOutcome::Success(original.clone())).unwrap();
        let parsed: ScrapeOutcome = serde_json::from_str(&json).unwrap();

        let ScrapeOutcome::Success(parsed) = parsed else {
            panic!("expected success");
        };

        let kinds = |r: &ScrapeResult| -> Vec<(&'static str, Vec<&'static str>)> {
            r.sections
                .iter()
                .map(|s| (s.kind(), s.content().iter().map(|b| b.kind()).collect()))
                .collect()
        };
        assert_eq!(kinds(&parsed), kinds(&original));
        assert_eq!(parsed.sections, original.sections);
        assert_eq!(parsed.all_images, original.all_images);
        assert_eq!(parsed.title, original.title);
        assert_eq!(parsed.source_url, original.source_url);
    }

    #[test]
    fn test_write_failure_outcome() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_outcome(
            &ScrapeOutcome::failure("Could not find main content area"),
            &path,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "error": "Could not find main content area" })
        );
    }
}
