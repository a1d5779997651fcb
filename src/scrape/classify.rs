//! Grouping the content root's children into sections.
//!
//! The root's direct element children are folded left to right. An `h3` seals
//! the section in progress and opens a theory section; paragraphs and lists are
//! appended to whatever section is open. Sections that end up empty are dropped.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

use super::extract::element_text;
use super::image::{class_list, parse_aligned_image};
use crate::models::{ContentBlock, Section};

static THEORY_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.\s*Teorie").unwrap());
pub(super) static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static LI: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// Byline paragraphs carry this class and are not content
const META_CLASS: &str = "meta";

/// Sealed sections plus the one still being filled
#[derive(Debug)]
struct Accumulator {
    sealed: Vec<Section>,
    current: Section,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            sealed: Vec::new(),
            current: Section::introduction(),
        }
    }

    /// Replace the open section, keeping the old one only if it has content
    fn open(mut self, next: Section) -> Self {
        let previous = std::mem::replace(&mut self.current, next);
        if !previous.is_empty() {
            self.sealed.push(previous);
        }
        self
    }

    fn push(mut self, block: ContentBlock) -> Self {
        self.current.push(block);
        self
    }

    fn finish(self) -> Vec<Section> {
        let Accumulator { mut sealed, current } = self;
        if !current.is_empty() {
            sealed.push(current);
        }
        sealed
    }
}

/// Classify the direct children of the content root into sections
pub fn classify_sections(root: &ElementRef, base_url: &Url) -> Vec<Section> {
    root.children()
        .filter_map(ElementRef::wrap)
        .fold(Accumulator::new(), |acc, child| {
            match child.value().name() {
                "h3" => {
                    let title = element_text(&child);
                    let number = theory_number(&title);
                    acc.open(Section::theory(title, number))
                }
                "p" => match paragraph_block(&child, base_url) {
                    Some(block) => acc.push(block),
                    None => acc,
                },
                "ul" => acc.push(list_block(&child)),
                _ => acc,
            }
        })
        .finish()
}

/// Number from a heading like "3. Teorie dominance"
pub fn theory_number(title: &str) -> Option<u32> {
    THEORY_NUMBER_RE
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn paragraph_block(p: &ElementRef, base_url: &Url) -> Option<ContentBlock> {
    if class_list(p).any(|class| class == META_CLASS) {
        return None;
    }

    let images = p
        .select(&IMG)
        .filter_map(|img| parse_aligned_image(&img, base_url))
        .collect();

    Some(ContentBlock::paragraph(element_text(p), images))
}

fn list_block(ul: &ElementRef) -> ContentBlock {
    ContentBlock::list(ul.select(&LI).map(|li| element_text(&li)).collect())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Alignment;
    use scraper::Html;

    fn classify(inner: &str) -> Vec<Section> {
        let html = format!(r#"<div id="root">{}</div>"#, inner);
        let document = Html::parse_document(&html);
        let selector = Selector::parse("#root").unwrap();
        let root = document.select(&selector).next().unwrap();
        let base = Url::parse("https://weimaraner-club.cz/chov/historie/").unwrap();
        classify_sections(&root, &base)
    }

    #[test]
    fn test_empty_root_has_no_sections() {
        assert!(classify("").is_empty());
        assert!(classify("  text only  <div>ignored</div><h2>ignored</h2>").is_empty());
    }

    #[test]
    fn test_theory_numbers() {
        assert_eq!(theory_number("3. Teorie dominance"), Some(3));
        assert_eq!(theory_number("12.Teorie"), Some(12));
        assert_eq!(theory_number("Úvod"), None);
        assert_eq!(theory_number("Teorie 4"), None);
        assert_eq!(theory_number("99999999999. Teorie"), None);
    }

    #[test]
    fn test_meta_paragraph_is_skipped() {
        let sections = classify(
            r#"<p class="meta">Autor: Jan <img src="a.jpg"></p><p class="">Text</p><p>Další</p>"#,
        );

        assert_eq!(sections.len(), 1);
        let content = sections[0].content();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0], ContentBlock::paragraph("Text", Vec::new()));
    }

    #[test]
    fn test_meta_among_other_classes_is_skipped() {
        let sections = classify(r#"<p class="post-meta meta">Autor</p>"#);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_heading_starts_theory_section() {
        let sections = classify(
            r#"
            <p>Úvodní text</p>
            <h3>1. Teorie X</h3>
            <p>První</p>
            <p>Druhý</p>
            <ul><li> a </li><li>b</li></ul>
            "#,
        );

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind(), "introduction");
        match &sections[1] {
            Section::Theory {
                title,
                number,
                content,
            } => {
                assert_eq!(title, "1. Teorie X");
                assert_eq!(*number, Some(1));
                let kinds: Vec<_> = content.iter().map(|b| b.kind()).collect();
                assert_eq!(kinds, vec!["paragraph", "paragraph", "list"]);
                assert_eq!(content[2], ContentBlock::list(vec!["a".into(), "b".into()]));
            }
            other => panic!("expected theory, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let sections = classify(
            r#"<h3>1. Teorie</h3><h3>2. Teorie</h3><p>Obsah</p><h3>Závěr</h3>"#,
        );

        assert_eq!(sections.len(), 1);
        assert!(matches!(&sections[0], Section::Theory { number: Some(2), .. }));
    }

    #[test]
    fn test_unnumbered_heading_has_no_number() {
        let sections = classify(r#"<h3>Úvod</h3><p>Text</p>"#);
        assert!(matches!(&sections[0], Section::Theory { number: None, .. }));
    }

    #[test]
    fn test_paragraph_images_carry_alignment() {
        let sections = classify(
            r#"<p>Pes <img src="/img/pes.jpg" class="alignright"> a <img src="fena.jpg"> <img alt="bez zdroje"></p>"#,
        );

        match &sections[0].content()[0] {
            ContentBlock::Paragraph { text, images } => {
                assert_eq!(text, "Pes  a");
                assert_eq!(images.len(), 2);
                assert_eq!(images[0].url, "https://weimaraner-club.cz/img/pes.jpg");
                assert_eq!(images[0].alignment, Some(Alignment::Right));
                assert_eq!(
                    images[1].url,
                    "https://weimaraner-club.cz/chov/historie/fena.jpg"
                );
                assert_eq!(images[1].alignment, None);
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }
}
