//! Turning `<img>` elements into [`Image`] values.

use scraper::ElementRef;
use url::Url;

use crate::models::{Alignment, Image, ImageBuilder};
use crate::utils::resolve_url;

/// Parse an image element.
///
/// Returns `None` when the element has no usable `src`.
pub fn parse_image(img: &ElementRef, base_url: &Url) -> Option<Image> {
    let element = img.value();

    let src = element.attr("src").unwrap_or_default();
    if src.is_empty() {
        return None;
    }

    let attr = |name: &str| element.attr(name).unwrap_or_default().to_string();

    Some(
        ImageBuilder::new(resolve_url(base_url, src))
            .alt(attr("alt"))
            .width(attr("width"))
            .height(attr("height"))
            .classes(class_list(img))
            .build(),
    )
}

/// Classes of an element in markup order
pub(crate) fn class_list<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace()
}

/// Parse an image element that sits inside a paragraph, attaching its alignment
pub fn parse_aligned_image(img: &ElementRef, base_url: &Url) -> Option<Image> {
    let mut image = parse_image(img, base_url)?;
    image.alignment = Alignment::from_classes(&image.classes);
    Some(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_image(html: &str, base: &str, aligned: bool) -> Option<Image> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("img").unwrap();
        let img = fragment.select(&selector).next().unwrap();
        let base = Url::parse(base).unwrap();
        if aligned {
            parse_aligned_image(&img, &base)
        } else {
            parse_image(&img, &base)
        }
    }

    #[test]
    fn test_relative_src_is_resolved() {
        let image = first_image(
            r#"<img src="/wp-content/uploads/ohar.jpg" alt="Ohař" width="300" height="200" class="alignleft size-full">"#,
            "https://weimaraner-club.cz/chov/historie/",
            false,
        )
        .unwrap();

        assert_eq!(image.url, "https://weimaraner-club.cz/wp-content/uploads/ohar.jpg");
        assert_eq!(image.filename, "ohar.jpg");
        assert_eq!(image.alt, "Ohař");
        assert_eq!(image.width, "300");
        assert_eq!(image.height, "200");
        assert_eq!(image.classes, vec!["alignleft", "size-full"]);
        assert_eq!(image.alignment, None);
    }

    #[test]
    fn test_missing_or_empty_src_is_dropped() {
        assert!(first_image(r#"<img alt="no source">"#, "https://example.com/", false).is_none());
        assert!(first_image(r#"<img src="" alt="empty">"#, "https://example.com/", false).is_none());
    }

    #[test]
    fn test_missing_attributes_default_to_empty() {
        let image = first_image(
            r#"<img src="https://example.com/a.png">"#,
            "https://example.com/",
            false,
        )
        .unwrap();

        assert_eq!(image.alt, "");
        assert_eq!(image.width, "");
        assert_eq!(image.height, "");
        assert!(image.classes.is_empty());
    }

    #[test]
    fn test_aligned_image() {
        let image = first_image(
            r#"<img src="a.png" class="size-medium aligncenter">"#,
            "https://example.com/",
            true,
        )
        .unwrap();
        assert_eq!(image.alignment, Some(Alignment::Center));
    }
}
