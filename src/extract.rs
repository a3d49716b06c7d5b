//! Element extraction: title, meta description and first H1.

use crate::dom::{self, Document};
use crate::result::ElementRecord;

const META_DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

/// Extract the on-page SEO elements of an HTML document.
///
/// Never fails: missing or empty tags yield empty strings, and malformed
/// markup is repaired by the parser. Markup inside `<template>` is inert
/// content and is never matched.
#[must_use]
pub fn extract_elements(html: &str) -> ElementRecord {
    let doc = dom::parse(html);
    ElementRecord {
        title: extract_title(&doc),
        meta_description: extract_meta_description(&doc),
        h1: extract_h1(&doc),
    }
}

fn extract_title(doc: &Document) -> String {
    dom::first_match(doc, "title")
        .map(|title| dom::trimmed_text(&title))
        .unwrap_or_default()
}

/// Only the first matching tag is consulted; an empty `content` there is not
/// rescued by a later tag.
fn extract_meta_description(doc: &Document) -> String {
    dom::first_match(doc, META_DESCRIPTION_SELECTOR)
        .and_then(|meta| dom::get_attribute(&meta, "content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

fn extract_h1(doc: &Document) -> String {
    dom::first_match(doc, "h1")
        .map(|h1| dom::trimmed_text(&h1))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_three_elements() {
        let html = r#"<html><head>
            <title>  Best Running Shoes 2024  </title>
            <meta name="description" content=" Compare the top running shoes. ">
            </head><body><h1>Running Shoes</h1></body></html>"#;
        let elements = extract_elements(html);
        assert_eq!(elements.title, "Best Running Shoes 2024");
        assert_eq!(elements.meta_description, "Compare the top running shoes.");
        assert_eq!(elements.h1, "Running Shoes");
    }

    #[test]
    fn first_meta_description_wins_even_if_empty() {
        let html = r#"<meta name="description" content="">
            <meta name="description" content="second">"#;
        assert_eq!(extract_elements(html).meta_description, "");
    }

    #[test]
    fn meta_without_content_attribute_is_empty() {
        let html = r#"<meta name="description">"#;
        assert_eq!(extract_elements(html).meta_description, "");
    }

    #[test]
    fn other_meta_names_are_ignored() {
        let html = r#"<meta name="keywords" content="a, b">
            <meta property="og:description" content="og text">"#;
        assert_eq!(extract_elements(html).meta_description, "");
    }

    #[test]
    fn h1_uses_descendant_text_of_first_heading() {
        let html = "<h1> Hello <em>big</em> world </h1><h1>Second</h1>";
        assert_eq!(extract_elements(html).h1, "Hello big world");
    }

    #[test]
    fn template_contents_are_skipped() {
        let html = "<template><h1>Hidden</h1></template><h1>After</h1>";
        assert_eq!(extract_elements(html).h1, "After");
    }

    #[test]
    fn empty_input_yields_empty_fields() {
        assert_eq!(extract_elements(""), ElementRecord::default());
    }
}
