//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the element extractor.
//! `dom_query` parses with html5ever, so malformed markup is repaired the way
//! browsers do it rather than rejected.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document. Never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Selection ===

/// First element in document order matching `selector`, if any.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let sel = doc.select(selector);
    if sel.exists() {
        Some(sel.first())
    } else {
        None
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Descendant text with leading and trailing whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_returns_document_order() {
        let doc = parse("<h1>one</h1><h1>two</h1>");
        let h1 = first_match(&doc, "h1").map(|s| trimmed_text(&s));
        assert_eq!(h1.as_deref(), Some("one"));
    }

    #[test]
    fn test_first_match_missing() {
        let doc = parse("<p>text</p>");
        assert!(first_match(&doc, "h1").is_none());
    }

    #[test]
    fn test_get_attribute() {
        let doc = parse(r#"<meta name="description" content="hello">"#);
        let meta = first_match(&doc, "meta");
        assert_eq!(
            meta.and_then(|m| get_attribute(&m, "content")),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_trimmed_text_strips_tags() {
        let doc = parse("<h1>  Hello <span>World</span>  </h1>");
        let h1 = first_match(&doc, "h1").map(|s| trimmed_text(&s));
        assert_eq!(h1.as_deref(), Some("Hello World"));
    }
}
