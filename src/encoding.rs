//! Character encoding detection for fetched page bodies.
//!
//! The charset is taken from the HTTP `Content-Type` header when present,
//! then from the document's own meta declarations, and defaults to UTF-8.
//! Decoding is lossy: invalid bytes become U+FFFD instead of failing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `charset=...` inside a `Content-Type` value (header or http-equiv meta)
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// How many leading bytes are scanned for meta declarations.
const SNIFF_LEN: usize = 1024;

/// Detect the encoding of a page body.
///
/// Order: `Content-Type` header charset, `<meta charset>`, then a
/// `http-equiv` Content-Type meta (both caught by the meta pattern), then UTF-8.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

fn charset_from_content_type(value: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_CHARSET_RE
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Decode a page body to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use seo_agent::encoding::decode_body;
///
/// let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_body(body, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
