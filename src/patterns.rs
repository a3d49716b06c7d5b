//! Compiled regex patterns used across the pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Keyword Tokenization
// =============================================================================

/// Whole words made only of ASCII letters, three or more long.
///
/// The match must sit on word boundaries, so a letter run glued to a digit,
/// underscore or non-ASCII letter (`SEO3`, `meta_tag`, `café`) is not a
/// keyword, and `se` is too short.
pub static KEYWORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("KEYWORD_TOKEN regex"));

// =============================================================================
// Suggestion Reply Parsing
// =============================================================================

/// A `label: value` line in a free-form model reply.
///
/// Captures the label (`title...`, `meta...`, `h1...`) and the value after the first
/// colon. Leading list markers and bold markers are tolerated.
pub static REPLY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\s\-*#\d.]*(title[\w ]*|meta[\w ]*|h1[\w ]*?)\s*\**\s*:\s*\**\s*(.*?)\s*\**\s*$")
        .expect("REPLY_LINE regex")
});
