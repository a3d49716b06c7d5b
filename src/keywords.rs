//! Keyword frequency profiling.
//!
//! Text is tokenized into whole ASCII-letter words of three or more letters,
//! lowercased and counted. The profile keeps the `top_n` most frequent
//! keywords; ties rank by first appearance in the text.

use std::collections::HashMap;

use crate::patterns::KEYWORD_TOKEN;
use crate::result::KeywordProfile;

/// Default profile size.
pub const DEFAULT_TOP_N: usize = 10;

/// Build a keyword profile of at most `top_n` entries.
///
/// # Examples
///
/// ```
/// use seo_agent::keywords::profile_keywords;
///
/// let profile = profile_keywords("SEO seo SEO3 se", 10);
/// assert_eq!(profile.len(), 1);
/// assert_eq!(profile.count_of("seo"), Some(2));
/// ```
#[must_use]
pub fn profile_keywords(text: &str, top_n: usize) -> KeywordProfile {
    KeywordProfile::from_counts(count_tokens(text)).truncated(top_n)
}

/// Token counts in first-seen order.
fn count_tokens(text: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokenize(text) {
        match index.get(&token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts
}

/// Lowercased keyword tokens in text order.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    KEYWORD_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
}
