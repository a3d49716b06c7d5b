//! Per-metric 0–100 scoring of a page against a competitor.
//!
//! Length metrics give full marks inside the recommended range and fall off
//! linearly (one point per character) from the range midpoint outside it.
//! Keyword coverage is the share of the competitor's top keywords that also
//! appear in the page's own top keywords.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::evaluate::char_len;
use crate::options::Options;
use crate::result::{ElementRecord, KeywordProfile, ScoreRecord};

/// Maximum score of any metric.
pub const MAX_SCORE: u32 = 100;

/// Score a page using the default ranges.
///
/// # Examples
///
/// ```
/// use seo_agent::scoring::score_page;
/// use seo_agent::{ElementRecord, KeywordProfile};
///
/// let elements = ElementRecord {
///     title: "x".repeat(20),
///     ..ElementRecord::default()
/// };
/// let scores = score_page(&elements, &KeywordProfile::default(), &KeywordProfile::default());
/// assert_eq!(scores.title_length, 75);
/// assert_eq!(scores.keyword_coverage, 0);
/// ```
#[must_use]
pub fn score_page(
    elements: &ElementRecord,
    own_keywords: &KeywordProfile,
    other_keywords: &KeywordProfile,
) -> ScoreRecord {
    score_with_options(elements, own_keywords, other_keywords, &Options::default())
}

/// Score a page using the ranges configured in `options`.
#[must_use]
pub fn score_with_options(
    elements: &ElementRecord,
    own_keywords: &KeywordProfile,
    other_keywords: &KeywordProfile,
    options: &Options,
) -> ScoreRecord {
    ScoreRecord {
        title_length: length_score(char_len(&elements.title), &options.title_range),
        meta_length: length_score(char_len(&elements.meta_description), &options.meta_range),
        h1_presence: if elements.h1.is_empty() { 0 } else { MAX_SCORE },
        keyword_coverage: keyword_coverage(own_keywords, other_keywords),
    }
}

/// 100 inside `range`, otherwise `max(0, 100 - |len - midpoint|)`.
#[must_use]
pub fn length_score(len: usize, range: &RangeInclusive<usize>) -> u32 {
    if range.contains(&len) {
        return MAX_SCORE;
    }
    let midpoint = (range.start() + range.end()) / 2;
    let distance = len.abs_diff(midpoint);
    u32::try_from(distance).map_or(0, |d| MAX_SCORE.saturating_sub(d))
}

/// Percentage of the competitor's keywords also found in the own profile,
/// truncated. An empty competitor profile scores 0.
#[must_use]
pub fn keyword_coverage(own_keywords: &KeywordProfile, other_keywords: &KeywordProfile) -> u32 {
    let own_set: HashSet<&str> = own_keywords.keywords().collect();
    let other_set: HashSet<&str> = other_keywords.keywords().collect();

    if other_set.is_empty() {
        return 0;
    }

    let covered = own_set.intersection(&other_set).count();
    let percent = covered * MAX_SCORE as usize / other_set.len();
    u32::try_from(percent).unwrap_or(MAX_SCORE)
}
