//! Record types produced by the analysis pipeline.
//!
//! Every record is a plain value: computed from its inputs, never mutated
//! afterwards, and serializable for JSON export.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The three on-page SEO elements of a document.
///
/// All fields are always present; a missing tag yields an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Trimmed content of the `<title>` tag.
    pub title: String,

    /// Trimmed `content` of the first `<meta name="description">` tag.
    pub meta_description: String,

    /// Trimmed text of the first `<h1>` element.
    pub h1: String,
}

/// Best-practice checks derived from an [`ElementRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Title length in characters.
    pub title_length: usize,

    /// Whether the title length lies in the recommended range.
    pub title_ok: bool,

    /// Meta description length in characters.
    pub meta_length: usize,

    /// Whether the meta description length lies in the recommended range.
    pub meta_ok: bool,

    /// Whether the page has a non-empty H1.
    pub has_h1: bool,
}

/// A keyword and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Lowercase alphabetic token, at least three letters.
    pub keyword: String,

    /// Number of occurrences in the source text.
    pub count: usize,
}

/// Ranked, size-bounded keyword frequency table.
///
/// Entries are ordered by count descending; equal counts keep the order in
/// which the keywords were first seen. Deserialized profiles are re-ranked
/// the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<KeywordCount>", into = "Vec<KeywordCount>")]
pub struct KeywordProfile {
    entries: Vec<KeywordCount>,
}

impl KeywordProfile {
    /// Build a profile from `(keyword, count)` pairs in discovery order.
    ///
    /// Pairs are ranked by count with a stable sort, so ties keep the order
    /// given here. Zero counts are dropped.
    #[must_use]
    pub fn from_counts<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut entries: Vec<KeywordCount> = pairs
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.into(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Keep only the first `n` entries.
    #[must_use]
    pub fn truncated(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    /// Ranked entries.
    #[must_use]
    pub fn entries(&self) -> &[KeywordCount] {
        &self.entries
    }

    /// Iterate over the keywords in rank order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// The keyword set of this profile (counts dropped).
    #[must_use]
    pub fn keyword_set(&self) -> BTreeSet<&str> {
        self.keywords().collect()
    }

    /// Count recorded for `keyword`, if it made the cut.
    #[must_use]
    pub fn count_of(&self, keyword: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.count)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the profile holds no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<KeywordCount>> for KeywordProfile {
    fn from(entries: Vec<KeywordCount>) -> Self {
        Self::from_counts(entries.into_iter().map(|e| (e.keyword, e.count)))
    }
}

impl From<KeywordProfile> for Vec<KeywordCount> {
    fn from(profile: KeywordProfile) -> Self {
        profile.entries
    }
}

/// Per-metric 0–100 scores for a page measured against a competitor.
///
/// The four sub-scores are independent; no aggregate is defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "Title Length")]
    pub title_length: u32,

    #[serde(rename = "Meta Length")]
    pub meta_length: u32,

    #[serde(rename = "H1 Presence")]
    pub h1_presence: u32,

    #[serde(rename = "Keyword Coverage")]
    pub keyword_coverage: u32,
}

impl ScoreRecord {
    /// Metric labels paired with their scores, in display order.
    #[must_use]
    pub fn metrics(&self) -> [(&'static str, u32); 4] {
        [
            ("Title Length", self.title_length),
            ("Meta Length", self.meta_length),
            ("H1 Presence", self.h1_presence),
            ("Keyword Coverage", self.keyword_coverage),
        ]
    }
}

/// Set comparison of two keyword profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Keywords present in both profiles.
    pub shared: BTreeSet<String>,

    /// Keywords only in the caller's profile.
    pub unique_to_self: BTreeSet<String>,

    /// Keywords only in the competitor's profile.
    pub unique_to_competitor: BTreeSet<String>,
}

/// Everything derived from one page's HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnalysis {
    pub elements: ElementRecord,
    pub evaluation: EvaluationRecord,
    pub keywords: KeywordProfile,
}

/// A page measured against a competitor page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub own: PageAnalysis,
    pub competitor: PageAnalysis,
    pub scores: ScoreRecord,
    pub comparison: ComparisonRecord,
}

/// Successful per-URL row of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    /// Final URL after redirects.
    pub url: String,

    /// HTTP status of the fetch.
    pub status_code: u16,

    /// Fetch duration in milliseconds.
    pub elapsed_ms: u64,

    pub elements: ElementRecord,
    pub evaluation: EvaluationRecord,
}

impl PageReport {
    /// Display flag for a pass/fail check.
    #[must_use]
    pub fn flag(ok: bool) -> &'static str {
        if ok {
            "✅"
        } else {
            "⚠️"
        }
    }
}

/// One row of a batch run: either an analyzed page or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchEntry {
    Analyzed(PageReport),
    Failed {
        /// Normalized URL that was requested.
        url: String,
        /// Human-readable status, e.g. `Error 404` or `Error: timed out`.
        status: String,
    },
}

impl BatchEntry {
    /// URL of this row (final URL for analyzed pages).
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Analyzed(report) => &report.url,
            Self::Failed { url, .. } => url,
        }
    }

    /// `OK` for analyzed pages, the error description otherwise.
    #[must_use]
    pub fn status(&self) -> &str {
        match self {
            Self::Analyzed(_) => "OK",
            Self::Failed { status, .. } => status,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub fn report(&self) -> Option<&PageReport> {
        match self {
            Self::Analyzed(report) => Some(report),
            Self::Failed { .. } => None,
        }
    }
}

/// Improved versions of the three SEO elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub meta: String,
    pub h1: String,
}
