//! # seo-agent
//!
//! On-page SEO analysis for web pages.
//!
//! The library extracts the three on-page signals (title, meta description,
//! first H1), checks them against best-practice length ranges, builds keyword
//! frequency profiles, and scores a page against a competitor page.
//!
//! ## Quick Start
//!
//! ```rust
//! use seo_agent::{analyze_competitor, Options};
//!
//! let own = r#"<html><head><title>Trail Running Shoes for Every Runner</title></head>
//! <body><h1>Trail Running Shoes</h1><p>trail shoes running</p></body></html>"#;
//! let rival = "<html><body><p>trail shoes hiking</p></body></html>";
//!
//! let result = analyze_competitor(own, rival, &Options::default());
//! assert_eq!(result.scores.title_length, 100);
//! assert_eq!(result.scores.h1_presence, 100);
//! assert!(result.comparison.shared.contains("trail"));
//! ```
//!
//! ## Pipeline
//!
//! - **Extraction** ([`extract_elements`]): title, meta description and H1, never failing
//! - **Evaluation** ([`evaluate_elements`]): length and presence checks
//! - **Keyword profiling** ([`keywords::profile_keywords`]): top-N word counts over raw HTML
//! - **Scoring** ([`scoring::score_page`]): four independent 0–100 metrics
//! - **Comparison** ([`compare_keywords`]): shared and unique keyword sets
//! - **Batch runs** ([`analyze_batch`]): per-URL rows, failures kept as error rows
//!
//! The first five stages are pure functions with no I/O. Fetching goes
//! through the [`PageFetcher`] trait; [`HttpFetcher`] is available with the
//! default `http` feature.

mod analysis;
mod batch;
mod compare;
mod error;
mod evaluate;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Keyword tokenization and frequency profiles.
pub mod keywords;

/// Per-metric scoring against a competitor.
pub mod scoring;

/// URL normalization.
pub mod url_utils;

/// Character encoding detection for fetched bodies.
pub mod encoding;

/// Page fetching.
pub mod fetch;

/// Improvement suggestions (mock and hosted model).
pub mod suggest;

/// Markdown report rendering.
pub mod report;

// Public API - re-exports
pub use analysis::{analyze_competitor, analyze_competitor_urls, analyze_html, analyze_url, UrlAnalysis};
pub use batch::analyze_batch;
pub use compare::compare_keywords;
pub use error::{Error, Result};
pub use evaluate::{evaluate_elements, evaluate_with_ranges};
pub use extract::extract_elements;
pub use fetch::{FetchedPage, PageFetcher};
pub use options::{Options, SuggesterConfig, SuggestionMode};
pub use result::{
    BatchEntry, ComparisonRecord, CompetitorAnalysis, ElementRecord, EvaluationRecord, KeywordCount,
    KeywordProfile, PageAnalysis, PageReport, ScoreRecord, Suggestion,
};

#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
