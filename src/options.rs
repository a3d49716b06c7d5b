//! Configuration options for page analysis.
//!
//! The `Options` struct carries the tunables of the pipeline: keyword
//! profile size, best-practice ranges, fetch settings and the suggestion
//! generator configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Default user-agent sent with page fetches.
pub const DEFAULT_USER_AGENT: &str = "seo-agent/0.3";

/// Default chat model for hosted suggestions.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default chat-completions endpoint for hosted suggestions.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration options for page analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use seo_agent::Options;
///
/// let options = Options {
///     top_n: 20,
///     ..Options::default()
/// };
/// assert_eq!(options.title_range, 30..=60);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of keywords kept in a keyword profile.
    ///
    /// Default: `10`
    pub top_n: usize,

    /// Recommended title length in characters, inclusive.
    ///
    /// Default: `30..=60`
    pub title_range: RangeInclusive<usize>,

    /// Recommended meta description length in characters, inclusive.
    ///
    /// Default: `80..=160`
    pub meta_range: RangeInclusive<usize>,

    /// Timeout handed to the page fetcher.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,

    /// User-agent handed to the page fetcher.
    ///
    /// Default: `seo-agent/0.3`
    pub user_agent: String,

    /// Suggestion generator configuration.
    pub suggestion: SuggesterConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            top_n: crate::keywords::DEFAULT_TOP_N,
            title_range: 30..=60,
            meta_range: 80..=160,
            timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            suggestion: SuggesterConfig::default(),
        }
    }
}

/// Which suggestion generator to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestionMode {
    /// Deterministic offline transform.
    #[default]
    Mock,
    /// Hosted chat-completions model, falling back to `Mock` on failure.
    HostedLlm,
}

/// Configuration for the suggestion generator.
///
/// The mode is passed explicitly with every call; there is no process-wide
/// toggle.
#[derive(Debug, Clone)]
pub struct SuggesterConfig {
    /// Generator to use.
    ///
    /// Default: [`SuggestionMode::Mock`]
    pub mode: SuggestionMode,

    /// Bearer token for the hosted API.
    ///
    /// Default: `None`
    pub api_key: Option<String>,

    /// Chat model name.
    ///
    /// Default: `gpt-4o-mini`
    pub model: String,

    /// Chat-completions endpoint.
    pub endpoint: String,

    /// Reply token limit.
    ///
    /// Default: `300`
    pub max_tokens: u32,

    /// Request timeout for the hosted call.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            mode: SuggestionMode::Mock,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_tokens: 300,
            timeout: Duration::from_secs(30),
        }
    }
}

impl SuggesterConfig {
    /// Build a configuration from the environment.
    ///
    /// `OPENAI_API_KEY` selects hosted mode when set and non-empty;
    /// `SEO_AGENT_MODEL` overrides the model name.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            config.mode = SuggestionMode::HostedLlm;
            config.api_key = Some(key);
        }
        if let Some(model) = lookup("SEO_AGENT_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }
        config
    }
}
