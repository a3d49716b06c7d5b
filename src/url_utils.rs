//! URL Utility Functions
//!
//! Normalization of user-entered URLs before fetching.

/// Scheme prepended to inputs that have none.
pub const DEFAULT_SCHEME: &str = "https://";

/// Ensure a URL carries a scheme, defaulting to `https://`.
///
/// Input is trimmed first. An existing scheme is kept untouched, including
/// non-HTTP ones. Empty input stays empty.
///
/// A bare `host:port` such as `localhost:8080` counts as having no scheme and
/// becomes `https://localhost:8080`, even though a generic URI parser would
/// read `localhost` as the scheme.
///
/// # Examples
/// ```
/// use seo_agent::url_utils::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// assert_eq!(normalize_url("localhost:8080"), "https://localhost:8080");
/// assert_eq!(normalize_url("  "), "");
/// ```
#[must_use]
pub fn normalize_url(url_str: &str) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if has_scheme(url_str) {
        url_str.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url_str}")
    }
}

/// Whether `s` starts with `scheme:` per RFC 3986.
fn has_scheme(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return false;
    }

    // `localhost:8080` and `example.com:443/path` are host:port, not scheme:path
    let port_like = rest
        .split(['/', '?', '#'])
        .next()
        .is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    !port_like
}
