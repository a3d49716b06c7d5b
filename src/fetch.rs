//! Page fetching.
//!
//! The pipeline depends only on the [`PageFetcher`] trait. [`HttpFetcher`]
//! (feature `http`) is the blocking reqwest implementation; tests and
//! embedders can pass any `Fn(&str) -> Result<FetchedPage>` instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// HTTP status code.
    pub status_code: u16,

    /// Wall-clock duration of the request in milliseconds.
    pub elapsed_ms: u64,

    /// URL after following redirects.
    pub final_url: String,

    /// Response headers, lowercase names.
    pub headers: BTreeMap<String, String>,

    /// Decoded response body.
    pub text: String,

    /// Whether the status is a 2xx success.
    pub ok: bool,
}

impl FetchedPage {
    /// Successful response with the given body, mostly for tests and embedders.
    #[must_use]
    pub fn ok(final_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            final_url: final_url.into(),
            text: text.into(),
            ok: true,
            ..Self::default()
        }
    }

    /// Response with a non-success status and empty body.
    #[must_use]
    pub fn with_status(final_url: impl Into<String>, status_code: u16) -> Self {
        Self {
            status_code,
            final_url: final_url.into(),
            ok: (200..300).contains(&status_code),
            ..Self::default()
        }
    }
}

/// Fetches a page by normalized URL.
///
/// Transport failures are returned as `Err`; an HTTP error status is a
/// successful fetch with `ok == false`.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

impl<F> PageFetcher for F
where
    F: Fn(&str) -> Result<FetchedPage>,
{
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self(url)
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::collections::BTreeMap;
    use std::time::Instant;

    use log::debug;
    use reqwest::blocking::Client;
    use reqwest::header::CONTENT_TYPE;

    use super::{FetchedPage, PageFetcher};
    use crate::encoding::decode_body;
    use crate::error::{Error, Result};
    use crate::options::Options;

    /// Blocking HTTP fetcher following redirects.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        /// Build a fetcher using the timeout and user-agent from `options`.
        pub fn new(options: &Options) -> Result<Self> {
            let client = Client::builder()
                .timeout(options.timeout)
                .user_agent(options.user_agent.clone())
                .build()
                .map_err(|e| Error::Fetch {
                    url: String::new(),
                    message: format!("failed to build HTTP client: {e}"),
                })?;
            Ok(Self { client })
        }
    }

    impl PageFetcher for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<FetchedPage> {
            let fetch_error = |e: reqwest::Error| Error::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            };

            let start = Instant::now();
            let resp = self.client.get(url).send().map_err(fetch_error)?;

            let status = resp.status();
            let final_url = resp.url().to_string();
            let headers: BTreeMap<String, String> = resp
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let content_type = headers.get(CONTENT_TYPE.as_str()).cloned();

            let body = resp.bytes().map_err(fetch_error)?;
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            debug!("fetched {url} -> {final_url} ({status}, {elapsed_ms} ms, {} bytes)", body.len());

            Ok(FetchedPage {
                status_code: status.as_u16(),
                elapsed_ms,
                final_url,
                headers,
                text: decode_body(&body, content_type.as_deref()),
                ok: status.is_success(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn closures_are_fetchers() {
        let fetcher = |url: &str| -> Result<FetchedPage> { Ok(FetchedPage::ok(url, "<title>t</title>")) };
        let page = fetcher.fetch("https://example.com").unwrap_or_default();
        assert!(page.ok);
        assert_eq!(page.final_url, "https://example.com");
    }

    #[test]
    fn closure_errors_propagate() {
        let fetcher = |url: &str| -> Result<FetchedPage> {
            Err(Error::Fetch {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
        };
        assert!(matches!(fetcher.fetch("https://down.test"), Err(Error::Fetch { .. })));
    }

    #[test]
    fn with_status_sets_ok_flag() {
        assert!(!FetchedPage::with_status("https://x.test", 404).ok);
        assert!(FetchedPage::with_status("https://x.test", 204).ok);
    }
}
