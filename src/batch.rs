//! Multi-URL batch analysis.
//!
//! Each URL is normalized, fetched and analyzed independently, in input
//! order. A failing URL becomes a [`BatchEntry::Failed`] row and never stops
//! the rest of the batch.

use log::{debug, info, warn};

use crate::error::Error;
use crate::evaluate::evaluate_with_ranges;
use crate::extract::extract_elements;
use crate::fetch::PageFetcher;
use crate::options::Options;
use crate::result::{BatchEntry, PageReport};
use crate::url_utils::normalize_url;

/// Analyze every URL in `urls`, one row per input, in order.
///
/// # Examples
///
/// ```
/// use seo_agent::{analyze_batch, FetchedPage, Options, Result};
///
/// let fetcher = |url: &str| -> Result<FetchedPage> {
///     Ok(FetchedPage::ok(url, "<title>Hello</title><h1>Hi</h1>"))
/// };
/// let rows = analyze_batch(&["example.com"], &fetcher, &Options::default());
/// assert_eq!(rows[0].url(), "https://example.com");
/// assert_eq!(rows[0].status(), "OK");
/// ```
pub fn analyze_batch<S: AsRef<str>>(
    urls: &[S],
    fetcher: &dyn PageFetcher,
    options: &Options,
) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = urls
        .iter()
        .map(|url| analyze_one(url.as_ref(), fetcher, options))
        .collect();

    let failed = entries.iter().filter(|e| e.is_error()).count();
    info!("batch finished: {} analyzed, {failed} failed", entries.len() - failed);
    entries
}

fn analyze_one(raw_url: &str, fetcher: &dyn PageFetcher, options: &Options) -> BatchEntry {
    let url = normalize_url(raw_url);
    if url.is_empty() {
        warn!("skipping blank URL input");
        return BatchEntry::Failed {
            url,
            status: format!("Error: {}", Error::InvalidUrl(raw_url.to_string())),
        };
    }

    debug!("analyzing {url}");
    match fetcher.fetch(&url) {
        Ok(page) if page.ok => {
            let elements = extract_elements(&page.text);
            let evaluation = evaluate_with_ranges(&elements, &options.title_range, &options.meta_range);
            BatchEntry::Analyzed(PageReport {
                url: page.final_url,
                status_code: page.status_code,
                elapsed_ms: page.elapsed_ms,
                elements,
                evaluation,
            })
        }
        Ok(page) => {
            warn!("{url} returned HTTP {}", page.status_code);
            BatchEntry::Failed {
                url,
                status: format!("Error {}", page.status_code),
            }
        }
        Err(e) => {
            warn!("{url} could not be fetched: {e}");
            BatchEntry::Failed {
                url,
                status: format!("Error: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::fetch::FetchedPage;

    fn ok_fetcher(url: &str) -> Result<FetchedPage> {
        Ok(FetchedPage::ok(
            url,
            r#"<title>A title long enough to pass the check</title><h1>Head</h1>"#,
        ))
    }

    #[test]
    fn analyzed_row_carries_evaluation() {
        let rows = analyze_batch(&["example.com"], &ok_fetcher, &Options::default());
        let report = rows[0].report().cloned();
        match report {
            Some(report) => {
                assert_eq!(report.url, "https://example.com");
                assert!(report.evaluation.title_ok);
                assert!(report.evaluation.has_h1);
                assert!(!report.evaluation.meta_ok);
            }
            None => panic!("expected analyzed row, got {:?}", rows[0]),
        }
    }

    #[test]
    fn error_status_becomes_failed_row() {
        let fetcher = |url: &str| -> Result<FetchedPage> { Ok(FetchedPage::with_status(url, 404)) };
        let rows = analyze_batch(&["https://example.com/missing"], &fetcher, &Options::default());
        assert_eq!(
            rows,
            vec![BatchEntry::Failed {
                url: "https://example.com/missing".to_string(),
                status: "Error 404".to_string(),
            }]
        );
    }

    #[test]
    fn blank_url_is_reported_not_fetched() {
        let fetcher = |_: &str| -> Result<FetchedPage> { panic!("blank URLs must not be fetched") };
        let rows = analyze_batch(&[""], &fetcher, &Options::default());
        assert!(rows[0].is_error());
        assert!(rows[0].status().starts_with("Error: invalid URL"));
    }

    #[test]
    fn empty_batch_is_empty() {
        let urls: [&str; 0] = [];
        assert!(analyze_batch(&urls, &ok_fetcher, &Options::default()).is_empty());
    }
}
