//! Single-page and competitor analysis pipelines.
//!
//! Keyword profiles are built from the raw HTML source, not the visible text,
//! so markup and script content contribute keywords.

use log::debug;

use crate::compare::compare_keywords;
use crate::error::{Error, Result};
use crate::evaluate::evaluate_with_ranges;
use crate::extract::extract_elements;
use crate::fetch::{FetchedPage, PageFetcher};
use crate::keywords::profile_keywords;
use crate::options::Options;
use crate::result::{CompetitorAnalysis, PageAnalysis};
use crate::scoring::score_with_options;
use crate::url_utils::normalize_url;

/// A fetched page together with its analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlAnalysis {
    pub page: FetchedPage,
    pub analysis: PageAnalysis,
}

/// Extract, evaluate and profile one HTML document.
#[must_use]
pub fn analyze_html(html: &str, options: &Options) -> PageAnalysis {
    let elements = extract_elements(html);
    let evaluation = evaluate_with_ranges(&elements, &options.title_range, &options.meta_range);
    let keywords = profile_keywords(html, options.top_n);

    PageAnalysis {
        elements,
        evaluation,
        keywords,
    }
}

/// Score and compare a page against a competitor page.
#[must_use]
pub fn analyze_competitor(own_html: &str, competitor_html: &str, options: &Options) -> CompetitorAnalysis {
    let own = analyze_html(own_html, options);
    let competitor = analyze_html(competitor_html, options);
    let scores = score_with_options(&own.elements, &own.keywords, &competitor.keywords, options);
    let comparison = compare_keywords(&own.keywords, &competitor.keywords);

    CompetitorAnalysis {
        own,
        competitor,
        scores,
        comparison,
    }
}

/// Fetch and analyze a single URL.
///
/// Unlike the batch runner, a fetch failure or non-success status is an
/// error for this request.
pub fn analyze_url(url: &str, fetcher: &dyn PageFetcher, options: &Options) -> Result<UrlAnalysis> {
    let page = fetch_checked(url, fetcher)?;
    let analysis = analyze_html(&page.text, options);
    Ok(UrlAnalysis { page, analysis })
}

/// Fetch both pages and run the competitor analysis.
pub fn analyze_competitor_urls(
    own_url: &str,
    competitor_url: &str,
    fetcher: &dyn PageFetcher,
    options: &Options,
) -> Result<CompetitorAnalysis> {
    let own = fetch_checked(own_url, fetcher)?;
    let competitor = fetch_checked(competitor_url, fetcher)?;
    Ok(analyze_competitor(&own.text, &competitor.text, options))
}

fn fetch_checked(url: &str, fetcher: &dyn PageFetcher) -> Result<FetchedPage> {
    let url = normalize_url(url);
    if url.is_empty() {
        return Err(Error::InvalidUrl(url));
    }

    debug!("fetching {url}");
    let page = fetcher.fetch(&url)?;
    if !page.ok {
        return Err(Error::HttpStatus {
            url,
            status: page.status_code,
        });
    }
    Ok(page)
}
