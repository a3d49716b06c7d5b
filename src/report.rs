//! Markdown report rendering.
//!
//! Reports are GitHub Flavored Markdown: a heading per section, GFM tables
//! for elements, scores and keywords, and bullet lists for the keyword
//! comparison. Cell text is escaped so page content cannot break the layout.

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::result::{BatchEntry, CompetitorAnalysis, KeywordProfile, PageAnalysis, PageReport, Suggestion};

/// Characters that have special meaning in Markdown and need escaping.
const MARKDOWN_SPECIAL_CHARS: &[char] = &['\\', '*', '_', '[', ']', '<', '>', '|', '`'];

/// Escape Markdown special characters in text content.
///
/// # Examples
///
/// ```
/// use seo_agent::report::escape_markdown;
///
/// assert_eq!(escape_markdown("*not italic*"), r"\*not italic\*");
/// assert_eq!(escape_markdown("a | b"), r"a \| b");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&ch) {
            result.push('\\');
        }
        // Newlines would end a table row
        if ch == '\n' || ch == '\r' {
            result.push(' ');
            continue;
        }
        result.push(ch);
    }

    result
}

/// Render a competitor analysis report stamped with the current time.
#[must_use]
pub fn render_markdown(analysis: &CompetitorAnalysis, suggestion: Option<&Suggestion>) -> String {
    render_markdown_at(analysis, suggestion, Utc::now())
}

/// Render a competitor analysis report stamped with `generated_at`.
#[must_use]
pub fn render_markdown_at(
    analysis: &CompetitorAnalysis,
    suggestion: Option<&Suggestion>,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# SEO Competitor Report\n");
    let _ = writeln!(out, "_Generated {}_\n", generated_at.format("%Y-%m-%d %H:%M UTC"));

    let _ = writeln!(out, "## On-Page Elements\n");
    write_elements_table(&mut out, &analysis.own, &analysis.competitor);

    let _ = writeln!(out, "## Scores\n");
    let _ = writeln!(out, "| Metric | Score |");
    let _ = writeln!(out, "|---|---:|");
    for (label, score) in analysis.scores.metrics() {
        let _ = writeln!(out, "| {label} | {score} |");
    }
    out.push('\n');

    let _ = writeln!(out, "## Top Keywords\n");
    let _ = writeln!(out, "### Your Page\n");
    write_keyword_table(&mut out, &analysis.own.keywords);
    let _ = writeln!(out, "### Competitor\n");
    write_keyword_table(&mut out, &analysis.competitor.keywords);

    let _ = writeln!(out, "## Keyword Comparison\n");
    write_keyword_list(&mut out, "Shared", &analysis.comparison.shared);
    write_keyword_list(&mut out, "Only on your page", &analysis.comparison.unique_to_self);
    write_keyword_list(&mut out, "Only on competitor", &analysis.comparison.unique_to_competitor);

    if let Some(suggestion) = suggestion {
        let _ = writeln!(out, "## Suggestions\n");
        let _ = writeln!(out, "- **Title:** {}", escape_markdown(&suggestion.title));
        let _ = writeln!(out, "- **Meta description:** {}", escape_markdown(&suggestion.meta));
        let _ = writeln!(out, "- **H1:** {}", escape_markdown(&suggestion.h1));
    }

    out
}

/// Render a batch run as one table row per URL.
#[must_use]
pub fn render_batch_markdown(entries: &[BatchEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# SEO Batch Report\n");
    if entries.is_empty() {
        let _ = writeln!(out, "_No URLs analyzed._");
        return out;
    }

    let _ = writeln!(
        out,
        "| URL | Status | Title | Title Length | Title OK | Meta Length | Meta OK | H1 | Has H1 |"
    );
    let _ = writeln!(out, "|---|---|---|---:|---|---:|---|---|---|");

    for entry in entries {
        match entry {
            BatchEntry::Analyzed(report) => {
                let eval = &report.evaluation;
                let _ = writeln!(
                    out,
                    "| {} | OK | {} | {} | {} | {} | {} | {} | {} |",
                    escape_markdown(&report.url),
                    escape_markdown(&report.elements.title),
                    eval.title_length,
                    PageReport::flag(eval.title_ok),
                    eval.meta_length,
                    PageReport::flag(eval.meta_ok),
                    escape_markdown(&report.elements.h1),
                    PageReport::flag(eval.has_h1),
                );
            }
            BatchEntry::Failed { url, status } => {
                let _ = writeln!(
                    out,
                    "| {} | {} |  |  |  |  |  |  |  |",
                    escape_markdown(url),
                    escape_markdown(status)
                );
            }
        }
    }

    out
}

fn write_elements_table(out: &mut String, own: &PageAnalysis, competitor: &PageAnalysis) {
    let _ = writeln!(out, "| Element | Your Page | Competitor |");
    let _ = writeln!(out, "|---|---|---|");
    let rows = [
        ("Title", &own.elements.title, &competitor.elements.title),
        ("Meta description", &own.elements.meta_description, &competitor.elements.meta_description),
        ("H1", &own.elements.h1, &competitor.elements.h1),
    ];
    for (label, mine, theirs) in rows {
        let _ = writeln!(out, "| {label} | {} | {} |", escape_markdown(mine), escape_markdown(theirs));
    }
    let _ = writeln!(
        out,
        "| Title length | {} {} | {} {} |",
        own.evaluation.title_length,
        PageReport::flag(own.evaluation.title_ok),
        competitor.evaluation.title_length,
        PageReport::flag(competitor.evaluation.title_ok),
    );
    let _ = writeln!(
        out,
        "| Meta length | {} {} | {} {} |",
        own.evaluation.meta_length,
        PageReport::flag(own.evaluation.meta_ok),
        competitor.evaluation.meta_length,
        PageReport::flag(competitor.evaluation.meta_ok),
    );
    out.push('\n');
}

fn write_keyword_table(out: &mut String, profile: &KeywordProfile) {
    if profile.is_empty() {
        let _ = writeln!(out, "_No keywords found._\n");
        return;
    }
    let _ = writeln!(out, "| Keyword | Count |");
    let _ = writeln!(out, "|---|---:|");
    for entry in profile.entries() {
        let _ = writeln!(out, "| {} | {} |", entry.keyword, entry.count);
    }
    out.push('\n');
}

fn write_keyword_list(out: &mut String, label: &str, words: &BTreeSet<String>) {
    if words.is_empty() {
        let _ = writeln!(out, "- **{label}:** none");
    } else {
        let joined: Vec<&str> = words.iter().map(String::as_str).collect();
        let _ = writeln!(out, "- **{label}:** {}", joined.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_competitor;
    use crate::options::Options;
    use chrono::TimeZone;

    const OWN: &str = "<title>Own *Page*</title><h1>Welcome</h1><p>seo tools</p>";
    const OTHER: &str = "<title>Rival</title><p>seo audit</p>";

    #[test]
    fn escape_replaces_newlines() {
        assert_eq!(escape_markdown("a\nb"), "a b");
    }

    #[test]
    fn report_contains_sections() {
        let analysis = analyze_competitor(OWN, OTHER, &Options::default());
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
            .single()
            .expect("valid timestamp");
        let md = render_markdown_at(&analysis, None, at);

        assert!(md.starts_with("# SEO Competitor Report"));
        assert!(md.contains("_Generated 2024-05-01 12:30 UTC_"));
        assert!(md.contains(r"| Title | Own \*Page\* | Rival |"));
        assert!(md.contains("| H1 Presence | 100 |"));
        assert!(md.contains("- **Shared:** seo, title"));
        assert!(md.contains("- **Only on competitor:** audit, rival"));
        assert!(!md.contains("## Suggestions"));
    }

    #[test]
    fn report_includes_suggestions_when_given() {
        let analysis = analyze_competitor(OWN, OTHER, &Options::default());
        let suggestion = Suggestion {
            title: "New".to_string(),
            meta: "Meta".to_string(),
            h1: "Head".to_string(),
        };
        let md = render_markdown(&analysis, Some(&suggestion));
        assert!(md.contains("## Suggestions"));
        assert!(md.contains("- **Title:** New"));
    }

    #[test]
    fn batch_report_rows() {
        let entries = vec![BatchEntry::Failed {
            url: "https://down.test".to_string(),
            status: "Error 503".to_string(),
        }];
        let md = render_batch_markdown(&entries);
        assert!(md.contains("| https://down.test | Error 503 |"));
        assert!(render_batch_markdown(&[]).contains("_No URLs analyzed._"));
    }
}
