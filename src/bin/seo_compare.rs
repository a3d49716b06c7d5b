//! Compare a page against a competitor page from local HTML files.
//!
//! Usage: `seo_compare [--suggest] [--json] <own.html> <competitor.html>`
//!
//! With `--suggest`, improvement suggestions are appended; the hosted model
//! is used when `OPENAI_API_KEY` is set, the mock transform otherwise.

use std::error::Error;
use std::fs;
use std::process::ExitCode;

use seo_agent::encoding::decode_body;
use seo_agent::report::render_markdown;
use seo_agent::suggest::suggest;
use seo_agent::{analyze_competitor, Options, SuggesterConfig};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();

    let mut with_suggestions = false;
    let mut json = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--suggest" => with_suggestions = true,
            "--json" => json = true,
            _ => paths.push(arg),
        }
    }

    let [own_path, competitor_path] = paths.as_slice() else {
        eprintln!("usage: seo_compare [--suggest] [--json] <own.html> <competitor.html>");
        return Ok(ExitCode::from(2));
    };

    let read = |path: &str| -> Result<String, Box<dyn Error>> {
        let bytes = fs::read(path).map_err(|e| format!("failed to read {path}: {e}"))?;
        Ok(decode_body(&bytes, None))
    };
    let own_html = read(own_path.as_str())?;
    let competitor_html = read(competitor_path.as_str())?;

    let options = Options {
        suggestion: SuggesterConfig::from_env(),
        ..Options::default()
    };
    let analysis = analyze_competitor(&own_html, &competitor_html, &options);

    let suggestion = with_suggestions.then(|| {
        let elements = &analysis.own.elements;
        suggest(&elements.title, &elements.meta_description, &elements.h1, &options.suggestion)
    });

    if json {
        let output = serde_json::json!({
            "analysis": analysis,
            "suggestions": suggestion,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_markdown(&analysis, suggestion.as_ref()));
    }

    Ok(ExitCode::SUCCESS)
}
