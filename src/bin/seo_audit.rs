//! Batch SEO audit of URLs given on the command line.
//!
//! Usage: `seo_audit [--markdown] <url>...`
//!
//! Prints a JSON array with one row per URL (or a Markdown table with
//! `--markdown`). Set `RUST_LOG=debug` for per-URL progress.

use std::error::Error;
use std::process::ExitCode;

use seo_agent::report::render_batch_markdown;
use seo_agent::{analyze_batch, HttpFetcher, Options};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();

    let mut markdown = false;
    let mut urls = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--markdown" => markdown = true,
            _ => urls.push(arg),
        }
    }

    if urls.is_empty() {
        eprintln!("usage: seo_audit [--markdown] <url>...");
        return Ok(ExitCode::from(2));
    }

    let options = Options::default();
    let fetcher = HttpFetcher::new(&options)?;
    let rows = analyze_batch(&urls, &fetcher, &options);

    if markdown {
        print!("{}", render_batch_markdown(&rows));
    } else {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }

    Ok(ExitCode::SUCCESS)
}
