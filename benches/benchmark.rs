//! Performance benchmarks for seo-agent.
//!
//! Run with: `cargo bench`
//!
//! Covers the pure pipeline stages on a small synthetic page and on
//! generated pages of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seo_agent::keywords::profile_keywords;
use seo_agent::scoring::score_page;
use seo_agent::{analyze_competitor, compare_keywords, extract_elements, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Product Page for Benchmarking</title>
    <meta name="description" content="A sample product page used to benchmark element extraction, keyword profiling and scoring.">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/shop">Shop</a>
    </nav>
    <main>
        <h1>Sample Product</h1>
        <p>This product page contains enough text to make keyword profiling
        meaningful. Product details, product pricing and product reviews.</p>
        <p>Shipping is free for orders over fifty dollars. Returns are free.</p>
    </main>
    <footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

const COMPETITOR_HTML: &str = r#"
<html><head><title>Competitor Product</title></head>
<body><h1>Product</h1><p>Product reviews, product pricing, fast shipping.</p></body></html>
"#;

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_elements", |b| {
        b.iter(|| extract_elements(black_box(SAMPLE_HTML)));
    });
}

fn bench_profile(c: &mut Criterion) {
    c.bench_function("profile_keywords", |b| {
        b.iter(|| profile_keywords(black_box(SAMPLE_HTML), black_box(10)));
    });
}

fn bench_score_and_compare(c: &mut Criterion) {
    let elements = extract_elements(SAMPLE_HTML);
    let own = profile_keywords(SAMPLE_HTML, 10);
    let other = profile_keywords(COMPETITOR_HTML, 10);

    c.bench_function("score_page", |b| {
        b.iter(|| score_page(black_box(&elements), black_box(&own), black_box(&other)));
    });
    c.bench_function("compare_keywords", |b| {
        b.iter(|| compare_keywords(black_box(&own), black_box(&other)));
    });
}

/// Full competitor pipeline on pages of growing size
fn bench_competitor_scaling(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("competitor");

    for paragraphs in [10_usize, 100, 1000] {
        let body: String = (0..paragraphs)
            .map(|i| format!("<p>Paragraph {i} about product pricing, shipping and reviews.</p>"))
            .collect();
        let html = format!("<html><head><title>Scaling</title></head><body>{body}</body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("analyze", paragraphs), &html, |b, html| {
            b.iter(|| analyze_competitor(black_box(html), black_box(COMPETITOR_HTML), &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract,
    bench_profile,
    bench_score_and_compare,
    bench_competitor_scaling
);
criterion_main!(benches);
