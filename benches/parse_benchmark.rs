//! Benchmarks for resumex parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic resumes with a growing number of jobs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resumex::{ParseOptions, TextItem};

/// Creates a synthetic one-column resume with the given number of jobs.
fn create_test_resume(job_count: usize) -> Vec<TextItem> {
    let item = |text: &str, x: f32, y: f32| {
        TextItem::new(text, x, y).with_size(text.len() as f32 * 5.0, 10.0)
    };
    let mut y = 760.0;
    let mut items = vec![
        item("Jane Doe", 40.0, y).with_font("Arial-Bold"),
        item("jane.doe@example.com", 40.0, y - 14.0),
        item("(512) 555-0147", 250.0, y - 14.0),
        item("EDUCATION", 40.0, y - 42.0).with_font("Arial-Bold"),
        item("State University", 40.0, y - 56.0).with_font("Arial-Bold"),
        item("Bachelor of Science, GPA 3.8", 40.0, y - 70.0),
        item("WORK EXPERIENCE", 40.0, y - 98.0).with_font("Arial-Bold"),
    ];
    y -= 112.0;

    for i in 0..job_count {
        let page = (i / 10) as u32;
        let top = y - (i % 10) as f32 * 70.0;
        items.push(
            item(&format!("Company {}", i), 40.0, top)
                .with_font("Arial-Bold")
                .on_page(page),
        );
        items.push(item("June 2019 - Present", 450.0, top).on_page(page));
        items.push(item("Software Engineer", 40.0, top - 14.0).on_page(page));
        items.push(item("• Built distributed systems in Rust", 40.0, top - 28.0).on_page(page));
        items.push(item("• Reduced query latency by 40%", 40.0, top - 42.0).on_page(page));
    }

    items
}

/// Benchmark full pipeline at various sizes.
fn bench_resume_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("resume_parsing");

    for job_count in [1, 10, 50].iter() {
        let items = create_test_resume(*job_count);

        group.bench_function(format!("{}_jobs", job_count), |b| {
            b.iter(|| resumex::parse_text_items(black_box(&items)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the layout half of the pipeline alone.
fn bench_section_grouping(c: &mut Criterion) {
    let items = create_test_resume(10);
    let options = ParseOptions::default();

    c.bench_function("section_grouping", |b| {
        b.iter(|| resumex::parse_sections(black_box(&items), &options).unwrap());
    });
}

/// Benchmark batch parsing, parallel against sequential.
fn bench_batch(c: &mut Criterion) {
    let documents: Vec<Vec<TextItem>> = (0..32).map(|i| create_test_resume(i % 8 + 1)).collect();
    let mut group = c.benchmark_group("batch");

    group.bench_function("parallel", |b| {
        b.iter(|| resumex::parse_batch(black_box(&documents), &ParseOptions::default()));
    });
    group.bench_function("sequential", |b| {
        let options = ParseOptions::default().sequential();
        b.iter(|| resumex::parse_batch(black_box(&documents), &options));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resume_parsing,
    bench_section_grouping,
    bench_batch,
);
criterion_main!(benches);
