//! Benchmarks for mdreport rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic markdown covering every line kind.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdreport::{classify_document, render_markdown, ReportOptions};

/// Creates a synthetic markdown document with the given number of sections.
fn create_test_markdown(sections: usize) -> String {
    let mut content = String::from("# REQUIREMENT SPECIFICATION DOCUMENT\n\n");

    for i in 0..sections {
        content.push_str(&format!("## Section {}\n\n", i + 1));
        content.push_str(&format!("### Requirements {}\n", i + 1));
        content.push_str("**Priority: High**\n");
        content.push_str(
            "The system shall record every transaction with its date, amount and \
             category, and shall make the [full history](https://example.com/history) \
             available for *review* at any time without **loss** of precision.\n",
        );
        content.push_str("| ID | Name | Status |\n|----|------|--------|\n| 1 | Login | Done |\n");
        content.push_str("- Import statements\n* Export reports\n1. First step\n2. Second step\n");
        content.push_str("```\ncode line\n```\n---\n");
    }

    content
}

fn bench_classify(c: &mut Criterion) {
    let markdown = create_test_markdown(50);
    let options = ReportOptions::default();

    c.bench_function("classify_50_sections", |b| {
        b.iter(|| classify_document(black_box(&markdown), &options))
    });
}

fn bench_render(c: &mut Criterion) {
    let options = ReportOptions::default();
    let mut group = c.benchmark_group("render");

    for sections in [1, 10, 50] {
        let markdown = create_test_markdown(sections);
        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| render_markdown(black_box(&markdown), &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_render);
criterion_main!(benches);
