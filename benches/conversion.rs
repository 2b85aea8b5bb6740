//! Benchmarks for the import and formatting pipelines.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use folio::latex::{normalize, segment};
use folio::{ChapterIdGenerator, Importer, StyleKind, audit, convert, format_document};

const MEMOIR: &str = include_str!("../tests/fixtures/memoir.tex");
const ESSAY: &str = include_str!("../tests/fixtures/essay.txt");

/// Repeat the fixture body to get a manuscript of realistic length.
fn long_manuscript() -> String {
    (0..50).map(|_| MEMOIR).collect::<Vec<_>>().join("\n")
}

// ============================================================================
// Import Benchmarks
// ============================================================================

fn bench_normalize(c: &mut Criterion) {
    let src = long_manuscript();
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(&src));
    });
}

fn bench_segment(c: &mut Criterion) {
    let src = normalize(&long_manuscript());
    c.bench_function("segment", |b| {
        b.iter(|| segment(&src));
    });
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("convert", |b| {
        b.iter(|| convert(MEMOIR));
    });
}

fn bench_import(c: &mut Criterion) {
    let src = long_manuscript();
    c.bench_function("import", |b| {
        b.iter(|| Importer::with_generator(ChapterIdGenerator::seeded(1)).import(&src));
    });
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_apa", |b| {
        b.iter(|| format_document(ESSAY, StyleKind::Apa));
    });
    c.bench_function("format_mla", |b| {
        b.iter(|| format_document(ESSAY, StyleKind::Mla));
    });
}

fn bench_audit(c: &mut Criterion) {
    c.bench_function("audit", |b| {
        b.iter(|| audit(ESSAY, StyleKind::Apa));
    });
}

criterion_group!(
    benches,
    // Import
    bench_normalize,
    bench_segment,
    bench_convert,
    bench_import,
    // Formatting
    bench_format,
    bench_audit,
);
criterion_main!(benches);
