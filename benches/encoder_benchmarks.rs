//! Criterion benchmarks for the phonetic encoders.
//!
//! This benchmark suite profiles the encoders over a realistic mix of
//! surnames, measuring:
//! - Double Metaphone throughput at the default and wider code sizes
//! - Refined Soundex and NYSIIS throughput
//! - Per-word latency across word lengths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libmetaphone::prelude::*;

// ============================================================================
// Benchmark Fixtures
// ============================================================================

fn sample_words() -> Vec<&'static str> {
    vec![
        "smith",
        "schmidt",
        "Jankelowicz",
        "Yankelovich",
        "orchestra",
        "McLaughlin",
        "Wasserman",
        "filipowicz",
        "Giethoorn",
        "schermerhorn",
        "Thorne",
        "jose",
        "Xavier",
        "ghiradelli",
        "Schuylkill",
        "whirlpool",
        "braço",
        "von Neumann",
    ]
}

// ============================================================================
// Encoder Throughput Benchmarks
// ============================================================================

fn bench_double_metaphone(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_metaphone");
    let words = sample_words();
    group.throughput(Throughput::Elements(words.len() as u64));

    for code_size in [4usize, 8] {
        let encoder = DoubleMetaphone::with_code_size(code_size).unwrap();
        group.bench_function(BenchmarkId::new("code_size", code_size), |b| {
            b.iter(|| {
                for word in &words {
                    black_box(encoder.double_metaphone(black_box(word)));
                }
            });
        });
    }

    group.finish();
}

fn bench_refined_soundex(c: &mut Criterion) {
    let mut group = c.benchmark_group("refined_soundex");
    let words = sample_words();
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| {
            for word in &words {
                black_box(RefinedSoundex.refined_soundex(black_box(word)));
            }
        });
    });

    group.finish();
}

fn bench_nysiis(c: &mut Criterion) {
    let mut group = c.benchmark_group("nysiis");
    let words = sample_words();
    group.throughput(Throughput::Elements(words.len() as u64));

    for trim in [true, false] {
        let encoder = Nysiis::with_trim(trim);
        group.bench_function(BenchmarkId::new("trim", trim), |b| {
            b.iter(|| {
                for word in &words {
                    black_box(encoder.nysiis(black_box(word)));
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Latency by Word Length
// ============================================================================

fn bench_by_word_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_length");
    let encoder = DoubleMetaphone::new();

    for word in ["raj", "schmidt", "schermerhorn", "supercalifragilistic"] {
        group.bench_function(BenchmarkId::new("double_metaphone", word.len()), |b| {
            b.iter(|| black_box(encoder.double_metaphone(black_box(word))));
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_double_metaphone,
    bench_refined_soundex,
    bench_nysiis,
    bench_by_word_length,
);

criterion_main!(benches);
