// ============================================================================
// SigFig Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Literal scanning and figure counting
// 2. Arithmetic - Propagation through operator chains
// 3. Rendering - Half-even rounding and layout
// 4. Aggregates - Mean over growing inputs
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sigfig::engine::{render, render_decimal};
use sigfig::prelude::*;
use std::hint::black_box;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for literal in ["13.32", "0.00230", "1200.", "6.02214076e23"] {
        group.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, literal| {
            b.iter(|| black_box(SigFig::parse(black_box(literal))))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_multiply_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_chain");

    for len in [10usize, 100, 1000] {
        let factors: Vec<SigFig> = (0..len)
            .filter_map(|i| SigFig::new(1.0 + i as f64 * 1e-4, 3 + (i % 4) as u32).ok())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &factors, |b, factors| {
            b.iter(|| {
                let product = factors.iter().skip(1).fold(factors[0], |acc, &f| acc * f);
                black_box(product)
            })
        });
    }

    group.finish();
}

fn benchmark_add_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_chain");

    for len in [10usize, 100, 1000] {
        let terms: Vec<SigFig> = (0..len)
            .map(|i| SigFig::with_decimal_places(i as f64 * 0.37, 1 + (i % 3) as i32))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &terms, |b, terms| {
            b.iter(|| {
                let total = terms.iter().skip(1).fold(terms[0], |acc, &t| acc + t);
                black_box(total)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for sig_figs in [2u32, 6, 15] {
        group.bench_with_input(BenchmarkId::new("figures", sig_figs), &sig_figs, |b, &n| {
            b.iter(|| black_box(render(black_box(120.72128), n)))
        });
    }

    group.bench_function("decimal_places", |b| {
        b.iter(|| black_box(render_decimal(black_box(10.18), 1)))
    });

    let quantity = SigFig::parse("8.08").unwrap() + SigFig::parse("2.1").unwrap();
    group.bench_function("display", |b| b.iter(|| black_box(quantity.to_string())));

    group.finish();
}

// ============================================================================
// Aggregate Benchmarks
// ============================================================================

fn benchmark_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean");

    for len in [3usize, 100, 10_000] {
        let samples: Vec<SigFig> = (0..len)
            .filter_map(|i| SigFig::new(8.0 + (i % 7) as f64 * 0.013, 2 + (i % 5) as u32).ok())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &samples, |b, samples| {
            b.iter(|| black_box(mean(samples)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_multiply_chain,
    benchmark_add_chain,
    benchmark_render,
    benchmark_mean,
);
criterion_main!(benches);
