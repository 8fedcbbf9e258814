//! Benchmarks for dataset generation, sorting and window computation.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tablebench::layout::{compute_window, WindowParams};
use tablebench::sort::{sort_indices, SortDirection, SortState};
use tablebench::{generate_seeded, BenchConfig, BenchTable, RenderStrategy};

/// (rows, columns) pairs spanning the benchmarked table sizes
const SIZES: [(usize, usize); 4] = [(100, 10), (1_000, 10), (10_000, 10), (10_000, 100)];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &(rows, cols) in &SIZES {
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(rows, cols),
            |b, &(rows, cols)| b.iter(|| generate_seeded(black_box(rows), black_box(cols), 7)),
        );
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &(rows, cols) in &SIZES {
        let dataset = generate_seeded(rows, cols, 7);
        group.throughput(Throughput::Elements(rows as u64));
        // Column 1 is text, Column 2 integers compared as strings
        for column in ["Column 1", "Column 2"] {
            let state = SortState::new(column, SortDirection::Ascending);
            group.bench_with_input(
                BenchmarkId::new(column, format!("{rows}x{cols}")),
                &state,
                |b, state| b.iter(|| sort_indices(black_box(&dataset), state)),
            );
        }
    }
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let params = WindowParams {
        total_rows: 10_000,
        row_height_estimate: 40.0,
        header_height: 48.0,
        viewport_height: 600.0,
        scroll_offset: 0.0,
        overscan: 10,
    };
    c.bench_function("window_scroll_sweep", |b| {
        b.iter(|| {
            let mut p = params.clone();
            for step in 0..1_000 {
                p.scroll_offset = f64::from(step) * 400.0;
                black_box(compute_window(&p));
            }
        })
    });
}

fn bench_virtualized_scroll(c: &mut Criterion) {
    let mut table = BenchTable::new(
        BenchConfig::with_counts(10_000, 20),
        RenderStrategy::Virtualized,
        Some(7),
    )
    .expect("valid config");
    c.bench_function("virtualized_scroll_visible_rows", |b| {
        let mut offset = 0.0;
        b.iter(|| {
            offset = (offset + 123.0) % 390_000.0;
            table.scroll_to(offset);
            black_box(table.visible_rows().len())
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_sort,
    bench_window,
    bench_virtualized_scroll
);
criterion_main!(benches);
