// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the visible page query over large documents.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::Size;
use understory_visible_pages::{
    Page, PageBox, ScrollState, VisibilityOptions, compute_visible_range,
};

const PAGE_W: f64 = 612.0;
const PAGE_H: f64 = 792.0;
const GAP: f64 = 10.0;

fn single_column(n: u32) -> Vec<Page<u32>> {
    (0..n)
        .map(|i| {
            Page::new(
                i,
                PageBox::new(0.0, f64::from(i) * (PAGE_H + GAP), PAGE_W, PAGE_H)
                    .with_border(1.0, 1.0),
            )
        })
        .collect()
}

fn spreads(n: u32) -> Vec<Page<u32>> {
    (0..n)
        .map(|i| {
            let row = f64::from(i / 2);
            let col = f64::from(i % 2);
            // Every seventh page is landscape, which breaks row monotonicity.
            let h = if i % 7 == 3 { PAGE_W } else { PAGE_H };
            Page::new(
                i,
                PageBox::new(col * (PAGE_W + GAP), row * (PAGE_H + GAP), PAGE_W, h),
            )
        })
        .collect()
}

fn bench_visible_range(c: &mut Criterion) {
    let container = Size::new(1280.0, 900.0);
    let mut group = c.benchmark_group("compute_visible_range");

    for &n in &[100_u32, 10_000, 1_000_000] {
        let column = single_column(n);
        let middle = f64::from(n / 2) * (PAGE_H + GAP) + 123.0;
        group.bench_with_input(BenchmarkId::new("single_column", n), &column, |b, pages| {
            b.iter(|| {
                let range = compute_visible_range(
                    container,
                    black_box(ScrollState::new(0.0, middle, 1.0)),
                    pages,
                    &VisibilityOptions::default(),
                );
                black_box(range.len())
            });
        });

        let spread = spreads(n);
        let middle = f64::from(n / 4) * (PAGE_H + GAP) + 123.0;
        let sorted = VisibilityOptions::default()
            .with_sort_by_visibility(true)
            .with_threshold(PAGE_H);
        group.bench_with_input(BenchmarkId::new("spreads_sorted", n), &spread, |b, pages| {
            b.iter(|| {
                let range = compute_visible_range(
                    container,
                    black_box(ScrollState::new(0.0, middle, 0.75)),
                    pages,
                    &sorted,
                );
                black_box(range.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible_range);
criterion_main!(benches);
