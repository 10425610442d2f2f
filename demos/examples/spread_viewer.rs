// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll through a document laid out as two-page spreads.
//!
//! This example shows how a viewer host would:
//! - keep its own page type and implement `PageView` for it,
//! - validate measured geometry once after layout,
//! - query the visible range at each scroll position, with a prefetch threshold,
//! - use `first`/`last` for the page indicator and the sorted list for render priority.
//!
//! Run:
//! - `RUST_LOG=understory_visible_pages=trace cargo run -p understory_demos --example spread_viewer`

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_visible_pages::{
    PageBox, PageView, ScrollState, VisibilityOptions, compute_visible_range,
};

/// A page as the viewer knows it: a page number plus its laid-out box.
#[derive(Debug)]
struct ViewerPage {
    number: u32,
    layout: PageBox,
}

impl PageView for ViewerPage {
    type Id = u32;

    fn id(&self) -> u32 {
        self.number
    }

    fn page_box(&self) -> PageBox {
        self.layout
    }
}

fn layout_spreads(count: u32) -> Vec<ViewerPage> {
    const W: f64 = 400.0;
    const GAP: f64 = 12.0;
    let mut pages = Vec::new();
    let mut top = 0.0;
    for first in (1..=count).step_by(2) {
        // Page 5 is a landscape insert, shorter than its neighbour.
        let height = |n: u32| if n == 5 { 300.0 } else { 520.0 };
        let row: Vec<u32> = (first..=count.min(first + 1)).collect();
        let row_h = row.iter().map(|&n| height(n)).fold(0.0, f64::max);
        for (col, &n) in row.iter().enumerate() {
            let left = if col == 0 { 0.0 } else { W + GAP };
            pages.push(ViewerPage {
                number: n,
                layout: PageBox::new(left, top, W, height(n)).with_border(1.0, 1.0),
            });
        }
        top += row_h + GAP;
    }
    pages
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pages = layout_spreads(12);
    for page in &pages {
        if let Err(err) = page.layout.validate() {
            eprintln!("page {}: {err}", page.number);
            return;
        }
    }

    let container = Size::new(830.0, 640.0);
    let options = VisibilityOptions::default()
        .with_sort_by_visibility(true)
        .with_threshold(40.0);

    for y in [0.0, 300.0, 1_100.0, 1_250.0, 2_400.0] {
        let scroll = ScrollState::new(0.0, y, 1.0);
        let range = compute_visible_range(container, scroll, &pages, &options);
        let first = range.first.map(|e| e.id);
        let last = range.last.map(|e| e.id);
        let priority: Vec<String> = range
            .iter()
            .map(|e| format!("{}({}%)", e.id, e.percent))
            .collect();
        println!(
            "scroll y={y:>6}: pages {first:?}..={last:?}, render order {}",
            priority.join(" ")
        );
    }
}
