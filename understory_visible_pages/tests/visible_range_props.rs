// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests comparing the visible range query against a brute-force scan.
//!
//! Verifies:
//! 1. Single column: output equals the document-order subsequence of pages that
//!    intersect the viewport, with no omissions and no duplicates.
//! 2. Two-page spreads with uneven heights: same as 1, despite the non-monotonic
//!    search predicate.
//! 3. Horizontal strip: same as 1 along the x axis.
//! 4. `first`/`last` bracket the unsorted output, and sorting only reorders it.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_visible_pages::{
    Page, PageBox, PageView, ScrollAxis, ScrollState, VisibilityOptions, compute_visible_range,
    viewport_rect,
};

fn brute_force(pages: &[Page<u32>], viewport: Rect) -> Vec<u32> {
    pages
        .iter()
        .filter(|p| {
            let b = p.page_box();
            !(b.bottom() <= viewport.y0
                || b.top() >= viewport.y1
                || b.right() <= viewport.x0
                || b.left() >= viewport.x1)
        })
        .map(|p| p.id)
        .collect()
}

fn column(heights: &[f64], gap: f64) -> Vec<Page<u32>> {
    let mut top = 0.0;
    let mut pages = Vec::with_capacity(heights.len());
    for (id, &h) in (0_u32..).zip(heights) {
        pages.push(Page::new(id, PageBox::new(0.0, top, 600.0, h)));
        top += h + gap;
    }
    pages
}

fn spreads(rows: &[(f64, f64)], gap: f64) -> Vec<Page<u32>> {
    let mut top = 0.0;
    let mut pages = Vec::with_capacity(rows.len() * 2);
    for (row, &(left_h, right_h)) in (0_u32..).zip(rows) {
        let id = row * 2;
        pages.push(Page::new(id, PageBox::new(0.0, top, 300.0, left_h)));
        pages.push(Page::new(id + 1, PageBox::new(310.0, top, 300.0, right_h)));
        top += left_h.max(right_h) + gap;
    }
    pages
}

fn strip(widths: &[f64], gap: f64) -> Vec<Page<u32>> {
    let mut left = 0.0;
    let mut pages = Vec::with_capacity(widths.len());
    for (id, &w) in (0_u32..).zip(widths) {
        pages.push(Page::new(id, PageBox::new(left, 0.0, w, 800.0)));
        left += w + gap;
    }
    pages
}

fn arb_scroll() -> impl Strategy<Value = ScrollState> {
    (-20_000.0..20_000.0_f64, -20_000.0..20_000.0_f64, 0.25..4.0_f64)
        .prop_map(|(x, y, scale)| ScrollState::new(x, y, scale))
}

fn arb_container() -> impl Strategy<Value = Size> {
    (1.0..2_000.0_f64, 1.0..2_000.0_f64).prop_map(|(w, h)| Size::new(w, h))
}

fn check_against_brute_force(
    pages: &[Page<u32>],
    container: Size,
    scroll: ScrollState,
    options: VisibilityOptions,
) -> Result<(), TestCaseError> {
    let viewport = viewport_rect(container, scroll, &options);
    let expected = brute_force(pages, viewport);

    let range = compute_visible_range(container, scroll, pages, &options);
    let got: Vec<u32> = range.ids().collect();
    prop_assert_eq!(&got, &expected);
    prop_assert_eq!(range.first.map(|e| e.id), expected.first().copied());
    prop_assert_eq!(range.last.map(|e| e.id), expected.last().copied());
    for entry in range.iter() {
        prop_assert!(entry.percent <= 100);
    }

    let sorted = compute_visible_range(
        container,
        scroll,
        pages,
        &options.with_sort_by_visibility(true),
    );
    let mut sorted_ids: Vec<u32> = sorted.ids().collect();
    for pair in sorted.views.windows(2) {
        prop_assert!(
            pair[0].percent > pair[1].percent
                || (pair[0].percent == pair[1].percent && pair[0].id < pair[1].id)
        );
    }
    sorted_ids.sort_unstable();
    prop_assert_eq!(sorted_ids, expected);
    prop_assert_eq!(sorted.first.map(|e| e.id), range.first.map(|e| e.id));
    prop_assert_eq!(sorted.last.map(|e| e.id), range.last.map(|e| e.id));
    Ok(())
}

proptest! {
    #[test]
    fn single_column_matches_brute_force(
        heights in prop::collection::vec(1.0..1_500.0_f64, 0..200),
        gap in 0.0..40.0_f64,
        container in arb_container(),
        scroll in arb_scroll(),
        threshold in 0.0..300.0_f64,
    ) {
        let pages = column(&heights, gap);
        let options = VisibilityOptions::default().with_threshold(threshold);
        check_against_brute_force(&pages, container, scroll, options)?;
    }

    #[test]
    fn uneven_spreads_match_brute_force(
        rows in prop::collection::vec((1.0..1_000.0_f64, 1.0..1_000.0_f64), 0..100),
        gap in 0.0..40.0_f64,
        container in arb_container(),
        scroll in arb_scroll(),
        threshold in 0.0..300.0_f64,
    ) {
        let pages = spreads(&rows, gap);
        let options = VisibilityOptions::default().with_threshold(threshold);
        check_against_brute_force(&pages, container, scroll, options)?;
    }

    #[test]
    fn horizontal_strip_matches_brute_force(
        widths in prop::collection::vec(1.0..1_500.0_f64, 0..200),
        gap in 0.0..40.0_f64,
        container in arb_container(),
        scroll in arb_scroll(),
        threshold in 0.0..300.0_f64,
    ) {
        let pages = strip(&widths, gap);
        let options = VisibilityOptions::default()
            .with_axis(ScrollAxis::Horizontal)
            .with_threshold(threshold);
        check_against_brute_force(&pages, container, scroll, options)?;
    }
}
