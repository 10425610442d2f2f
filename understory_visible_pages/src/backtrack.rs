// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Correction for non-monotonic visibility in row (spread) layouts.
//!
//! [`binary_search_first_index`](crate::binary_search_first_index) assumes the
//! "bottom is below the viewport top" predicate flips from `false` to `true`
//! exactly once. With spreads or wrapped layouts a row can mix pages whose bottoms
//! are above the viewport top with pages whose bottoms are below it, so the search
//! may land on any visible page that follows a hidden one:
//!
//! ```text
//!     ****  fully hidden row
//!     A*B*  mix of partially visible and hidden pages
//!     CDEF  fully visible row
//! ```
//!
//! The search can return `A` (already correct), `B` (the row must be rescanned),
//! or `C` (the previous row must be rescanned). If the first visible row is
//! `ABCD` with every page at least partially visible, it can only return `A`.
//! [`backtrack_before_visible_row`] walks back far enough to cover all of these.

use crate::PageView;

/// Moves `index` back to the first page of the row that may contain visible pages.
///
/// `index` is the result of binary searching `views` for the first page whose
/// bottom is below `top`, and `top` is the viewport top in content coordinates.
///
/// Returns `index` unchanged when it is `< 2` or `>= views.len()`. In single-column
/// layouts the backward scan stops on its first step and `index` is unchanged too.
#[must_use]
pub fn backtrack_before_visible_row<V: PageView>(index: usize, views: &[V], top: f64) -> usize {
    if index < 2 || index >= views.len() {
        return index;
    }

    // Assume we are looking for the start of the found page's row. If the found
    // page is fully below `top` we may instead be at the start of the next row,
    // and telling the two apart would need a scan of the previous row anyway, so
    // use the previous page's top as the row reference.
    let mut page_top = views[index].page_box().top();
    if page_top >= top {
        page_top = views[index - 1].page_box().top();
    }

    // `views[index - 1]` is hidden by construction of the search result, so start
    // at `index - 2`. Row sizes are small, so this terminates quickly.
    let mut first = index;
    for i in (0..index - 1).rev() {
        if views[i].page_box().bottom() <= page_top {
            break;
        }
        first = i;
    }

    if first != index {
        vtrace!(from = index, to = first, top, "backtracked to row start");
    }
    first
}
