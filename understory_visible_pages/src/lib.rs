// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_visible_pages --heading-base-level=0

//! Understory Visible Pages: which pages of a scrolled document are on screen.
//!
//! This crate answers the question a continuous-scroll document viewer asks on every
//! frame: given the container size, the scroll offsets and zoom, and the ordered list
//! of page boxes, which pages intersect the viewport, how much of each is visible,
//! and which are the first and last visible pages.
//!
//! It does so without inspecting every page. A binary search finds a starting page,
//! a short backward scan corrects that start for layouts with several pages per row
//! (spreads or wrapped pages, where visibility along the scroll axis is not
//! monotonic), and a forward scan stops as soon as no later page can be visible.
//!
//! The core pieces are:
//!
//! - [`PageBox`]: measured geometry of a page (position, border, padding-box size).
//! - [`PageView`]: a trait for the host's page type, exposing an id and a [`PageBox`].
//!   [`Page`] is a ready-made implementation.
//! - [`ScrollState`] and [`VisibilityOptions`]: the scroll position, zoom, scroll axis,
//!   prefetch threshold, and whether to sort the result by visibility.
//! - [`compute_visible_range`]: the query itself, returning a [`VisibleRange`] of
//!   [`VisibleEntry`] values.
//! - [`binary_search_first_index`] and [`backtrack_before_visible_row`]: the two
//!   building blocks, exposed for hosts with their own scan loops.
//!
//! This crate deliberately does **not** render, lay out, or listen for scroll events.
//! Host frameworks are responsible for:
//!
//! - Measuring pages and keeping their [`PageBox`] values current.
//! - Coalescing scroll and resize events so that [`compute_visible_range`] runs at
//!   most once per rendering frame. A single pending-request flag works well:
//!   schedule a frame callback only if none is pending, clear the flag when it fires.
//! - Acting on the returned [`VisibleRange`] (rendering, prefetching, updating the
//!   current page indicator).
//!
//! Every call is a pure function of its inputs; nothing is cached between calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_visible_pages::{
//!     Page, PageBox, ScrollState, VisibilityOptions, compute_visible_range,
//! };
//!
//! // A two-page spread layout: pages 0/1 share a row, then 2/3, and so on.
//! let pages: Vec<_> = (0..8_u32)
//!     .map(|i| {
//!         let row = f64::from(i / 2);
//!         let col = f64::from(i % 2);
//!         Page::new(i, PageBox::new(col * 410.0, row * 510.0, 400.0, 500.0))
//!     })
//!     .collect();
//!
//! let options = VisibilityOptions::default().with_sort_by_visibility(true);
//! let range = compute_visible_range(
//!     Size::new(820.0, 600.0),
//!     ScrollState::new(0.0, 900.0, 1.0),
//!     &pages,
//!     &options,
//! );
//!
//! // Rows 1 and 2 are visible; `first`/`last` stay in document order.
//! assert_eq!(range.first.map(|e| e.id), Some(2));
//! assert_eq!(range.last.map(|e| e.id), Some(5));
//! // Sorted by visibility: row 2 (96% visible) before row 1 (22% visible).
//! assert_eq!(range.ids().collect::<Vec<_>>(), [4, 5, 2, 3]);
//! ```
//!
//! All coordinates are unscaled content pixels and are expected to be finite; page
//! sizes are expected to be non-negative. [`PageBox::validate`] and
//! [`ScrollState::try_new`] report violations as [`GeometryError`]. The query itself
//! never fails: unsupported scroll states produce an empty range, and pages with no
//! area report `0` percent.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for the input and option types.
//! - `tracing`: emits `debug`/`trace`/`warn` events under the
//!   `understory_visible_pages` target.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod backtrack;
mod error;
mod page;
mod search;
mod visible;

pub use backtrack::backtrack_before_visible_row;
pub use error::GeometryError;
pub use page::{Page, PageBox, PageView, ScrollState};
pub use search::binary_search_first_index;
pub use visible::{
    ScrollAxis, VISIBILITY_EPSILON, VisibilityOptions, VisibleEntry, VisibleRange,
    compare_visibility, compute_visible_range, viewport_rect,
};
