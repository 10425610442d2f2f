// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range computation over an ordered sequence of pages.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::{
    PageBox, PageView, ScrollState, backtrack_before_visible_row, binary_search_first_index,
};

/// Percentages closer than this are considered equal when sorting by visibility.
pub const VISIBILITY_EPSILON: f64 = 0.001;

/// Scroll axis of the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    /// Pages flow top to bottom, possibly several per row (spreads, wrapping).
    #[default]
    Vertical,
    /// Pages flow left to right in a single row.
    Horizontal,
}

/// Options for [`compute_visible_range`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisibilityOptions {
    /// Reorder [`VisibleRange::views`] by descending visibility.
    pub sort_by_visibility: bool,
    /// Scroll axis. Only the vertical axis needs the row backtracking pass.
    pub axis: ScrollAxis,
    /// Extra margin added to both ends of the viewport along the scroll axis, so
    /// pages just outside the viewport are reported ahead of time.
    pub threshold: f64,
}

impl VisibilityOptions {
    /// Vertical scrolling, document order, no threshold.
    pub const DEFAULT: Self = Self {
        sort_by_visibility: false,
        axis: ScrollAxis::Vertical,
        threshold: 0.0,
    };

    /// Returns a copy with sorting by visibility enabled or disabled.
    #[must_use]
    pub const fn with_sort_by_visibility(mut self, sort: bool) -> Self {
        self.sort_by_visibility = sort;
        self
    }

    /// Returns a copy with the given scroll axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Returns a copy with the given prefetch threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A page that is at least partially inside the viewport.
pub struct VisibleEntry<'a, V: PageView> {
    /// The page's identifier.
    pub id: V::Id,
    /// Left edge of the page's padding box.
    pub x: f64,
    /// Top edge of the page's padding box.
    pub y: f64,
    /// The page itself.
    pub view: &'a V,
    /// Share of the padding box inside the viewport, `0..=100`, truncated.
    pub percent: u8,
}

impl<V: PageView> VisibleEntry<'_, V> {
    /// Top-left corner of the page's padding box.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl<V: PageView> Clone for VisibleEntry<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: PageView> Copy for VisibleEntry<'_, V> {}

impl<V> fmt::Debug for VisibleEntry<'_, V>
where
    V: PageView + fmt::Debug,
    V::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleEntry")
            .field("id", &self.id)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("view", &self.view)
            .field("percent", &self.percent)
            .finish()
    }
}

impl<V: PageView> PartialEq for VisibleEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.x == other.x
            && self.y == other.y
            && self.percent == other.percent
            && core::ptr::eq(self.view, other.view)
    }
}

/// Result of [`compute_visible_range`].
pub struct VisibleRange<'a, V: PageView> {
    /// First visible page in document order.
    pub first: Option<VisibleEntry<'a, V>>,
    /// Last visible page in document order.
    pub last: Option<VisibleEntry<'a, V>>,
    /// Visible pages, in document order unless sorting by visibility was requested.
    pub views: Vec<VisibleEntry<'a, V>>,
}

impl<'a, V: PageView> VisibleRange<'a, V> {
    /// A range with no visible pages.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            first: None,
            last: None,
            views: Vec::new(),
        }
    }

    /// Returns `true` if no page is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Number of visible pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Iterates over the visible entries in their stored order.
    pub fn iter(&self) -> impl Iterator<Item = &VisibleEntry<'a, V>> {
        self.views.iter()
    }

    /// Iterates over the visible page ids in their stored order.
    pub fn ids(&self) -> impl Iterator<Item = V::Id> + '_ {
        self.views.iter().map(|entry| entry.id)
    }

    /// Returns the entry for `id`, if that page is visible.
    #[must_use]
    pub fn get(&self, id: V::Id) -> Option<&VisibleEntry<'a, V>> {
        self.views.iter().find(|entry| entry.id == id)
    }

    /// Returns `true` if the page with `id` is visible.
    #[must_use]
    pub fn contains(&self, id: V::Id) -> bool {
        self.get(id).is_some()
    }

    /// Returns the most visible entry, preferring the lowest id among equals.
    #[must_use]
    pub fn most_visible(&self) -> Option<&VisibleEntry<'a, V>> {
        self.views.iter().min_by(|a, b| {
            compare_visibility(f64::from(a.percent), a.id, f64::from(b.percent), b.id)
        })
    }
}

impl<V: PageView> Default for VisibleRange<'_, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> fmt::Debug for VisibleRange<'_, V>
where
    V: PageView + fmt::Debug,
    V::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleRange")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("views", &self.views)
            .finish()
    }
}

/// Orders two `(percent, id)` pairs for sorting by visibility.
///
/// More visible sorts first. Percentages within [`VISIBILITY_EPSILON`] of each
/// other are treated as equal and ordered by ascending id, so the result does not
/// depend on scan order.
///
/// ```rust
/// use core::cmp::Ordering;
/// use understory_visible_pages::compare_visibility;
///
/// assert_eq!(compare_visibility(80.0, 1, 20.0, 0), Ordering::Less);
/// assert_eq!(compare_visibility(50.0, 5, 50.0004, 3), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_visibility<I: Ord>(a_percent: f64, a_id: I, b_percent: f64, b_id: I) -> Ordering {
    let delta = a_percent - b_percent;
    if delta.abs() > VISIBILITY_EPSILON {
        if delta > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    } else {
        a_id.cmp(&b_id)
    }
}

/// Computes the viewport in content coordinates.
///
/// The start of each axis is the magnitude of the scroll offset divided by the
/// scale. Along the scroll axis the start is pulled back by `threshold` before
/// scaling and the extent grows by `2 * threshold`; the cross axis is not padded.
#[must_use]
pub fn viewport_rect(container: Size, scroll: ScrollState, options: &VisibilityOptions) -> Rect {
    let threshold = options.threshold;
    match options.axis {
        ScrollAxis::Vertical => {
            let top = (scroll.y.abs() - threshold) / scroll.scale;
            let left = scroll.x.abs() / scroll.scale;
            Rect::new(
                left,
                top,
                left + container.width,
                top + container.height + threshold * 2.0,
            )
        }
        ScrollAxis::Horizontal => {
            let top = scroll.y.abs() / scroll.scale;
            let left = (scroll.x.abs() - threshold) / scroll.scale;
            Rect::new(
                left,
                top,
                left + container.width + threshold * 2.0,
                top + container.height,
            )
        }
    }
}

/// Computes which of `views` are visible in a scrolled container.
///
/// - `container`: the container's client size.
/// - `scroll`: the current scroll offsets and zoom.
/// - `views`: pages in document order, positioned in unscaled content coordinates.
///
/// Starts from a binary search for the first page whose trailing edge is past the
/// viewport's leading edge, corrects that start for row layouts in vertical mode
/// (see [`backtrack_before_visible_row`]), then scans forward until no later page
/// can be visible. Typical cost is `O(log n + k)` for `k` visible pages.
///
/// The returned [`VisibleRange::first`] and [`VisibleRange::last`] are always in
/// document order, even when [`VisibilityOptions::sort_by_visibility`] reorders
/// [`VisibleRange::views`].
///
/// A non-finite container size, scroll offset or threshold, or a scale that is
/// not positive, yields an empty range. Pages with no area are reported with `percent == 0`.
///
/// ```rust
/// use kurbo::Size;
/// use understory_visible_pages::{
///     Page, PageBox, ScrollState, VisibilityOptions, compute_visible_range,
/// };
///
/// // Ten 100x100 pages with a 10 unit gap.
/// let pages: Vec<_> = (0..10_u32)
///     .map(|i| Page::new(i, PageBox::new(0.0, f64::from(i) * 110.0, 100.0, 100.0)))
///     .collect();
///
/// let range = compute_visible_range(
///     Size::new(100.0, 200.0),
///     ScrollState::new(0.0, 250.0, 1.0),
///     &pages,
///     &VisibilityOptions::default(),
/// );
/// assert_eq!(range.ids().collect::<Vec<_>>(), [2, 3, 4]);
/// assert_eq!(range.views[0].percent, 70);
/// ```
pub fn compute_visible_range<'a, V: PageView>(
    container: Size,
    scroll: ScrollState,
    views: &'a [V],
    options: &VisibilityOptions,
) -> VisibleRange<'a, V> {
    if !container.width.is_finite()
        || !container.height.is_finite()
        || !scroll.scale.is_finite()
        || scroll.scale <= 0.0
        || !scroll.x.is_finite()
        || !scroll.y.is_finite()
        || !options.threshold.is_finite()
    {
        vwarn!(
            width = container.width,
            height = container.height,
            x = scroll.x,
            y = scroll.y,
            scale = scroll.scale,
            threshold = options.threshold,
            "unsupported container or scroll state; reporting no visible pages"
        );
        return VisibleRange::empty();
    }

    let viewport = viewport_rect(container, scroll, options);
    let (top, bottom, left, right) = (viewport.y0, viewport.y1, viewport.x0, viewport.x1);
    let horizontal = options.axis == ScrollAxis::Horizontal;

    // All edges are taken from the padding box: offset (including margin) plus
    // client offset (the border), extended by the client size.
    let mut start = if horizontal {
        binary_search_first_index(views, |v| v.page_box().right() > left)
    } else {
        binary_search_first_index(views, |v| v.page_box().bottom() > top)
    };
    if !horizontal && !views.is_empty() {
        start = backtrack_before_visible_row(start, views, top);
    }

    // Cutoff past which every remaining page is hidden. Horizontal scrolling has
    // a single row, so we can stop as soon as a page starts past `right`. With rows,
    // a page below `bottom` can still share a row with visible pages, so the cutoff
    // is the bottom of the first page reaching `bottom`: a later page whose top is
    // below that starts a new, fully hidden row.
    let mut last_edge = horizontal.then_some(right);

    let mut visible = Vec::new();
    for view in &views[start..] {
        let page = view.page_box();
        let (page_left, page_top) = (page.left(), page.top());
        let (page_right, page_bottom) = (page.right(), page.bottom());

        match last_edge {
            None => {
                if page_bottom >= bottom {
                    last_edge = Some(page_bottom);
                }
            }
            Some(edge) => {
                let leading = if horizontal { page_left } else { page_top };
                if leading > edge {
                    break;
                }
            }
        }

        if page_bottom <= top || page_top >= bottom || page_right <= left || page_left >= right {
            continue;
        }

        visible.push(VisibleEntry {
            id: view.id(),
            x: page_left,
            y: page_top,
            view,
            percent: percent_visible(&page, top, bottom, left, right),
        });
    }

    let first = visible.first().copied();
    let last = visible.last().copied();

    if options.sort_by_visibility {
        visible.sort_by(|a, b| {
            compare_visibility(f64::from(a.percent), a.id, f64::from(b.percent), b.id)
        });
    }

    vdebug!(
        start,
        count = visible.len(),
        top,
        bottom,
        "computed visible range"
    );

    VisibleRange {
        first,
        last,
        views: visible,
    }
}

/// Share of `page`'s padding box inside the given viewport edges, `0..=100`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Clamped into 0..=100 first; the cast truncates toward zero"
)]
fn percent_visible(page: &PageBox, top: f64, bottom: f64, left: f64, right: f64) -> u8 {
    let Size { width, height } = page.size();
    if width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let hidden_height = (top - page.top()).max(0.0) + (page.bottom() - bottom).max(0.0);
    let hidden_width = (left - page.left()).max(0.0) + (page.right() - right).max(0.0);
    let percent = (height - hidden_height) * (width - hidden_width) * 100.0 / height / width;
    if percent.is_nan() {
        return 0;
    }
    percent.clamp(0.0, 100.0) as u8
}
