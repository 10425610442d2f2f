// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page geometry, the [`PageView`] trait, and scroll state.

use kurbo::{Rect, Size};

use crate::GeometryError;

/// Measured geometry of a single page element.
///
/// Values follow the box-model metrics a layout engine reports for a page
/// container: `offset_*` is the position within the scrollable content
/// (including margin), `client_left`/`client_top` is the border thickness, and
/// `client_width`/`client_height` is the padding-box size. All visibility math
/// works on the padding box.
///
/// All values are expected to be finite and non-negative, in content pixels at
/// scale 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageBox {
    /// Horizontal position within the scrollable content, including margin.
    pub offset_left: f64,
    /// Vertical position within the scrollable content, including margin.
    pub offset_top: f64,
    /// Left border thickness.
    pub client_left: f64,
    /// Top border thickness.
    pub client_top: f64,
    /// Padding-box width.
    pub client_width: f64,
    /// Padding-box height.
    pub client_height: f64,
}

impl PageBox {
    /// Creates a borderless box at (`left`, `top`) with the given padding-box size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            offset_left: left,
            offset_top: top,
            client_left: 0.0,
            client_top: 0.0,
            client_width: width,
            client_height: height,
        }
    }

    /// Creates a borderless box covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Returns a copy with the given border thickness.
    #[must_use]
    pub const fn with_border(mut self, left: f64, top: f64) -> Self {
        self.client_left = left;
        self.client_top = top;
        self
    }

    /// Left edge of the padding box.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.offset_left + self.client_left
    }

    /// Top edge of the padding box.
    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.offset_top + self.client_top
    }

    /// Right edge of the padding box.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left() + self.client_width
    }

    /// Bottom edge of the padding box.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top() + self.client_height
    }

    /// Padding-box size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.client_width, self.client_height)
    }

    /// Padding box in content coordinates.
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }

    /// Padding-box area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.client_width * self.client_height
    }

    /// Returns `true` if the padding box has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.client_width <= 0.0 || self.client_height <= 0.0
    }

    /// Checks that every field is finite and that sizes and borders are non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("offset_left", self.offset_left),
            ("offset_top", self.offset_top),
            ("client_left", self.client_left),
            ("client_top", self.client_top),
            ("client_width", self.client_width),
            ("client_height", self.client_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { field });
            }
            if value < 0.0 {
                return Err(GeometryError::NegativeExtent { field, value });
            }
        }
        Ok(())
    }
}

impl From<Rect> for PageBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// A page-like element that can take part in a visibility query.
///
/// Implemented by whatever the host uses for its page or tile abstraction. The
/// slice passed to [`compute_visible_range`](crate::compute_visible_range) must be
/// in document (reading) order, which is not necessarily geometric order within a
/// row of a spread.
pub trait PageView {
    /// Stable identifier for this page. Used to break ties when sorting by visibility.
    type Id: Copy + Ord;

    /// Returns this page's identifier.
    fn id(&self) -> Self::Id;

    /// Returns this page's current geometry.
    fn page_box(&self) -> PageBox;
}

impl<V: PageView + ?Sized> PageView for &V {
    type Id = V::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn page_box(&self) -> PageBox {
        (**self).page_box()
    }
}

/// A plain [`PageView`] for hosts without their own page type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<I> {
    /// Page identifier (typically the page number).
    pub id: I,
    /// Page geometry.
    pub page_box: PageBox,
}

impl<I> Page<I> {
    /// Creates a new page.
    #[must_use]
    pub const fn new(id: I, page_box: PageBox) -> Self {
        Self { id, page_box }
    }
}

impl<I: Copy + Ord> PageView for Page<I> {
    type Id = I;

    fn id(&self) -> I {
        self.id
    }

    fn page_box(&self) -> PageBox {
        self.page_box
    }
}

/// Current scroll position and zoom of the container.
///
/// `x` and `y` may be negative depending on the host's coordinate convention; only
/// their magnitude is used. `scale` must be positive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Horizontal scroll offset.
    pub x: f64,
    /// Vertical scroll offset.
    pub y: f64,
    /// Zoom multiplier.
    pub scale: f64,
}

impl ScrollState {
    /// Scroll state at the origin with scale 1.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a scroll state without validating it.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Creates a scroll state, rejecting non-finite offsets and non-positive scales.
    pub fn try_new(x: f64, y: f64, scale: f64) -> Result<Self, GeometryError> {
        let state = Self::new(x, y, scale);
        state.validate()?;
        Ok(state)
    }

    /// Checks that the offsets are finite and the scale is finite and positive.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.x.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { field: "x" });
        }
        if !self.y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { field: "y" });
        }
        if !self.scale.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { field: "scale" });
        }
        if self.scale <= 0.0 {
            return Err(GeometryError::NonPositiveScale { scale: self.scale });
        }
        Ok(())
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::ORIGIN
    }
}
