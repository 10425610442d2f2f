// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors.

/// A problem found while validating page geometry or scroll state.
///
/// [`compute_visible_range`](crate::compute_visible_range) never returns this; it
/// degrades to an empty or best-effort result instead. Hosts that want to reject
/// bad measurements up front can use [`PageBox::validate`](crate::PageBox::validate)
/// and [`ScrollState::try_new`](crate::ScrollState::try_new).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A coordinate or extent was NaN or infinite.
    #[error("`{field}` must be finite")]
    NonFiniteCoordinate {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A size or border thickness was negative.
    #[error("`{field}` must be non-negative, got {value}")]
    NegativeExtent {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The zoom multiplier was zero or negative.
    #[error("scroll scale must be positive, got {scale}")]
    NonPositiveScale {
        /// The rejected scale.
        scale: f64,
    },
}
