// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics that compile away unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
macro_rules! vtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "understory_visible_pages", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! vdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "understory_visible_pages", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! vwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "understory_visible_pages", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vwarn {
    ($($tt:tt)*) => {};
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    #[test]
    fn macros_forward_to_tracing() {
        let (from, to, top) = (8_usize, 6_usize, 400.0_f64);
        vtrace!(from, to, top, "backtracked to row start");
        vdebug!(count = to, "computed visible range");
        vwarn!(scale = 0.0_f64, "unsupported container or scroll state");
    }
}
