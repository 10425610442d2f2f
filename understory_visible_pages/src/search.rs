// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary search for the first item satisfying a monotonic predicate.

/// Returns the index of the first item in `items` for which `predicate` is `true`.
///
/// The predicate must be monotonic over `items`: `false` for some prefix and
/// `true` for the remaining suffix. This is not checked; with non-monotonic input
/// the result is *some* index where the predicate holds, not necessarily the first.
///
/// Returns `items.len()` when the slice is empty or no item satisfies the
/// predicate. Evaluates the predicate `O(log n)` times.
///
/// ```rust
/// use understory_visible_pages::binary_search_first_index;
///
/// let bottoms = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(binary_search_first_index(&bottoms, |b| *b > 25.0), 2);
/// assert_eq!(binary_search_first_index(&bottoms, |b| *b > 99.0), 4);
/// ```
pub fn binary_search_first_index<T, F>(items: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let Some(last) = items.last() else {
        return 0;
    };
    if !predicate(last) {
        return items.len();
    }
    if predicate(&items[0]) {
        return 0;
    }

    let mut min = 0;
    let mut max = items.len() - 1;
    while min < max {
        let mid = min + (max - min) / 2;
        if predicate(&items[mid]) {
            max = mid;
        } else {
            min = mid + 1;
        }
    }
    min
}
