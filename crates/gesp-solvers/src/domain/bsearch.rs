//! Binary search on a monotone feasibility predicate
//!
//! Both functions narrow an integer range to the boundary between feasible
//! and infeasible candidates, evaluating the predicate O(log(hi-lo)) times.
//! The search direction is fixed by the function chosen: `max_feasible` for
//! downward-closed feasibility, `min_feasible` for upward-closed.
//!
//! If the predicate is not monotone over `[lo, hi]` the result is
//! unspecified (the search still terminates).

/// Largest `v` in `[lo, hi]` with `feasible(v)`.
///
/// Requires downward-closed feasibility: if `feasible(v)` then
/// `feasible(w)` for all `w < v` in range.
///
/// Returns `None` when the range is empty or no candidate is feasible.
pub fn max_feasible<F>(lo: i64, hi: i64, mut feasible: F) -> Option<i64>
where
    F: FnMut(i64) -> bool,
{
    if lo > hi || !feasible(lo) {
        return None;
    }

    // Invariant: feasible(left) holds; everything above right is infeasible.
    let mut left = lo;
    let mut right = hi;
    while left < right {
        let mid = left + (right - left + 1) / 2;
        if feasible(mid) {
            left = mid;
        } else {
            right = mid - 1;
        }
    }

    Some(left)
}

/// Smallest `v` in `[lo, hi]` with `feasible(v)`.
///
/// Requires upward-closed feasibility: if `feasible(v)` then `feasible(w)`
/// for all `w > v` in range.
///
/// Returns `None` when the range is empty or no candidate is feasible.
pub fn min_feasible<F>(lo: i64, hi: i64, mut feasible: F) -> Option<i64>
where
    F: FnMut(i64) -> bool,
{
    if lo > hi || !feasible(hi) {
        return None;
    }

    let mut left = lo;
    let mut right = hi;
    while left < right {
        let mid = left + (right - left) / 2;
        if feasible(mid) {
            right = mid;
        } else {
            left = mid + 1;
        }
    }

    Some(left)
}
