//! Rank searches over strictly increasing breakpoint sequences.
//!
//! A "rank" is the index of the breakpoint interval applicable to a query
//! time. The two public variants differ only in how they resolve a query
//! that lands exactly on a breakpoint, so both are expressed through one
//! parameterized binary search with a dedicated tie predicate.

/// The shared binary search. `before(x, arr[i])` decides whether the query
/// falls to the left of breakpoint `i`; the two tie rules differ only in
/// whether equality counts as "before".
///
/// Callers must guarantee `arr` is non-empty and strictly increasing. The
/// owning function types validate this at construction, never per query.
fn rank_by(arr: &[f64], x: f64, before: impl Fn(f64, f64) -> bool) -> Option<usize> {
    if before(x, arr[0]) {
        return None;
    }
    let mut low = 0;
    let mut high = arr.len();
    while high > low {
        let mid = (high + low) / 2;
        if before(x, arr[mid]) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    // The guard above ensures high >= 1 here.
    Some(high - 1)
}

/// Greatest index `i` with `arr[i] <= x`, or `None` when `x < arr[0]`.
///
/// Ties favor inclusion: a query exactly on a breakpoint resolves to that
/// breakpoint's index. This is the lookup rule for right-continuous step
/// functions, where the value changes at the breakpoint itself.
pub fn rank_left(arr: &[f64], x: f64) -> Option<usize> {
    rank_by(arr, x, |x, b| x < b)
}

/// Greatest index `i` with `arr[i] < x`, or `None` when `x <= arr[0]`.
///
/// Ties exclude: a query exactly on a breakpoint resolves to the previous
/// segment. This is the lookup rule for piecewise-linear interpolation,
/// where a breakpoint belongs to the segment ending there.
pub fn rank_strict(arr: &[f64], x: f64) -> Option<usize> {
    rank_by(arr, x, |x, b| x <= b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES: [f64; 4] = [0.0, 1.0, 3.0, 7.0];

    #[test]
    fn test_before_first_breakpoint() {
        assert_eq!(rank_left(&TIMES, -0.5), None);
        assert_eq!(rank_strict(&TIMES, -0.5), None);
    }

    #[test]
    fn test_left_rank_ties_include() {
        // A query exactly on a breakpoint resolves to that index.
        assert_eq!(rank_left(&TIMES, 0.0), Some(0));
        assert_eq!(rank_left(&TIMES, 1.0), Some(1));
        assert_eq!(rank_left(&TIMES, 3.0), Some(2));
        assert_eq!(rank_left(&TIMES, 7.0), Some(3));
    }

    #[test]
    fn test_strict_rank_ties_exclude() {
        // A query exactly on a breakpoint resolves to the previous segment.
        assert_eq!(rank_strict(&TIMES, 0.0), None);
        assert_eq!(rank_strict(&TIMES, 1.0), Some(0));
        assert_eq!(rank_strict(&TIMES, 3.0), Some(1));
        assert_eq!(rank_strict(&TIMES, 7.0), Some(2));
    }

    #[test]
    fn test_interior_queries_agree() {
        for (x, expected) in [(0.5, 0), (2.0, 1), (5.0, 2)] {
            assert_eq!(rank_left(&TIMES, x), Some(expected));
            assert_eq!(rank_strict(&TIMES, x), Some(expected));
        }
    }

    #[test]
    fn test_past_last_breakpoint() {
        assert_eq!(rank_left(&TIMES, 100.0), Some(3));
        assert_eq!(rank_strict(&TIMES, 100.0), Some(3));
    }

    #[test]
    fn test_single_breakpoint() {
        let arr = [2.0];
        assert_eq!(rank_left(&arr, 2.0), Some(0));
        assert_eq!(rank_strict(&arr, 2.0), None);
        assert_eq!(rank_left(&arr, 1.9), None);
        assert_eq!(rank_strict(&arr, 2.1), Some(0));
    }
}
