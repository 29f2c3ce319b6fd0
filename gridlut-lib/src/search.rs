//! Lower-bound search over ascending slices.
//!
//! Every function here returns the smallest index `i` with `list[i] >= val`,
//! or `None` when `val` is larger than every element (or is NaN). The three
//! strategies differ only in how they walk the slice; for sorted input they
//! always return the same index.

use serde::{Deserialize, Serialize};

/// Candidate window size at which adaptive search stops bisecting and
/// finishes with a linear scan.
pub const ADAPTIVE_LINEAR_THRESHOLD: usize = 8;

/// Which lower-bound algorithm to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStrategy {
    Linear,
    Binary,
    #[default]
    Adaptive,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [Self::Linear, Self::Binary, Self::Adaptive];

    #[inline]
    pub fn search(self, list: &[f64], val: f64) -> Option<usize> {
        match self {
            Self::Linear => lower_bound_linear(list, val),
            Self::Binary => lower_bound_binary(list, val),
            Self::Adaptive => lower_bound_adaptive(list, val),
        }
    }
}

/// Scans from the front. Cheap for short slices and for queries that land
/// near the start.
#[inline]
pub fn lower_bound_linear(list: &[f64], val: f64) -> Option<usize> {
    list.iter().position(|&v| v >= val)
}

/// Leftmost-match bisection.
#[inline]
pub fn lower_bound_binary(list: &[f64], val: f64) -> Option<usize> {
    // Written as `!(v >= val)` so a NaN query falls off the end like the
    // linear scan does.
    let idx = list.partition_point(|&v| !(v >= val));
    (idx < list.len()).then_some(idx)
}

/// Bisects down to [`ADAPTIVE_LINEAR_THRESHOLD`] candidates, then scans.
pub fn lower_bound_adaptive(list: &[f64], val: f64) -> Option<usize> {
    // Everything before `lo` is < val, everything from `hi` on is >= val.
    let mut lo = 0;
    let mut hi = list.len();
    while hi - lo > ADAPTIVE_LINEAR_THRESHOLD {
        let mid = lo + (hi - lo) / 2;
        if list[mid] >= val {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    match list[lo..hi].iter().position(|&v| v >= val) {
        Some(i) => Some(lo + i),
        None => (hi < list.len()).then_some(hi),
    }
}

/// Adaptive search over `list[start..]`, returning an index into `list`.
///
/// Used when queries arrive in ascending order and the previous answer is a
/// valid lower bound for the next one.
#[inline]
pub fn lower_bound_from(list: &[f64], val: f64, start: usize) -> Option<usize> {
    let start = start.min(list.len());
    lower_bound_adaptive(&list[start..], val).map(|i| start + i)
}
