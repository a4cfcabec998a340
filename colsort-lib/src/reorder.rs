//! Row reordering.

use std::cmp::Ordering;

/// Sort `rows` with `compare` and return the new order.
///
/// The sort is stable: rows that compare equal keep their relative order, so
/// the previous order acts as a secondary key. The input is consumed; nothing
/// else is touched.
///
/// ```
/// let rows = vec![("b", 1), ("a", 2), ("b", 0)];
/// let sorted = colsort_lib::reorder(rows, |x, y| x.0.cmp(y.0));
/// assert_eq!(sorted, [("a", 2), ("b", 1), ("b", 0)]);
/// ```
pub fn reorder<R, F>(mut rows: Vec<R>, mut compare: F) -> Vec<R>
where
    F: FnMut(&R, &R) -> Ordering,
{
    rows.sort_by(|a, b| compare(a, b));
    rows
}
