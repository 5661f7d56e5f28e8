use std::cmp::Ordering;

use crate::core::Series;

/// Highest sample index consulted when ordering series.
pub const DEFAULT_ORDER_TOP_INDEX: usize = 30;

/// Lowest sample index consulted when ordering series; earlier samples never
/// break ties.
pub const ORDER_BOTTOM_INDEX: usize = 2;

/// Compares two sample sequences for label stacking.
///
/// Scans from `top_index` down to [`ORDER_BOTTOM_INDEX`] and orders
/// ascending by the value at the first index where the two differ. The scan
/// is clamped to the shorter sequence, so the relation is only a total order
/// over sequences of equal length; [`order_series`] clamps once for the whole
/// set.
#[must_use]
pub fn compare_samples(a: &[f64], b: &[f64], top_index: usize) -> Ordering {
    let shared_len = a.len().min(b.len());
    let Some(top) = clamp_top_index(top_index, shared_len) else {
        return Ordering::Equal;
    };

    (ORDER_BOTTOM_INDEX..=top)
        .rev()
        .map(|index| a[index].total_cmp(&b[index]))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Returns series indices in ascending stacking order.
///
/// The sort is stable: series comparing equal keep their input order.
#[must_use]
pub fn order_series(series: &[Series], top_index: usize) -> Vec<usize> {
    let shared_len = series.iter().map(|s| s.samples.len()).min().unwrap_or(0);
    let top = clamp_top_index(top_index, shared_len);

    let mut order: Vec<usize> = (0..series.len()).collect();
    if let Some(top) = top {
        order.sort_by(|&a, &b| compare_samples(&series[a].samples, &series[b].samples, top));
    }
    order
}

fn clamp_top_index(top_index: usize, len: usize) -> Option<usize> {
    let top = top_index.min(len.checked_sub(1)?);
    (top >= ORDER_BOTTOM_INDEX).then_some(top)
}
