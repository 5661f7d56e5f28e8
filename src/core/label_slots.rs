use serde::{Deserialize, Serialize};
use tracing::warn;

/// Per-label share of the reservation step budget.
pub const DEFAULT_STEP_LIMIT_PER_LABEL: usize = 8;

/// Half-open vertical pixel interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotInterval {
    pub start: f64,
    pub end: f64,
}

impl SlotInterval {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPackerConfig {
    pub slot_height: f64,
    /// Total reservation steps allowed across all labels of one packing run.
    pub max_steps: usize,
}

impl LabelPackerConfig {
    /// Budget of `step_limit_per_label` steps per label plus a fixed allowance.
    #[must_use]
    pub fn for_label_count(slot_height: f64, label_count: usize, step_limit_per_label: usize) -> Self {
        Self {
            slot_height,
            max_steps: step_limit_per_label
                .saturating_mul(label_count)
                .saturating_add(16),
        }
    }
}

/// Result of one packing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    /// Slot top per anchor, parallel to the anchors passed in.
    pub slots: Vec<f64>,
    /// Reserved regions after phase one, sorted by start.
    pub reserved: Vec<SlotInterval>,
    /// `true` when the step budget ran out and labels were stacked end-to-end.
    pub degraded: bool,
}

/// Sorted list of disjoint, non-touching reserved intervals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationList {
    intervals: Vec<SlotInterval>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BudgetExhausted;

impl ReservationList {
    #[must_use]
    pub fn intervals(&self) -> &[SlotInterval] {
        &self.intervals
    }

    #[must_use]
    pub fn total_len(&self) -> f64 {
        self.intervals.iter().map(|iv| iv.len()).sum()
    }

    /// Reserves `size` pixels as close to `anchor` as the existing intervals allow.
    fn reserve(&mut self, anchor: f64, size: f64, budget: &mut usize) -> Result<(), BudgetExhausted> {
        let mut start = anchor;
        let mut size = size;
        let mut end = start + size;

        loop {
            if *budget == 0 {
                return Err(BudgetExhausted);
            }
            *budget -= 1;

            // First interval that ends at or after the requested start.
            let idx = self.intervals.partition_point(|iv| iv.end < start);
            let Some(current) = self.intervals.get(idx).copied() else {
                self.intervals.push(SlotInterval::new(start, end));
                return Ok(());
            };

            if current.start > end {
                self.intervals.insert(idx, SlotInterval::new(start, end));
                return Ok(());
            }

            // New interval ends exactly where `current` begins: grow it upward.
            if current.start == end {
                self.intervals[idx].start = start;
                return Ok(());
            }

            if start >= current.start {
                if start < current.end {
                    start = current.end;
                    end = start + size;
                    continue;
                }

                // Touching `current`'s end: fold in the next interval when the
                // gap is too small for the remaining size.
                match self.intervals.get(idx + 1).copied() {
                    Some(next) if next.start <= current.end + size => {
                        let gap = next.start - current.end;
                        self.intervals[idx].end = next.end;
                        self.intervals.remove(idx + 1);
                        size -= gap;
                        if size <= 0.0 {
                            return Ok(());
                        }
                        start = next.end;
                        end = start + size;
                    }
                    _ => {
                        self.intervals[idx].end = end;
                        return Ok(());
                    }
                }
                continue;
            }

            // `current` straddles the requested stop: shift upward so the
            // reservation ends exactly where `current` starts.
            end = current.start;
            start = end - size;
        }
    }

    /// Stacks `size` pixels directly below the last interval.
    fn append_end_to_end(&mut self, fallback_start: f64, size: f64) {
        match self.intervals.last_mut() {
            Some(last) => last.end += size,
            None => self.intervals.push(SlotInterval::new(fallback_start, fallback_start + size)),
        }
    }
}

/// Assigns one non-overlapping label slot per anchor.
///
/// `anchors` are the preferred slot tops in ascending stacking order (see
/// [`order_series`](crate::core::order_series)); the last anchor has the
/// highest priority. Reservation runs from highest to lowest priority, then
/// the reserved regions are cut into `slot_height` positions and handed out
/// top to bottom, highest priority first.
#[must_use]
pub fn pack_label_slots(anchors: &[f64], config: LabelPackerConfig) -> LabelLayout {
    let height = config.slot_height;
    let mut reservations = ReservationList::default();
    let mut budget = config.max_steps;
    let mut degraded = false;

    for (placed, &anchor) in anchors.iter().rev().enumerate() {
        let snapshot = reservations.clone();
        if reservations.reserve(anchor, height, &mut budget).is_ok() {
            continue;
        }

        let remaining = anchors.len() - placed;
        warn!(
            placed,
            remaining,
            max_steps = config.max_steps,
            "label packer step budget exhausted; stacking remaining labels end-to-end"
        );
        reservations = snapshot;
        reservations.append_end_to_end(anchor, height * remaining as f64);
        degraded = true;
        break;
    }

    let positions = match slot_positions(reservations.intervals(), height, anchors.len()) {
        Some(positions) => positions,
        None => {
            warn!(
                labels = anchors.len(),
                reserved_px = reservations.total_len(),
                "reserved label regions do not match label count; stacking sequentially"
            );
            degraded = true;
            let top = reservations
                .intervals()
                .first()
                .map_or(0.0, |iv| iv.start);
            (0..anchors.len())
                .map(|k| top + height * k as f64)
                .collect()
        }
    };

    // Highest priority (last anchor) takes the topmost position.
    let mut slots = vec![0.0; anchors.len()];
    for (slot, &position) in slots.iter_mut().rev().zip(&positions) {
        *slot = position;
    }

    LabelLayout {
        slots,
        reserved: reservations.intervals().to_vec(),
        degraded,
    }
}

/// Cuts reserved regions into `height`-sized positions, top to bottom.
fn slot_positions(intervals: &[SlotInterval], height: f64, expected: usize) -> Option<Vec<f64>> {
    let mut positions = Vec::with_capacity(expected);
    for interval in intervals {
        let capacity = (interval.len() / height).round();
        if capacity < 0.0 {
            return None;
        }
        for k in 0..capacity as usize {
            positions.push(interval.start + height * k as f64);
        }
    }
    (positions.len() == expected).then_some(positions)
}
