use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::Scene;

/// Raw pointer input in surface coordinates, delivered per chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}

/// One addressed data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitPoint {
    pub series: usize,
    pub sample: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusState {
    Unfocused,
    Focused,
}

/// What is currently under pointer focus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Highlight {
    #[default]
    None,
    /// Every sample within tolerance of the pointer at one domain value.
    Points(SmallVec<[HitPoint; 4]>),
    /// A series label in the right gutter; `point` is that series' final sample
    /// and `slot` the label's rank counted from the top.
    Label { point: HitPoint, slot: usize },
}

impl Highlight {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Points(points) => points.is_empty(),
            Self::Label { .. } => false,
        }
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        if self.is_empty() {
            FocusState::Unfocused
        } else {
            FocusState::Focused
        }
    }

    /// Highlighted data points; a label highlight yields its final sample.
    #[must_use]
    pub fn points(&self) -> &[HitPoint] {
        match self {
            Self::None => &[],
            Self::Points(points) => points,
            Self::Label { point, .. } => std::slice::from_ref(point),
        }
    }

    #[must_use]
    pub fn contains_series(&self, series: usize) -> bool {
        self.points().iter().any(|point| point.series == series)
    }

    #[must_use]
    pub fn label_slot(&self) -> Option<usize> {
        match self {
            Self::Label { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

/// Resolves pointer coordinates against a scene.
///
/// Inside the right label gutter the pointer is first matched against label
/// slots; otherwise (or when no label matches) it snaps to the nearest domain
/// column within the padding tolerance and collects every series whose line
/// passes within the same tolerance at that column.
#[must_use]
pub fn hit_test(scene: &Scene, px: f64, py: f64) -> Highlight {
    if !px.is_finite() || !py.is_finite() {
        return Highlight::None;
    }

    if px > scene.area.right() {
        if let Some(label) = hit_label(scene, py) {
            trace!(?label, px, py, "pointer over series label");
            return label;
        }
    }

    let tolerance = scene.area.padding;
    let Some(sample) = scene
        .x_index
        .pixels()
        .iter()
        .enumerate()
        .map(|(sample, &column)| (sample, OrderedFloat((px - column).abs())))
        .filter(|&(_, distance)| distance.0 < tolerance)
        .min_by_key(|&(_, distance)| distance)
        .map(|(sample, _)| sample)
    else {
        return Highlight::None;
    };

    let points: SmallVec<[HitPoint; 4]> = scene
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.get(sample).is_some_and(|&y| (py - y).abs() < tolerance))
        .map(|(series, _)| HitPoint { series, sample })
        .collect();

    if points.is_empty() {
        Highlight::None
    } else {
        trace!(sample, hits = points.len(), "pointer over data points");
        Highlight::Points(points)
    }
}

fn hit_label(scene: &Scene, py: f64) -> Option<Highlight> {
    let series = (0..scene.series.len()).find(|&series| {
        scene
            .label_slot(series)
            .is_some_and(|slot| py >= slot.start && py < slot.end)
    })?;
    let top = scene.series[series].label_slot;
    let slot = scene.series.iter().filter(|s| s.label_slot < top).count();
    Some(Highlight::Label {
        point: HitPoint {
            series,
            sample: scene.series[series].last_sample_index(),
        },
        slot,
    })
}
