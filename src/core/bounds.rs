use serde::{Deserialize, Serialize};

use crate::core::{ColorAssigner, Series, SeriesInput};

/// Vertical bounds always snap outward to a multiple of this step.
pub const RANGE_STEP: f64 = 10.0;

/// Vertical value range of a scene.
///
/// Always contains zero, both ends are multiples of [`RANGE_STEP`] and
/// `max > min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Scans every sample, starting from a zero-height range at 0.
    #[must_use]
    pub fn from_samples<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut raw = RawExtent::default();
        for series in samples {
            raw.widen(series);
        }
        raw.round_outward()
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Default)]
struct RawExtent {
    min: f64,
    max: f64,
}

impl RawExtent {
    fn widen(&mut self, samples: &[f64]) {
        for &value in samples {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
    }

    fn round_outward(self) -> ValueRange {
        let min = (self.min / RANGE_STEP).floor() * RANGE_STEP;
        let mut max = (self.max / RANGE_STEP).ceil() * RANGE_STEP;
        // All-zero data would collapse the range.
        if max <= min {
            max = min + RANGE_STEP;
        }
        ValueRange { min, max }
    }
}

/// Resolves series colors and computes the vertical range in one pass.
///
/// Series without an explicit color get one from `colors` in input order;
/// the returned series keep that color for the lifetime of the scene.
pub fn calculate_bounds(
    inputs: Vec<SeriesInput>,
    colors: &mut ColorAssigner,
) -> (Vec<Series>, ValueRange) {
    let mut raw = RawExtent::default();
    let mut series = Vec::with_capacity(inputs.len());
    for input in inputs {
        let color = colors.resolve(input.color);
        raw.widen(&input.samples);
        series.push(Series {
            label: input.label,
            color,
            samples: input.samples,
            label_slot: 0.0,
        });
    }
    (series, raw.round_outward())
}
