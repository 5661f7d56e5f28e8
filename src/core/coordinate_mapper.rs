use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{LinearScale, PlotArea, Series, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Pixel column of every integer domain value, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XIndex {
    domain_min: i64,
    domain_max: i64,
    pixels: Vec<f64>,
}

impl XIndex {
    /// Interpolates `[domain_min, domain_max]` across the plot band.
    ///
    /// Columns are floored to whole pixels; a single-value domain maps to the
    /// left edge.
    pub fn build(domain_min: i64, domain_max: i64, area: PlotArea) -> ChartResult<Self> {
        if domain_max < domain_min {
            return Err(ChartError::InvalidDomain {
                min: domain_min,
                max: domain_max,
            });
        }

        let left = area.left();
        let pixels = if domain_max == domain_min {
            vec![left]
        } else {
            let scale = LinearScale::new(
                domain_min as f64,
                domain_max as f64,
                left,
                area.right(),
            )?;
            (domain_min..=domain_max)
                .map(|x| left + scale.offset_of(x as f64).floor())
                .collect()
        };

        Ok(Self {
            domain_min,
            domain_max,
            pixels,
        })
    }

    #[must_use]
    pub fn domain(&self) -> (i64, i64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel column of domain value `x`, if it is inside the domain.
    #[must_use]
    pub fn pixel(&self, x: i64) -> Option<f64> {
        if x < self.domain_min || x > self.domain_max {
            return None;
        }
        usize::try_from(x - self.domain_min)
            .ok()
            .and_then(|index| self.pixels.get(index).copied())
    }

    /// Pixel columns indexed by sample index (`x - domain_min`).
    #[must_use]
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    #[must_use]
    pub fn last_pixel(&self) -> f64 {
        self.pixels.last().copied().unwrap_or_default()
    }
}

/// Vertical value-to-pixel scale; the lowest value maps to the plot bottom.
///
/// Ranges whose span cannot be projected onto the plot height without
/// overflowing are rejected as degenerate.
pub fn vertical_scale(range: ValueRange, area: PlotArea) -> ChartResult<LinearScale> {
    if !(range.max > range.min) || !(range.span() * area.plot_height()).is_finite() {
        return Err(ChartError::DegenerateRange {
            min: range.min,
            max: range.max,
        });
    }
    LinearScale::new(range.min, range.max, area.bottom(), area.top())
}

/// Maps each sample to a whole-pixel Y position.
#[must_use]
pub fn project_series_line(samples: &[f64], scale: LinearScale) -> Vec<f64> {
    samples
        .iter()
        .map(|&value| scale.domain_to_pixel(value).round())
        .collect()
}

/// Projects every series, in order, to its pixel Y sequence.
pub fn project_lines(
    series: &[Series],
    range: ValueRange,
    area: PlotArea,
) -> ChartResult<Vec<Vec<f64>>> {
    let scale = vertical_scale(range, area)?;

    #[cfg(feature = "parallel-projection")]
    {
        Ok(series
            .par_iter()
            .map(|s| project_series_line(&s.samples, scale))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(series
            .iter()
            .map(|s| project_series_line(&s.samples, scale))
            .collect())
    }
}
