use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear map from a value domain onto a pixel band.
///
/// The band may be reversed (`pixel_start > pixel_end`), which is how the
/// vertical axis puts the lowest value at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel band must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_band(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// Signed distance travelled along the band from `pixel_start`.
    #[must_use]
    pub fn offset_of(self, value: f64) -> f64 {
        (value - self.domain_start) * (self.pixel_end - self.pixel_start)
            / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        self.pixel_start + self.offset_of(value)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
