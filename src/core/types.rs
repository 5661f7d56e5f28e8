use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Padding policy and the plotting band it leaves on a surface.
///
/// `padding` is 2% of the shorter surface side (at least one pixel). The
/// bottom keeps twice that for domain labels and the right side keeps eight
/// times that as a gutter for end-of-line series labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub viewport: Viewport,
    pub padding: f64,
    pub padding_bottom: f64,
    pub padding_right: f64,
}

impl PlotArea {
    pub const PADDING_RATIO: f64 = 0.02;
    pub const BOTTOM_PADDING_FACTOR: f64 = 2.0;
    pub const RIGHT_PADDING_FACTOR: f64 = 8.0;

    pub fn from_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let shorter = f64::from(viewport.width.min(viewport.height));
        let padding = (shorter * Self::PADDING_RATIO).floor().max(1.0);
        let area = Self {
            viewport,
            padding,
            padding_bottom: padding * Self::BOTTOM_PADDING_FACTOR,
            padding_right: padding * Self::RIGHT_PADDING_FACTOR,
        };

        if area.plot_width() <= 0.0 || area.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.padding
    }

    /// Right edge of the plotting band; the label gutter starts here.
    #[must_use]
    pub fn right(self) -> f64 {
        f64::from(self.viewport.width) - self.padding_right
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        f64::from(self.viewport.height) - self.padding_bottom
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.right() - self.left()
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.bottom() - self.top()
    }
}
