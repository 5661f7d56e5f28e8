use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and stroke metrics used when turning a scene into a render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub foreground_color: Color,
    pub background_color: Color,
    pub guide_line_color: Color,
    pub tooltip_box_color: Color,
    pub font_size_px: f64,
    pub axis_stroke_width: f64,
    pub series_stroke_width: f64,
    pub highlighted_series_stroke_width: f64,
    pub tooltip_padding_px: f64,
    pub dot_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            foreground_color: Color::rgb(0.0, 0.0, 0.0),
            background_color: Color::rgb(1.0, 1.0, 1.0),
            guide_line_color: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            tooltip_box_color: Color::from_rgb8(0xcc, 0xcc, 0xcc).with_alpha(0.5),
            font_size_px: 12.0,
            axis_stroke_width: 2.0,
            series_stroke_width: 2.0,
            highlighted_series_stroke_width: 3.0,
            tooltip_padding_px: 5.0,
            dot_radius_px: 3.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.foreground_color,
            self.background_color,
            self.guide_line_color,
            self.tooltip_box_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("style color: {err}")))?;
        }
        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("axis_stroke_width", self.axis_stroke_width),
            ("series_stroke_width", self.series_stroke_width),
            (
                "highlighted_series_stroke_width",
                self.highlighted_series_stroke_width,
            ),
            ("dot_radius_px", self.dot_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.tooltip_padding_px.is_finite() || self.tooltip_padding_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "style `tooltip_padding_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
