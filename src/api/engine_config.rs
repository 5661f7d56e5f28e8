use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_DASH_CYCLES_PER_SEGMENT, DEFAULT_ORDER_TOP_INDEX, DEFAULT_OVERLAP_TOLERANCE_RATIO,
    DEFAULT_STEP_LIMIT_PER_LABEL, OverlapConfig, PlotArea, SceneConfig, Viewport,
};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_label_slot_height_px")]
    pub label_slot_height_px: f64,
    #[serde(default = "default_series_order_top_index")]
    pub series_order_top_index: usize,
    #[serde(default = "default_overlap_tolerance_ratio")]
    pub overlap_tolerance_ratio: f64,
    #[serde(default = "default_dash_cycles_per_segment")]
    pub dash_cycles_per_segment: f64,
    #[serde(default = "default_label_packer_step_limit_per_label")]
    pub label_packer_step_limit_per_label: usize,
    /// Seed for random fallback colors once the palette is exhausted.
    #[serde(default)]
    pub color_seed: Option<u64>,
    #[serde(default)]
    pub style: RenderStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default layout tuning for a surface of `viewport` size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            label_slot_height_px: default_label_slot_height_px(),
            series_order_top_index: default_series_order_top_index(),
            overlap_tolerance_ratio: default_overlap_tolerance_ratio(),
            dash_cycles_per_segment: default_dash_cycles_per_segment(),
            label_packer_step_limit_per_label: default_label_packer_step_limit_per_label(),
            color_seed: None,
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_label_slot_height_px(mut self, height: f64) -> Self {
        self.label_slot_height_px = height;
        self
    }

    #[must_use]
    pub fn with_series_order_top_index(mut self, index: usize) -> Self {
        self.series_order_top_index = index;
        self
    }

    #[must_use]
    pub fn with_overlap_tolerance_ratio(mut self, ratio: f64) -> Self {
        self.overlap_tolerance_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_dash_cycles_per_segment(mut self, cycles: f64) -> Self {
        self.dash_cycles_per_segment = cycles;
        self
    }

    #[must_use]
    pub fn with_label_packer_step_limit_per_label(mut self, limit: usize) -> Self {
        self.label_packer_step_limit_per_label = limit;
        self
    }

    /// Makes random fallback colors reproducible.
    #[must_use]
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Validates the config and returns the plot area it produces.
    pub fn validate(&self) -> ChartResult<PlotArea> {
        let area = PlotArea::from_viewport(self.viewport)?;
        if !self.label_slot_height_px.is_finite() || self.label_slot_height_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "label slot height must be finite and > 0".to_owned(),
            ));
        }
        if !self.overlap_tolerance_ratio.is_finite() || self.overlap_tolerance_ratio < 0.0 {
            return Err(ChartError::InvalidConfig(
                "overlap tolerance ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.dash_cycles_per_segment.is_finite() || self.dash_cycles_per_segment <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "dash cycles per segment must be finite and > 0".to_owned(),
            ));
        }
        self.style.validate()?;
        Ok(area)
    }

    #[must_use]
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            label_slot_height: self.label_slot_height_px,
            order_top_index: self.series_order_top_index,
            step_limit_per_label: self.label_packer_step_limit_per_label,
            overlap: OverlapConfig {
                tolerance_ratio: self.overlap_tolerance_ratio,
                dash_cycles_per_segment: self.dash_cycles_per_segment,
            },
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))
    }
}

fn default_label_slot_height_px() -> f64 {
    14.0
}

fn default_series_order_top_index() -> usize {
    DEFAULT_ORDER_TOP_INDEX
}

fn default_overlap_tolerance_ratio() -> f64 {
    DEFAULT_OVERLAP_TOLERANCE_RATIO
}

fn default_dash_cycles_per_segment() -> f64 {
    DEFAULT_DASH_CYCLES_PER_SEGMENT
}

fn default_label_packer_step_limit_per_label() -> usize {
    DEFAULT_STEP_LIMIT_PER_LABEL
}
