use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ColorAssigner, DashPattern, LabelLayout, LabelPackerConfig, OverlapAnalysis, OverlapConfig,
    PlotArea, Series, SeriesInput, SlotInterval, ValueRange, XIndex, analyze_overlaps,
    calculate_bounds, order_series, pack_label_slots, project_lines,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::Highlight;

/// Tuning consumed by [`Scene::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub label_slot_height: f64,
    pub order_top_index: usize,
    pub step_limit_per_label: usize,
    pub overlap: OverlapConfig,
}

/// Immutable, fully resolved chart geometry for one data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub area: PlotArea,
    pub range: ValueRange,
    pub x_index: XIndex,
    pub series: Vec<Series>,
    /// `lines[series][sample]`: pixel Y of every sample.
    pub lines: Vec<Vec<f64>>,
    pub label_slot_height: f64,
    /// Series indices in ascending stacking order.
    pub label_order: Vec<usize>,
    pub label_layout: LabelLayout,
    pub overlaps: OverlapAnalysis,
}

impl Scene {
    /// Runs the whole layout pipeline over `inputs`.
    ///
    /// Input is validated before anything is computed, so an error leaves
    /// no partially built state behind.
    pub fn build(
        inputs: Vec<SeriesInput>,
        domain_min: i64,
        domain_max: i64,
        area: PlotArea,
        colors: &mut ColorAssigner,
        config: SceneConfig,
    ) -> ChartResult<Self> {
        let sample_count = validate_inputs(&inputs, domain_min, domain_max)?;

        let (mut series, range) = calculate_bounds(inputs, colors);
        let x_index = XIndex::build(domain_min, domain_max, area)?;
        let lines = project_lines(&series, range, area)?;

        let label_order = order_series(&series, config.order_top_index);
        let anchors: Vec<f64> = label_order
            .iter()
            .map(|&index| lines[index][sample_count - 1])
            .collect();
        let label_layout = pack_label_slots(
            &anchors,
            LabelPackerConfig::for_label_count(
                config.label_slot_height,
                anchors.len(),
                config.step_limit_per_label,
            ),
        );
        for (&index, &slot) in label_order.iter().zip(&label_layout.slots) {
            series[index].label_slot = slot;
        }

        let overlaps = analyze_overlaps(&lines, x_index.pixels(), config.overlap);

        debug!(
            series = series.len(),
            domain_min,
            domain_max,
            range_min = range.min,
            range_max = range.max,
            degraded_labels = label_layout.degraded,
            "scene built"
        );

        Ok(Self {
            area,
            range,
            x_index,
            series,
            lines,
            label_slot_height: config.label_slot_height,
            label_order,
            label_layout,
            overlaps,
        })
    }

    #[must_use]
    pub fn domain(&self) -> (i64, i64) {
        self.x_index.domain()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.x_index.len()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.sample_count().saturating_sub(1)
    }

    #[must_use]
    pub fn x_pixel(&self, x: i64) -> Option<f64> {
        self.x_index.pixel(x)
    }

    #[must_use]
    pub fn label_slot(&self, series: usize) -> Option<SlotInterval> {
        self.series
            .get(series)
            .map(|s| SlotInterval::new(s.label_slot, s.label_slot + self.label_slot_height))
    }

    /// Computed dash pattern, ignoring highlight state.
    #[must_use]
    pub fn dash_pattern(&self, series: usize, segment: usize) -> Option<&DashPattern> {
        self.overlaps.dash_pattern(series, segment)
    }

    /// Dash pattern to draw with; highlighted series always draw solid.
    #[must_use]
    pub fn effective_dash_pattern(
        &self,
        series: usize,
        segment: usize,
        highlight: &Highlight,
    ) -> Option<&DashPattern> {
        if highlight.contains_series(series) {
            return None;
        }
        self.dash_pattern(series, segment)
    }
}

fn validate_inputs(inputs: &[SeriesInput], domain_min: i64, domain_max: i64) -> ChartResult<usize> {
    let invalid_domain = || ChartError::InvalidDomain {
        min: domain_min,
        max: domain_max,
    };
    let span = domain_max.checked_sub(domain_min).ok_or_else(invalid_domain)?;
    let sample_count = usize::try_from(span)
        .ok()
        .and_then(|span| span.checked_add(1))
        .ok_or_else(invalid_domain)?;

    if inputs.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    for input in inputs {
        input.validate(sample_count)?;
    }
    Ok(sample_count)
}
