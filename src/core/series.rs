use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Caller-supplied series, one sample per integer domain value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub label: String,
    #[serde(default)]
    pub color: Option<Color>,
    pub samples: Vec<f64>,
}

impl SeriesInput {
    #[must_use]
    pub fn new(label: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            color: None,
            samples,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Checks sample count against the shared domain length and rejects
    /// non-finite samples.
    pub fn validate(&self, expected_len: usize) -> ChartResult<()> {
        if self.samples.len() != expected_len {
            return Err(ChartError::MalformedSeries {
                label: self.label.clone(),
                expected: expected_len,
                actual: self.samples.len(),
            });
        }
        if let Some(index) = self.samples.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::NonFiniteSample {
                label: self.label.clone(),
                index,
            });
        }
        Ok(())
    }
}

/// Series as published in a scene: color resolved, label slot assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub samples: Vec<f64>,
    /// Top pixel Y of this series' label slot.
    pub label_slot: f64,
}

impl Series {
    #[must_use]
    pub fn last_sample_index(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }
}
