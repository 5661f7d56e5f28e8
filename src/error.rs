use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Coarse classification of [`ChartError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartErrorCategory {
    /// Raised while constructing a chart; the chart cannot be used.
    Configuration,
    /// Raised by `set_data`; the previously published scene is left intact.
    Input,
    /// Engine bug signal. Not user-recoverable.
    Internal,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("could not find container `{0}`")]
    MissingContainer(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("series list must not be empty")]
    EmptySeries,

    #[error("invalid domain: min={min} must be <= max={max}")]
    InvalidDomain { min: i64, max: i64 },

    #[error("malformed series `{label}`: expected {expected} samples, got {actual}")]
    MalformedSeries {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("series `{label}` has a non-finite sample at index {index}")]
    NonFiniteSample { label: String, index: usize },

    #[error("degenerate vertical range: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    #[must_use]
    pub fn category(&self) -> ChartErrorCategory {
        match self {
            Self::MissingContainer(_) | Self::InvalidViewport { .. } | Self::InvalidConfig(_) => {
                ChartErrorCategory::Configuration
            }
            Self::EmptySeries
            | Self::InvalidDomain { .. }
            | Self::MalformedSeries { .. }
            | Self::NonFiniteSample { .. }
            | Self::DegenerateRange { .. } => ChartErrorCategory::Input,
            Self::InvalidData(_) => ChartErrorCategory::Internal,
        }
    }
}
