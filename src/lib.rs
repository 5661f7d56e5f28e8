//! linechart-rs: interactive multi-series line charts over an integer domain.
//!
//! The crate turns named sample series into an immutable [`core::Scene`]
//! (value range, pixel mapping, collision-free series labels and dash
//! patterns for coincident lines), resolves pointer input against it, and
//! emits backend-agnostic [`render::RenderFrame`]s through a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
