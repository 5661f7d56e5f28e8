mod data_controller;
mod engine;
mod engine_config;
mod json_contract;
mod pointer_controller;
mod render_frame_builder;
mod render_style;
mod surface_host;
mod value_format;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use render_style::RenderStyle;
pub use surface_host::{HeadlessHost, SurfaceHost};
pub use value_format::{TOOLTIP_DECIMAL_PLACES, format_sample_value};
