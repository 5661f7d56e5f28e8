mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, DotPrimitive, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Average glyph advance relative to font size used by [`Renderer::measure_text_width`].
pub const ESTIMATED_GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart layout and hit-testing logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Width in pixels of `text` drawn at `font_size_px`.
    ///
    /// The default is a glyph-count estimate; backends with real font
    /// metrics should override it.
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * font_size_px * ESTIMATED_GLYPH_WIDTH_RATIO
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
