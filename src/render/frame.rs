use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{DotPrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Paint order: `rects`, `lines`, `overlay_rects`, `dots`, `texts`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub overlay_rects: Vec<RectPrimitive>,
    pub dots: Vec<DotPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            lines: Vec::new(),
            overlay_rects: Vec::new(),
            dots: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in self.rects.iter().chain(&self.overlay_rects) {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for dot in &self.dots {
            dot.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.overlay_rects.is_empty()
            && self.dots.is_empty()
            && self.texts.is_empty()
    }
}
