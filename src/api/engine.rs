use crate::core::{PlotArea, Scene, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusState, Highlight};
use crate::render::Renderer;

use super::{ChartEngineConfig, SurfaceHost};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the current scene and highlight, recomputes the scene
/// wholesale on every `set_data`, and pushes a fresh frame to its renderer
/// whenever visible state changes. One engine per surface; pointer events
/// are delivered to the instance they belong to.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) area: PlotArea,
    pub(super) scene: Option<Scene>,
    pub(super) highlight: Highlight,
    pub(super) render_count: usize,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let area = config.validate()?;
        Ok(Self {
            renderer,
            config,
            area,
            scene: None,
            highlight: Highlight::None,
            render_count: 0,
        })
    }

    /// Binds a new surface of `config.viewport` size into `container`.
    pub fn create<H>(host: &mut H, container: &str, config: ChartEngineConfig) -> ChartResult<Self>
    where
        H: SurfaceHost<Surface = R>,
    {
        config.validate()?;
        let renderer = host
            .attach_surface(container, config.viewport)
            .ok_or_else(|| ChartError::MissingContainer(container.to_owned()))?;
        Self::new(renderer, config)
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    /// Current scene; `None` until the first successful `set_data`.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.highlight.focus_state()
    }

    /// Number of frames pushed to the renderer so far.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.render_count += 1;
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
