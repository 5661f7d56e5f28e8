use indexmap::IndexMap;

use crate::core::Viewport;
use crate::render::{NullRenderer, Renderer};

/// Environment that owns containers and can bind drawing surfaces into them.
pub trait SurfaceHost {
    type Surface: Renderer;

    /// Creates a surface of `viewport` size inside `container`.
    ///
    /// Returns `None` when `container` does not resolve.
    fn attach_surface(&mut self, container: &str, viewport: Viewport) -> Option<Self::Surface>;
}

/// In-memory host handing out [`NullRenderer`] surfaces.
///
/// Containers keep insertion order, and each records the surfaces attached
/// to it.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    containers: IndexMap<String, Vec<Viewport>>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, name: impl Into<String>) -> Self {
        self.register_container(name);
        self
    }

    pub fn register_container(&mut self, name: impl Into<String>) {
        self.containers.entry(name.into()).or_default();
    }

    #[must_use]
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    /// Surfaces attached to `container`, oldest first.
    #[must_use]
    pub fn attached_surfaces(&self, container: &str) -> &[Viewport] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl SurfaceHost for HeadlessHost {
    type Surface = NullRenderer;

    fn attach_surface(&mut self, container: &str, viewport: Viewport) -> Option<Self::Surface> {
        self.containers.get_mut(container)?.push(viewport);
        Some(NullRenderer::default())
    }
}
