use tracing::{trace, warn};

use crate::interaction::{Highlight, PointerEvent, hit_test};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Hit-tests surface coordinates and re-renders when the highlight changed.
    ///
    /// Returns `true` when the highlight changed. Never fails: coordinates
    /// outside every target resolve to the unfocused state, and renderer
    /// errors are logged.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let next = match &self.scene {
            Some(scene) => hit_test(scene, x, y),
            None => Highlight::None,
        };
        if next.is_empty() {
            return self.unfocus();
        }
        if next == self.highlight {
            return false;
        }

        trace!(x, y, highlight = ?next, "focus changed");
        self.highlight = next;
        self.render_after_interaction();
        true
    }

    /// Clears the highlight. A no-op, without rendering, when nothing is
    /// highlighted.
    pub fn unfocus(&mut self) -> bool {
        if self.highlight.is_empty() {
            return false;
        }
        trace!("unfocus");
        self.highlight = Highlight::None;
        self.render_after_interaction();
        true
    }

    /// Dispatches one event from this chart's pointer-event source.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Leave => self.unfocus(),
        }
    }

    fn render_after_interaction(&mut self) {
        if let Err(err) = self.render() {
            warn!(error = %err, "render after pointer interaction failed");
        }
    }
}
