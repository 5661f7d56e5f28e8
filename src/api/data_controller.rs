use tracing::{debug, warn};

use crate::core::{ColorAssigner, Scene, SeriesInput};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces every series and rebuilds the scene over `[domain_min, domain_max]`.
    ///
    /// Each series must carry exactly `domain_max - domain_min + 1` finite
    /// samples. On error, including a failed render of the new scene, the
    /// previously published scene and highlight are left in place. On success
    /// the highlight is cleared and a frame is rendered.
    pub fn set_data(
        &mut self,
        series: Vec<SeriesInput>,
        domain_min: i64,
        domain_max: i64,
    ) -> ChartResult<()> {
        let series_count = series.len();
        let mut colors = ColorAssigner::new(self.config.color_seed);
        let scene = Scene::build(
            series,
            domain_min,
            domain_max,
            self.area,
            &mut colors,
            self.config.scene_config(),
        )
        .inspect_err(|err| {
            warn!(
                error = %err,
                series_count,
                domain_min,
                domain_max,
                "rejected set_data input"
            );
        })?;

        debug!(
            series_count,
            range_min = scene.range.min,
            range_max = scene.range.max,
            "set data"
        );
        let previous_scene = self.scene.replace(scene);
        let previous_highlight = std::mem::take(&mut self.highlight);
        if let Err(err) = self.render() {
            warn!(error = %err, "render of new scene failed; restoring previous scene");
            self.scene = previous_scene;
            self.highlight = previous_highlight;
            return Err(err);
        }
        Ok(())
    }
}
