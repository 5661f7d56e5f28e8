use crate::core::{DashPattern, Scene, vertical_scale};
use crate::interaction::Highlight;
use crate::render::{
    DotPrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartEngine, RenderStyle, format_sample_value};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current scene and highlight into backend-agnostic
    /// primitives. Without a scene only the background is emitted.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let style = self.config.style;
        let mut frame = RenderFrame::new(self.config.viewport);
        frame.rects.push(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(self.config.viewport.width),
            f64::from(self.config.viewport.height),
            style.background_color,
        ));

        let Some(scene) = self.scene.as_ref() else {
            return frame;
        };

        push_axes(&mut frame, scene, &style);
        push_series_lines(&mut frame, scene, &self.highlight, &style);
        push_series_labels(&mut frame, scene, &self.highlight, &style);
        self.push_highlight_overlay(&mut frame, scene, &style);
        frame
    }

    fn push_highlight_overlay(&self, frame: &mut RenderFrame, scene: &Scene, style: &RenderStyle) {
        let pad = style.tooltip_padding_px;
        let box_height = style.font_size_px + 2.0 * pad;

        for point in self.highlight.points() {
            let (Some(&x), Some(&y), Some(series)) = (
                scene.x_index.pixels().get(point.sample),
                scene.lines.get(point.series).and_then(|line| line.get(point.sample)),
                scene.series.get(point.series),
            ) else {
                continue;
            };

            frame.dots.push(DotPrimitive::new(x, y, style.dot_radius_px, series.color));

            let value = series.samples.get(point.sample).copied().unwrap_or_default();
            let text = format_sample_value(value);
            let box_width =
                self.renderer.measure_text_width(&text, style.font_size_px) + 2.0 * pad;
            let box_x = x - (box_width / 2.0).floor();
            let box_y = y - box_height;
            frame.overlay_rects.push(RectPrimitive::new(
                box_x,
                box_y,
                box_width,
                box_height,
                style.tooltip_box_color,
            ));
            frame.texts.push(TextPrimitive::new(
                text,
                box_x + pad,
                box_y + pad,
                style.font_size_px,
                style.foreground_color,
                TextHAlign::Left,
            ));
        }

        let mut labelled: Vec<usize> = Vec::new();
        for point in self.highlight.points() {
            if labelled.contains(&point.series) {
                continue;
            }
            labelled.push(point.series);
            let Some(series) = scene.series.get(point.series) else {
                continue;
            };
            if series.label.is_empty() {
                continue;
            }

            let x = label_x(scene);
            let y = series.label_slot;
            let width = self.renderer.measure_text_width(&series.label, style.font_size_px);
            frame.overlay_rects.push(RectPrimitive::new(
                x - pad,
                y - pad,
                width + 2.0 * pad,
                box_height,
                style.tooltip_box_color,
            ));
            frame.texts.push(TextPrimitive::new(
                series.label.clone(),
                x,
                y,
                style.font_size_px,
                style.foreground_color,
                TextHAlign::Left,
            ));
        }
    }
}

fn push_axes(frame: &mut RenderFrame, scene: &Scene, style: &RenderStyle) {
    let area = scene.area;
    let pad = area.padding;
    let tick = (pad / 4.0).floor();
    let bottom = area.bottom();
    let zero_y = vertical_scale(scene.range, area)
        .map(|scale| scale.domain_to_pixel(0.0))
        .unwrap_or(bottom);
    let axis_line = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, style.axis_stroke_width, style.foreground_color)
    };

    frame.lines.push(axis_line(area.left() - tick, area.top(), area.left() + tick, area.top()));
    frame.texts.push(TextPrimitive::new(
        format_sample_value(scene.range.max),
        (pad * 3.0 / 2.0).floor(),
        area.top(),
        style.font_size_px,
        style.foreground_color,
        TextHAlign::Left,
    ));

    let (domain_min, _) = scene.domain();
    let guide_dash = DashPattern::alternating(2.0, pad);
    for (index, &x) in scene.x_index.pixels().iter().enumerate() {
        let value = domain_min + index as i64;
        frame.texts.push(TextPrimitive::new(
            value.to_string(),
            x - tick,
            bottom + 2.0 * tick,
            style.font_size_px,
            style.foreground_color,
            TextHAlign::Left,
        ));
        if index == 0 {
            continue;
        }
        frame.lines.push(
            LinePrimitive::new(
                x,
                area.top(),
                x,
                bottom,
                style.axis_stroke_width,
                style.guide_line_color,
            )
            .with_dash(Some(guide_dash.clone())),
        );
        frame.lines.push(axis_line(x, zero_y - tick, x, zero_y + tick));
    }

    // Axes go over the guides.
    frame.lines.push(axis_line(area.left(), area.top(), area.left(), bottom));
    frame.lines.push(axis_line(area.left(), zero_y, area.right(), zero_y));
}

fn push_series_lines(
    frame: &mut RenderFrame,
    scene: &Scene,
    highlight: &Highlight,
    style: &RenderStyle,
) {
    let xs = scene.x_index.pixels();
    for (index, (series, line)) in scene.series.iter().zip(&scene.lines).enumerate() {
        let stroke_width = if highlight.contains_series(index) {
            style.highlighted_series_stroke_width
        } else {
            style.series_stroke_width
        };
        for segment in 0..scene.segment_count() {
            let dash = scene
                .effective_dash_pattern(index, segment, highlight)
                .cloned();
            frame.lines.push(
                LinePrimitive::new(
                    xs[segment],
                    line[segment],
                    xs[segment + 1],
                    line[segment + 1],
                    stroke_width,
                    series.color,
                )
                .with_dash(dash),
            );
        }
    }
}

fn push_series_labels(
    frame: &mut RenderFrame,
    scene: &Scene,
    highlight: &Highlight,
    style: &RenderStyle,
) {
    let x = label_x(scene);
    for (index, series) in scene.series.iter().enumerate() {
        // Highlighted labels are drawn on the overlay instead.
        if highlight.contains_series(index) || series.label.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            series.label.clone(),
            x,
            series.label_slot,
            style.font_size_px,
            style.foreground_color,
            TextHAlign::Left,
        ));
    }
}

fn label_x(scene: &Scene) -> f64 {
    scene.x_index.last_pixel() + (scene.area.padding / 4.0).floor()
}
