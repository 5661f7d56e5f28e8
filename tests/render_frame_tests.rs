use approx::assert_relative_eq;
use linechart_rs::api::{ChartEngine, ChartEngineConfig};
use linechart_rs::core::{SeriesInput, Viewport, palette_color};
use linechart_rs::render::{NullRenderer, RenderFrame};

fn engine_with(series: Vec<SeriesInput>, domain_max: i64) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 600)),
    )
    .expect("engine init");
    engine.set_data(series, 0, domain_max).expect("valid data");
    engine
}

fn last_frame(engine: &ChartEngine<NullRenderer>) -> &RenderFrame {
    engine.renderer().last_frame.as_ref().expect("rendered frame")
}

fn distant_series() -> Vec<SeriesInput> {
    vec![
        SeriesInput::new("a", vec![0.0, 5.0, 10.0, 20.0, 30.0]),
        SeriesInput::new("b", vec![-10.0, -5.0, 0.0, 5.0, 10.0]),
    ]
}

#[test]
fn frame_without_data_is_background_only() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 600)),
    )
    .expect("engine init");
    let frame = engine.build_render_frame();
    assert!(!frame.is_empty());
    assert_eq!(frame.rects.len(), 1);
    assert!(frame.lines.is_empty());
    assert!(frame.texts.is_empty());
}

#[test]
fn unfocused_frame_contains_axes_series_and_labels() {
    let engine = engine_with(distant_series(), 4);
    let frame = last_frame(&engine);

    let background = frame.rects[0];
    assert_eq!((background.width, background.height), (800.0, 600.0));

    // topper + (guide + tick) per non-first column + two axes + 4 segments per series
    assert_eq!(frame.lines.len(), 1 + 2 * 4 + 2 + 2 * 4);
    assert!(frame.overlay_rects.is_empty());
    assert!(frame.dots.is_empty());

    let zero_line = frame
        .lines
        .iter()
        .find(|l| l.y1 == 435.0 && l.y2 == 435.0 && l.x1 == 12.0)
        .expect("zero line");
    assert_eq!(zero_line.x2, 704.0);

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["30", "0", "1", "2", "3", "4", "a", "b"]);

    let label_b = frame.texts.iter().find(|t| t.text == "b").expect("label b");
    assert_eq!((label_b.x, label_b.y), (707.0, 294.0));
}

#[test]
fn highlight_overlay_shows_rounded_value_and_side_label() {
    let mut engine = engine_with(
        vec![
            SeriesInput::new("a", vec![0.0, 5.0, 10.004, 20.0, 30.0]),
            SeriesInput::new("b", vec![-10.0, -5.0, 0.0, 5.0, 10.0]),
        ],
        4,
    );
    assert!(engine.pointer_move(358.0, 294.0));
    let frame = last_frame(&engine);

    assert_eq!(frame.dots.len(), 1);
    assert_eq!((frame.dots[0].x, frame.dots[0].y), (358.0, 294.0));
    assert_eq!(Some(frame.dots[0].color), palette_color(0));

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["30", "0", "1", "2", "3", "4", "b", "10", "a"]);

    assert_eq!(frame.overlay_rects.len(), 2);
    let tooltip = frame.overlay_rects[0];
    // "10" at 12px is estimated at 14.4px wide, plus 5px padding each side.
    assert_relative_eq!(tooltip.width, 24.4, epsilon = 1e-9);
    assert_relative_eq!(tooltip.x, 346.0, epsilon = 1e-9);
    assert_relative_eq!(tooltip.y, 272.0, epsilon = 1e-9);
    assert_relative_eq!(tooltip.height, 22.0, epsilon = 1e-9);

    let color_a = palette_color(0).expect("palette");
    assert!(
        frame
            .lines
            .iter()
            .filter(|l| l.color == color_a)
            .all(|l| l.stroke_width == 3.0)
    );
}

#[test]
fn coincident_series_are_dashed_until_highlighted() {
    let mut engine = engine_with(
        vec![
            SeriesInput::new("a", vec![10.0, 20.0, 30.0]),
            SeriesInput::new("b", vec![10.0, 20.0, 30.0]),
        ],
        2,
    );
    let colors = [
        palette_color(0).expect("palette"),
        palette_color(1).expect("palette"),
    ];
    let series_lines = |frame: &RenderFrame| {
        frame
            .lines
            .iter()
            .filter(|l| colors.contains(&l.color))
            .cloned()
            .collect::<Vec<_>>()
    };

    let unfocused = series_lines(last_frame(&engine));
    assert_eq!(unfocused.len(), 4);
    assert!(unfocused.iter().all(|l| l.dash.is_some()));

    assert!(engine.pointer_move(358.0, 200.0));
    let focused = series_lines(last_frame(&engine));
    assert!(focused.iter().all(|l| l.dash.is_none()));
}
