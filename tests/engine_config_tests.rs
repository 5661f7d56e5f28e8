use linechart_rs::api::{ChartEngine, ChartEngineConfig, RenderStyle};
use linechart_rs::core::Viewport;
use linechart_rs::error::ChartErrorCategory;
use linechart_rs::render::{Color, NullRenderer};
use linechart_rs::ChartError;

#[test]
fn config_json_round_trip() {
    let config = ChartEngineConfig::new(Viewport::new(1024, 768))
        .with_label_slot_height_px(16.0)
        .with_series_order_top_index(12)
        .with_overlap_tolerance_ratio(0.02)
        .with_dash_cycles_per_segment(6.0)
        .with_label_packer_step_limit_per_label(4)
        .with_color_seed(99);

    let json = config.to_json_pretty().expect("serialize config");
    let restored = ChartEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_take_defaults() {
    let config = ChartEngineConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
        .expect("parse minimal config");
    assert_eq!(config, ChartEngineConfig::new(Viewport::new(640, 480)));
    assert_eq!(config.label_slot_height_px, 14.0);
    assert_eq!(config.series_order_top_index, 30);
    assert_eq!(config.color_seed, None);
    assert_eq!(config.style, RenderStyle::default());
}

#[test]
fn partial_style_keeps_remaining_defaults() {
    let config = ChartEngineConfig::from_json_str(
        r#"{"viewport":{"width":640,"height":480},"style":{"font_size_px":14.0}}"#,
    )
    .expect("parse config");
    assert_eq!(config.style.font_size_px, 14.0);
    assert_eq!(config.style.tooltip_padding_px, 5.0);
}

#[test]
fn invalid_tuning_is_a_configuration_error() {
    let viewport = Viewport::new(800, 600);
    for config in [
        ChartEngineConfig::new(viewport).with_label_slot_height_px(0.0),
        ChartEngineConfig::new(viewport).with_overlap_tolerance_ratio(-0.1),
        ChartEngineConfig::new(viewport).with_dash_cycles_per_segment(f64::NAN),
        ChartEngineConfig::new(viewport).with_style(RenderStyle {
            font_size_px: 0.0,
            ..RenderStyle::default()
        }),
        ChartEngineConfig::new(viewport).with_style(RenderStyle {
            foreground_color: Color::rgba(2.0, 0.0, 0.0, 1.0),
            ..RenderStyle::default()
        }),
    ] {
        let err = ChartEngine::new(NullRenderer::default(), config)
            .err()
            .expect("invalid config must fail");
        assert_eq!(err.category(), ChartErrorCategory::Configuration, "{err}");
    }
}

#[test]
fn malformed_config_json_is_rejected() {
    let err = ChartEngineConfig::from_json_str("{").expect_err("truncated json");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
