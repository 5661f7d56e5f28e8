use linechart_rs::core::{
    ColorAssigner, DEFAULT_PALETTE, RANGE_STEP, SeriesInput, ValueRange, calculate_bounds,
    palette_color,
};
use linechart_rs::render::Color;

#[test]
fn bounds_include_zero_and_round_outward() {
    let mut colors = ColorAssigner::new(Some(7));
    let (series, range) = calculate_bounds(
        vec![
            SeriesInput::new("a", vec![0.0, 5.0, 10.0, 20.0, 30.0]),
            SeriesInput::new("b", vec![-10.0, -5.0, 0.0, 5.0, 10.0]),
        ],
        &mut colors,
    );

    assert_eq!(range, ValueRange { min: -10.0, max: 30.0 });
    assert_eq!(series[0].color, Color::parse_css("#C00").expect("palette color"));
    assert_eq!(series[1].color, Color::parse_css("#00C").expect("palette color"));
}

#[test]
fn positive_only_data_still_starts_at_zero() {
    let range = ValueRange::from_samples([[3.0, 41.5, 17.0].as_slice()]);
    assert_eq!(range, ValueRange { min: 0.0, max: 50.0 });
}

#[test]
fn negative_only_data_still_ends_at_zero() {
    let range = ValueRange::from_samples([[-0.5, -12.0].as_slice()]);
    assert_eq!(range, ValueRange { min: -20.0, max: 0.0 });
}

#[test]
fn all_zero_data_widens_to_one_step() {
    let range = ValueRange::from_samples([[0.0, 0.0, 0.0].as_slice()]);
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, RANGE_STEP);
    assert!(range.span() > 0.0);
}

#[test]
fn explicit_colors_do_not_consume_palette_entries() {
    let explicit = Color::parse_css("#123456").expect("valid color");
    let mut colors = ColorAssigner::new(None);
    let (series, _) = calculate_bounds(
        vec![
            SeriesInput::new("explicit", vec![1.0]).with_color(explicit),
            SeriesInput::new("auto", vec![2.0]),
        ],
        &mut colors,
    );

    assert_eq!(series[0].color, explicit);
    assert_eq!(series[1].color, palette_color(0).expect("first palette entry"));
}

#[test]
fn palette_exhaustion_falls_back_to_seeded_random_colors() {
    let inputs: Vec<SeriesInput> = (0..DEFAULT_PALETTE.len() + 3)
        .map(|i| SeriesInput::new(format!("s{i}"), vec![i as f64]))
        .collect();

    let (first, _) = calculate_bounds(inputs.clone(), &mut ColorAssigner::new(Some(42)));
    let (second, _) = calculate_bounds(inputs, &mut ColorAssigner::new(Some(42)));

    for (index, series) in first.iter().take(DEFAULT_PALETTE.len()).enumerate() {
        assert_eq!(Some(series.color), palette_color(index));
    }
    for (a, b) in first.iter().zip(&second).skip(DEFAULT_PALETTE.len()) {
        assert_eq!(a.color, b.color);
        a.color.validate().expect("random color is valid");
    }
}
