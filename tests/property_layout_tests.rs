use linechart_rs::core::{
    ColorAssigner, DEFAULT_ORDER_TOP_INDEX, DEFAULT_STEP_LIMIT_PER_LABEL, LabelPackerConfig,
    OverlapConfig, PlotArea, RANGE_STEP, Scene, SceneConfig, SeriesInput, ValueRange, Viewport,
    XIndex, pack_label_slots, segments_overlap,
};
use linechart_rs::interaction::hit_test;
use proptest::prelude::*;

fn scene_config() -> SceneConfig {
    SceneConfig {
        label_slot_height: 14.0,
        order_top_index: DEFAULT_ORDER_TOP_INDEX,
        step_limit_per_label: DEFAULT_STEP_LIMIT_PER_LABEL,
        overlap: OverlapConfig::default(),
    }
}

fn series_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..24).prop_flat_map(|len| {
        proptest::collection::vec(
            proptest::collection::vec(-1_000.0f64..1_000.0, len),
            1..8,
        )
    })
}

proptest! {
    #[test]
    fn range_contains_zero_and_every_sample(samples in series_strategy()) {
        let range = ValueRange::from_samples(samples.iter().map(Vec::as_slice));
        prop_assert!(range.min <= 0.0 && range.max >= 0.0);
        prop_assert!(range.max > range.min);
        prop_assert_eq!(range.min % RANGE_STEP, 0.0);
        prop_assert_eq!(range.max % RANGE_STEP, 0.0);
        for value in samples.iter().flatten() {
            prop_assert!(*value >= range.min && *value <= range.max);
        }
    }

    #[test]
    fn x_columns_are_monotonic_and_inside_the_band(
        width in 120u32..2_000,
        height in 120u32..1_200,
        domain_min in -500i64..500,
        span in 0i64..300,
    ) {
        let area = PlotArea::from_viewport(Viewport::new(width, height)).expect("valid viewport");
        let index = XIndex::build(domain_min, domain_min + span, area).expect("valid domain");
        let pixels = index.pixels();
        prop_assert_eq!(pixels.len() as i64, span + 1);
        prop_assert_eq!(pixels[0], area.left());
        for pair in pixels.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert!(index.last_pixel() <= area.right());
    }

    #[test]
    fn packed_label_slots_never_overlap(
        anchors in proptest::collection::vec(0u16..600, 0..40),
    ) {
        let anchors: Vec<f64> = anchors.into_iter().map(f64::from).collect();
        let config = LabelPackerConfig::for_label_count(14.0, anchors.len(), DEFAULT_STEP_LIMIT_PER_LABEL);
        let layout = pack_label_slots(&anchors, config);

        prop_assert_eq!(layout.slots.len(), anchors.len());
        let mut sorted = layout.slots.clone();
        sorted.sort_by(f64::total_cmp);
        for pair in sorted.windows(2) {
            prop_assert!(pair[1] - pair[0] >= 14.0 - 1e-9);
        }

        let again = pack_label_slots(&anchors, config);
        prop_assert_eq!(again, layout);
    }

    #[test]
    fn fractional_label_slots_never_overlap(
        anchors in proptest::collection::vec(0.0f64..600.0, 0..30),
        height in 5.0f64..30.0,
    ) {
        let config = LabelPackerConfig::for_label_count(height, anchors.len(), DEFAULT_STEP_LIMIT_PER_LABEL);
        let layout = pack_label_slots(&anchors, config);

        prop_assert!(!layout.degraded);
        prop_assert_eq!(layout.slots.len(), anchors.len());
        let mut sorted = layout.slots.clone();
        sorted.sort_by(f64::total_cmp);
        for pair in sorted.windows(2) {
            prop_assert!(pair[1] - pair[0] >= height - 1e-6);
        }
    }

    #[test]
    fn overlap_relation_is_symmetric(
        a in proptest::collection::vec(0.0f64..600.0, 2..12),
        b in proptest::collection::vec(0.0f64..600.0, 2..12),
        ratio in 0.0f64..0.05,
    ) {
        let segments = a.len().min(b.len()) - 1;
        for segment in 0..segments {
            prop_assert_eq!(
                segments_overlap(&a, &b, segment, ratio),
                segments_overlap(&b, &a, segment, ratio)
            );
        }
    }

    #[test]
    fn scene_is_deterministic_and_hits_are_in_bounds(
        samples in series_strategy(),
        px in 0.0f64..800.0,
        py in 0.0f64..600.0,
    ) {
        let area = PlotArea::from_viewport(Viewport::new(800, 600)).expect("valid viewport");
        let domain_max = samples[0].len() as i64 - 1;
        let inputs: Vec<SeriesInput> = samples
            .iter()
            .enumerate()
            .map(|(i, s)| SeriesInput::new(format!("s{i}"), s.clone()))
            .collect();

        let first = Scene::build(inputs.clone(), 0, domain_max, area, &mut ColorAssigner::new(Some(3)), scene_config())
            .expect("valid scene");
        let second = Scene::build(inputs, 0, domain_max, area, &mut ColorAssigner::new(Some(3)), scene_config())
            .expect("valid scene");
        prop_assert_eq!(&first, &second);

        for line in &first.lines {
            for &y in line {
                prop_assert!(y >= area.top() && y <= area.bottom());
            }
        }

        let highlight = hit_test(&first, px, py);
        for point in highlight.points() {
            prop_assert!(point.series < first.series.len());
            prop_assert!(point.sample < first.sample_count());
        }
    }
}
