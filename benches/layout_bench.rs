use linechart_rs::api::{ChartEngine, ChartEngineConfig};
use linechart_rs::core::{LabelPackerConfig, SeriesInput, Viewport, pack_label_slots};
use linechart_rs::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_series(count: usize, len: usize) -> Vec<SeriesInput> {
    (0..count)
        .map(|s| {
            let samples = (0..len)
                .map(|i| {
                    let t = i as f64;
                    // Pairs of series share a trend so the overlap pass has work to do.
                    (s / 2) as f64 * 7.5 + (t * 0.3).sin() * 20.0
                })
                .collect();
            SeriesInput::new(format!("series-{s}"), samples)
        })
        .collect()
}

fn bench_set_data_pipeline(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080)).with_color_seed(7);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let series = generated_series(24, 365);

    c.bench_function("set_data_24x365", |b| {
        b.iter(|| {
            engine
                .set_data(black_box(series.clone()), 0, 364)
                .expect("valid data");
        })
    });
}

fn bench_clustered_label_packing(c: &mut Criterion) {
    let anchors: Vec<f64> = (0..200).map(|i| 400.0 + f64::from(i % 17)).collect();
    let config = LabelPackerConfig::for_label_count(14.0, anchors.len(), 8);

    c.bench_function("pack_200_clustered_labels", |b| {
        b.iter(|| {
            let _ = pack_label_slots(black_box(&anchors), config);
        })
    });
}

criterion_group!(benches, bench_set_data_pipeline, bench_clustered_label_packing);
criterion_main!(benches);
