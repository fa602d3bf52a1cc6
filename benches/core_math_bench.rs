use criterion::{Criterion, criterion_group, criterion_main};
use sparkline_rs::config::{ConfigFragment, SparklineConfig};
use sparkline_rs::core::{LinearScale, SparklineMapper, Viewport};
use std::hint::black_box;

fn bench_linear_scale_apply(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (2.0, 1_918.0)).expect("valid scale");

    c.bench_function("linear_scale_apply", |b| {
        b.iter(|| black_box(scale.apply(black_box(4_321.123))))
    });
}

fn bench_sparkline_map_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 120);
    let data: Vec<f64> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.05).sin() * 25.0
        })
        .collect();
    let mapper = SparklineMapper::new(SparklineConfig::default());

    c.bench_function("sparkline_map_10k", |b| {
        b.iter(|| {
            let _ = mapper
                .map(black_box(&data), black_box(viewport))
                .expect("mapping should succeed");
        })
    });
}

fn bench_sparkline_map_area_band_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 120);
    let data: Vec<f64> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.05).sin() * 25.0
        })
        .collect();
    let config = SparklineConfig::from_fragment(
        &ConfigFragment::default()
            .with_area_fill("#def")
            .with_range_min(90.0)
            .with_range_max(110.0)
            .with_range_fill("#eef")
            .with_dot_radius(0.0),
    );
    let mapper = SparklineMapper::new(config);

    c.bench_function("sparkline_map_area_band_10k", |b| {
        b.iter(|| {
            let _ = mapper
                .map(black_box(&data), black_box(viewport))
                .expect("mapping should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_apply,
    bench_sparkline_map_10k,
    bench_sparkline_map_area_band_10k
);
criterion_main!(benches);
