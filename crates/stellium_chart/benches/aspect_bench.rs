use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stellium_chart::{ChartConfig, DEFAULT_ASPECTS, compute_chart, detect};
use stellium_core::{ALL_BODIES, Ephemeris, PositionFlags};
use stellium_mean::MeanEphemeris;
use stellium_time::Moment;

fn aspect_detection_bench(c: &mut Criterion) {
    let eph = MeanEphemeris::new();
    let moment = Moment::from_jd_ut(2_451_545.0);
    let bodies: Vec<_> = ALL_BODIES[..10].to_vec();
    let longitudes: Vec<f64> = bodies
        .iter()
        .map(|&b| {
            eph.position(moment, b, PositionFlags::default())
                .expect("position should resolve")
                .lon_deg
        })
        .collect();

    let mut group = c.benchmark_group("aspects");
    group.bench_function("detect_10_bodies", |b| {
        b.iter(|| detect(black_box(&bodies), black_box(&longitudes), &DEFAULT_ASPECTS))
    });
    group.finish();
}

fn full_chart_bench(c: &mut Criterion) {
    let eph = MeanEphemeris::new();
    let moment = Moment::from_jd_ut(2_451_545.0);
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart_no_location", |b| {
        b.iter(|| {
            compute_chart(black_box(&eph), black_box(moment), None, black_box(&config))
                .expect("chart should compute")
        })
    });
    group.finish();
}

criterion_group!(benches, aspect_detection_bench, full_chart_bench);
criterion_main!(benches);
