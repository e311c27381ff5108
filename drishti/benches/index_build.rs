//! Benchmark rasterization, visibility sweeps and index building.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use drishti::core::{CORRIDOR_KIND, SHOP_KIND};
use drishti::index::IndexConfig;
use drishti::{
    Annotation, IndexBuilder, SensorConfig, VisibilitySensor, WorldPoint, build_grid,
};

/// Two rows of shops along a C-shaped corridor.
fn mall(shops_per_side: usize) -> Vec<Annotation> {
    let shop = 12.0;
    let span = shops_per_side as f64 * shop;
    let mut map = Vec::new();

    for i in 0..shops_per_side {
        let x = i as f64 * shop;
        for (y0, y1, side) in [(-shop, 0.0, "s"), (span, span + shop, "n")] {
            map.push(Annotation::from_points(
                &[(x, y0), (x + shop, y0), (x + shop, y1), (x, y1)],
                format!("Shop {}{}", side, i),
                SHOP_KIND,
            ));
        }
    }

    let inner = 8.0;
    map.push(Annotation::from_points(
        &[
            (0.0, 0.0),
            (span, 0.0),
            (span, span),
            (0.0, span),
            (0.0, inner),
            (span - inner, inner),
            (span - inner, span - inner),
            (0.0, span - inner),
        ],
        "loop",
        CORRIDOR_KIND,
    ));
    map
}

fn bench_rasterize(c: &mut Criterion) {
    let map = mall(10);
    c.bench_function("rasterize_mall_10", |b| {
        b.iter(|| {
            let result = build_grid(black_box(&map), 1.0);
            black_box(result)
        })
    });
}

fn bench_sensor_sweep(c: &mut Criterion) {
    let map = mall(10);
    let (grid, bounds) = build_grid(&map, 1.0).unwrap();

    let mut group = c.benchmark_group("sensor_sweep_radius");
    for radius in [25u32, 50, 100].iter() {
        let sensor = VisibilitySensor::new(&grid, &bounds, SensorConfig::with_fov(60.0, *radius))
            .unwrap();
        let origin = WorldPoint::new(4.0, 4.0);
        group.bench_with_input(BenchmarkId::from_parameter(radius), radius, |b, _| {
            b.iter(|| {
                let seen = sensor.sample_ids(black_box(origin), black_box(45.0));
                black_box(seen)
            })
        });
    }
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let map = mall(6);
    let (grid, bounds) = build_grid(&map, 1.0).unwrap();
    let corridors: Vec<Annotation> = map.iter().filter(|a| a.is_corridor()).cloned().collect();

    let mut group = c.benchmark_group("index_build");
    group.sample_size(10);
    for parallel in [false, true].iter() {
        let builder = IndexBuilder::new(
            SensorConfig::default(),
            IndexConfig {
                parallel: *parallel,
                edge_subdivisions: 4,
                ..Default::default()
            },
        );
        let name = if *parallel { "parallel" } else { "sequential" };
        group.bench_with_input(BenchmarkId::from_parameter(name), parallel, |b, _| {
            b.iter(|| {
                let index = builder.build(black_box(&corridors), &grid, &bounds);
                black_box(index)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rasterize, bench_sensor_sweep, bench_index_build);
criterion_main!(benches);
