//! Criterion benchmarks for pie-chart encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stimulus_geometry::{render_svg, segments, PieLayout};

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let probs = [0.08, 0.65, 0.27];
    let payoffs = [20.0, 4.77, -10.0];

    group.bench_function("segments", |b| {
        b.iter(|| segments(black_box(&probs), black_box(&payoffs)).unwrap());
    });

    let layout = PieLayout::default();
    let slices = segments(&probs, &payoffs).unwrap();
    group.bench_function("render_svg", |b| {
        b.iter(|| render_svg(black_box(&slices), black_box(&layout)));
    });

    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
