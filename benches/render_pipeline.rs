use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use quartic_explorer::bench_support::{QuarticAlgorithm, fill_frame_grid_rayon, fill_frame_grid_serial};
use quartic_explorer::{FrameGrid, GridSize, Viewport};

fn bench_fill_frame_grid(c: &mut Criterion) {
    let size = GridSize::new(800, 600).expect("valid bench grid");
    let viewport = Viewport::default();
    let algorithm = QuarticAlgorithm::new(size, viewport.center(), viewport.zoom(), viewport.depth_cap());
    let mut grid = FrameGrid::new(size);

    let mut group = c.benchmark_group("fill_frame_grid");
    group.sample_size(20);

    group.bench_with_input(BenchmarkId::new("rayon", "800x600"), &algorithm, |b, algorithm| {
        b.iter(|| fill_frame_grid_rayon(black_box(&mut grid), algorithm));
    });

    group.bench_with_input(BenchmarkId::new("serial", "800x600"), &algorithm, |b, algorithm| {
        b.iter(|| fill_frame_grid_serial(black_box(&mut grid), algorithm));
    });

    group.finish();
}

criterion_group!(benches, bench_fill_frame_grid);
criterion_main!(benches);
