// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `infinigrid_lattice`: hit testing and recentering.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use infinigrid_geometry::GridGeometry;
use infinigrid_lattice::{Lattice, LatticeShape, SlotPosition};
use kurbo::Size;

fn setup(rows: usize, per_row: usize) -> (Lattice, GridGeometry) {
    let shape = LatticeShape::new(rows, per_row, 20).unwrap();
    let geometry = GridGeometry::from_viewport(
        Size::new(1920.0, 1080.0),
        shape.img_mid_index(),
        shape.row_mid_index(),
    )
    .unwrap();
    (Lattice::with_layout(shape, &geometry), geometry)
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice/hit_test");
    for (rows, per_row) in [(5, 9), (9, 15), (15, 25)] {
        let (lattice, geometry) = setup(rows, per_row);
        let center = geometry.viewport_center;
        group.bench_function(BenchmarkId::new("center", rows * per_row), |b| {
            b.iter(|| black_box(lattice.hit_test(black_box(center), &geometry)));
        });
        let gutter = center + kurbo::Vec2::new(geometry.box_width / 2.0 + geometry.gutter / 2.0, 0.0);
        group.bench_function(BenchmarkId::new("nearest_from_gutter", rows * per_row), |b| {
            b.iter(|| black_box(lattice.nearest_image(black_box(gutter), &geometry)));
        });
    }
    group.finish();
}

fn bench_recenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice/recenter");
    for (rows, per_row) in [(5, 9), (9, 15), (15, 25)] {
        let (lattice, geometry) = setup(rows, per_row);
        let home = lattice.home();

        let neighbor = lattice
            .slot_at(SlotPosition::new(home.row, home.column + 1))
            .unwrap();
        group.bench_function(BenchmarkId::new("one_column", rows * per_row), |b| {
            b.iter_batched(
                || lattice.clone(),
                |mut lattice| black_box(lattice.recenter(neighbor, &geometry)),
                BatchSize::SmallInput,
            );
        });

        let corner = lattice.slot_at(SlotPosition::new(0, 0)).unwrap();
        group.bench_function(BenchmarkId::new("corner", rows * per_row), |b| {
            b.iter_batched(
                || lattice.clone(),
                |mut lattice| black_box(lattice.recenter(corner, &geometry)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_recenter);
criterion_main!(benches);
