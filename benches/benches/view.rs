// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `infinigrid_render`: building and culling a render snapshot.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use infinigrid_geometry::GridGeometry;
use infinigrid_lattice::{Lattice, LatticeShape};
use infinigrid_render::{Gallery, GridView, ImageRecord};
use kurbo::{Size, Vec2};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/view");
    let viewport = Size::new(1920.0, 1080.0);
    let records: Vec<ImageRecord> = (0..30)
        .map(|i| ImageRecord::new(format!("{i}"), format!("/img/{i}.jpg"), format!("Image {i}")))
        .collect();
    let gallery = Gallery::new(records).unwrap();

    for (rows, per_row) in [(5, 9), (9, 15), (15, 25)] {
        let shape = LatticeShape::new(rows, per_row, gallery.len()).unwrap();
        let geometry =
            GridGeometry::from_viewport(viewport, shape.img_mid_index(), shape.row_mid_index())
                .unwrap();
        let lattice = Lattice::with_layout(shape, &geometry);
        let offset = Vec2::new(-137.0, 61.0);
        group.throughput(Throughput::Elements((rows * per_row) as u64));

        group.bench_function(BenchmarkId::new("build", rows * per_row), |b| {
            b.iter(|| black_box(GridView::build(&lattice, &geometry, &gallery, black_box(offset))));
        });

        let view = GridView::build(&lattice, &geometry, &gallery, offset);
        group.bench_function(BenchmarkId::new("visible_in", rows * per_row), |b| {
            b.iter(|| black_box(view.visible_in(viewport.to_rect()).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
