// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end frame cost of `InfiniteGrid` during a fling.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use infinigrid::{GridConfig, InfiniteGrid, Phase};
use infinigrid_motion::TweenEngine;
use infinigrid_render::ImageRecord;
use kurbo::{Point, Size, Vec2};

fn flung_grid() -> InfiniteGrid<TweenEngine> {
    let records = (0..24)
        .map(|i| ImageRecord::new(format!("{i}"), format!("/img/{i}.jpg"), format!("Image {i}")))
        .collect();
    let mut grid = InfiniteGrid::new(
        records,
        Size::new(1920.0, 1080.0),
        TweenEngine::new(),
        GridConfig::default(),
    )
    .unwrap();
    let from = Point::new(960.0, 540.0);
    grid.pointer_down(from, 0);
    for i in 1..=3_u32 {
        let now = u64::from(i) * 16;
        grid.frame(now);
        grid.pointer_move(from + Vec2::new(-150.0, -90.0) * f64::from(i), now);
    }
    grid.pointer_up(from + Vec2::new(-450.0, -270.0), 48);
    grid
}

fn bench_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/fling");

    group.bench_function("frames_until_idle", |b| {
        b.iter_batched(
            flung_grid,
            |mut grid| {
                let mut now = 48;
                while grid.phase() != Phase::Idle && now < 10_000 {
                    now += 16;
                    grid.frame(now);
                }
                black_box(grid.offset())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("frame_and_view", |b| {
        b.iter_batched(
            flung_grid,
            |mut grid| {
                grid.frame(64);
                black_box(grid.view().map(|view| view.rows.len()))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_fling);
criterion_main!(benches);
