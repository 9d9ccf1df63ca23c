// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless interaction session.
//!
//! Drives an infinite grid through a slow drag, a fling, a wheel pulse, and
//! a resize, printing the centered image after each gesture.
//!
//! Run:
//! - `cargo run -p infinigrid_demos --example headless_session`

use infinigrid::GridConfig;
use infinigrid_demos::{Session, init_tracing, sample_records};
use kurbo::{Point, Size, Vec2};

fn main() {
    init_tracing();

    let viewport = Size::new(1280.0, 800.0);
    let mut session = match Session::new(sample_records(24), viewport, GridConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot build grid: {err}");
            return;
        }
    };
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    println!("start: {}", session.describe_center());

    // One column to the left, slowly.
    let spacing = session.grid.geometry().map_or(0.0, |g| g.horiz_spacing);
    session.drag(center, Vec2::new(-spacing, 0.0), 20, true);
    session.settle(200);
    println!("after drag: {}", session.describe_center());

    // A quick upward flick; the grid coasts and snaps.
    session.drag(center, Vec2::new(40.0, -300.0), 3, false);
    println!("flung: {:?}", session.grid.phase());
    session.settle(500);
    println!(
        "after fling ({} ms): {}",
        session.now_ms(),
        session.describe_center()
    );

    session.wheel(Vec2::new(0.0, 240.0));
    session.settle(100);
    println!("after wheel: {}", session.describe_center());

    session.resize(Size::new(900.0, 700.0));
    session.tick(12);
    println!(
        "after resize (offset {:?}): {}",
        session.grid.offset(),
        session.describe_center()
    );

    let lattice = session.grid.lattice();
    let rows: Vec<usize> = lattice.row_order().iter().map(|id| id.index()).collect();
    println!("row order: {rows:?}, parity phase {}", lattice.parity_phase());
}
