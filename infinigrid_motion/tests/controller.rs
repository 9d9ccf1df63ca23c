// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `InteractionController` driven through the public API only.

use infinigrid_motion::{
    Animator, CenterTracker, InteractionController, MotionConfig, Phase, TargetId, TweenEngine,
};
use kurbo::{Point, Vec2};
use proptest::prelude::*;

/// A square lattice of `pitch`-sized cells; counts recentering calls.
struct Cells {
    pitch: f64,
    home: (i64, i64),
    recenters: usize,
    checks: usize,
}

impl Cells {
    fn new(pitch: f64) -> Self {
        Self {
            pitch,
            home: (0, 0),
            recenters: 0,
            checks: 0,
        }
    }

    fn cell_of(&self, offset: Vec2) -> (i64, i64) {
        (
            (-offset.x / self.pitch).round() as i64,
            (-offset.y / self.pitch).round() as i64,
        )
    }
}

impl CenterTracker for Cells {
    fn track_center(&mut self, offset: Vec2) -> bool {
        self.checks += 1;
        let cell = self.cell_of(offset);
        if cell == self.home {
            return false;
        }
        self.home = cell;
        self.recenters += 1;
        true
    }

    fn snap_correction(&self, offset: Vec2) -> Option<Vec2> {
        let (cx, cy) = self.cell_of(offset);
        let target = Vec2::new(-(cx as f64) * self.pitch, -(cy as f64) * self.pitch);
        Some(target - offset)
    }
}

fn rigid() -> MotionConfig {
    MotionConfig {
        drag_resistance: 0.0,
        ..MotionConfig::default()
    }
}

fn controller() -> InteractionController<TweenEngine> {
    InteractionController::new(TweenEngine::new(), TargetId(1), rigid())
}

/// Presses at `from` and drags by `delta` over `frames` frames of 16 ms,
/// starting at `start`. Returns the time of the last move.
fn drag_to(
    c: &mut InteractionController<TweenEngine>,
    cells: &mut Cells,
    from: Point,
    delta: Vec2,
    frames: u32,
    start: u64,
) -> u64 {
    assert!(c.pointer_down(from, start));
    let mut now = start;
    for i in 1..=frames {
        now += 16;
        c.frame(now, cells);
        let p = from + delta * (f64::from(i) / f64::from(frames));
        c.pointer_move(p, now, cells);
    }
    now
}

/// Runs frames for `ms` without moving the pointer.
fn hold(
    c: &mut InteractionController<TweenEngine>,
    cells: &mut Cells,
    mut now: u64,
    ms: u64,
) -> u64 {
    let end = now + ms;
    while now < end {
        now += 16;
        c.frame(now, cells);
    }
    now
}

/// Drags, holds still long enough to shed velocity, and releases.
fn drag_and_release_slowly(
    c: &mut InteractionController<TweenEngine>,
    cells: &mut Cells,
    delta: Vec2,
    start: u64,
) -> u64 {
    let from = Point::new(0.0, 0.0);
    let now = drag_to(c, cells, from, delta, 4, start);
    let now = hold(c, cells, now, 160);
    c.pointer_up(from + delta, now, cells);
    now
}

/// Drags and releases on the last move.
fn fling(
    c: &mut InteractionController<TweenEngine>,
    cells: &mut Cells,
    from: Point,
    delta: Vec2,
    frames: u32,
) -> u64 {
    let now = drag_to(c, cells, from, delta, frames, 0);
    c.pointer_up(from + delta, now, cells);
    now
}

#[test]
fn pointer_down_during_snap_cancels_in_the_same_frame() {
    let mut c = controller();
    let mut cells = Cells::new(200.0);

    let now = drag_and_release_slowly(&mut c, &mut cells, Vec2::new(-70.0, 0.0), 0);
    assert_eq!(c.phase(), Phase::SnappingBack);

    c.frame(now + 50, &mut cells);
    let mid_snap = c.offset();
    assert_eq!(c.phase(), Phase::SnappingBack);

    assert!(c.pointer_down(Point::new(300.0, 300.0), now + 50));
    assert_eq!(c.phase(), Phase::Dragging);
    assert_eq!(c.offset(), mid_snap);

    for i in 1..=40 {
        c.frame(now + 50 + i * 16, &mut cells);
        assert_eq!(c.offset(), mid_snap, "old tween still moving the grid");
    }
    assert_eq!(c.phase(), Phase::Dragging);
}

#[test]
fn tap_during_snap_releases_without_momentum() {
    let mut c = controller();
    let mut cells = Cells::new(200.0);
    let now = drag_and_release_slowly(&mut c, &mut cells, Vec2::new(-70.0, 0.0), 0);
    c.frame(now + 16, &mut cells);
    c.frame(now + 32, &mut cells);

    let tap = Point::new(40.0, 40.0);
    assert!(c.pointer_down(tap, now + 32));
    c.frame(now + 48, &mut cells);
    c.pointer_up(tap, now + 48, &mut cells);
    assert_eq!(c.phase(), Phase::SnappingBack);
    assert_eq!(c.animator().velocity(TargetId(1)), Vec2::ZERO);
}

#[test]
fn default_drag_trails_the_pointer() {
    let mut c =
        InteractionController::new(TweenEngine::new(), TargetId(1), MotionConfig::default());
    let mut cells = Cells::new(1.0e9);
    drag_to(&mut c, &mut cells, Point::ZERO, Vec2::new(-100.0, 50.0), 4, 0);
    assert!((c.offset() - Vec2::new(-80.0, 40.0)).hypot() < 1e-9);
}

#[test]
fn pointer_down_during_throw_cancels_coasting() {
    let mut c = controller();
    let mut cells = Cells::new(200.0);
    let now = fling(&mut c, &mut cells, Point::ZERO, Vec2::new(-300.0, 0.0), 5);
    assert_eq!(c.phase(), Phase::Throwing);

    c.frame(now + 16, &mut cells);
    let held = c.offset();
    assert!(c.pointer_down(Point::new(10.0, 10.0), now + 20));
    c.frame(now + 200, &mut cells);
    assert_eq!(c.offset(), held);
    assert_eq!(c.phase(), Phase::Dragging);
}

#[test]
fn wheel_during_snap_replaces_the_snap() {
    let mut c = controller();
    let mut cells = Cells::new(200.0);
    let now = drag_and_release_slowly(&mut c, &mut cells, Vec2::new(-50.0, 0.0), 0);
    assert_eq!(c.phase(), Phase::SnappingBack);

    c.wheel(Vec2::new(0.0, 40.0), now + 10);
    assert_eq!(c.phase(), Phase::Scrolling);
    assert_eq!(c.animator().running_count(), 1);
}

#[test]
fn center_detection_runs_during_snap() {
    let mut c = controller();
    let mut cells = Cells::new(100.0);
    // Release just short of the half-way point of the next cell.
    let now = drag_and_release_slowly(&mut c, &mut cells, Vec2::new(-45.0, 0.0), 0);
    let checks = cells.checks;
    for i in 1..=20 {
        c.frame(now + i * 16, &mut cells);
    }
    assert_eq!(c.phase(), Phase::Idle);
    assert!(cells.checks > checks + 10);
    assert_eq!(c.offset(), Vec2::ZERO);
}

#[test]
fn throw_speed_is_clamped() {
    let config = MotionConfig {
        max_throw_speed: 1_000.0,
        ..rigid()
    };
    let mut c = InteractionController::new(TweenEngine::new(), TargetId(1), config);
    let mut cells = Cells::new(10_000.0);
    let now = fling(&mut c, &mut cells, Point::ZERO, Vec2::new(-2_000.0, 0.0), 2);
    assert_eq!(c.phase(), Phase::Throwing);
    let released = c.offset();

    let mut t = now;
    while c.phase() == Phase::Throwing {
        t += 16;
        c.frame(t, &mut cells);
    }
    // At most max_speed * tau of coasting.
    assert!((c.offset() - released).hypot() <= 500.0 + 1e-6);
}

proptest! {
    #[test]
    fn wheel_moves_only_the_dominant_axis(dx in -500.0_f64..500.0, dy in -500.0_f64..500.0) {
        prop_assume!(dx != 0.0 || dy != 0.0);
        let mut c = controller();
        let mut cells = Cells::new(1.0e9);
        c.wheel(Vec2::new(dx, dy), 0);
        c.frame(c.config().scroll_smoothing_ms, &mut cells);

        let offset = c.offset();
        if dx.abs() > dy.abs() {
            prop_assert!((offset.x + dx * 1.5).abs() < 1e-9);
            prop_assert_eq!(offset.y, 0.0);
        } else {
            prop_assert_eq!(offset.x, 0.0);
            prop_assert!((offset.y + dy * 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn every_motion_settles_to_idle_on_a_cell(
        dx in -900.0_f64..900.0,
        dy in -900.0_f64..900.0,
        frames in 1_u32..12,
    ) {
        let mut c = controller();
        let mut cells = Cells::new(250.0);
        let mut now = fling(&mut c, &mut cells, Point::new(500.0, 500.0), Vec2::new(dx, dy), frames);
        for _ in 0..1_000 {
            if c.phase() == Phase::Idle {
                break;
            }
            now += 16;
            c.frame(now, &mut cells);
        }
        prop_assert_eq!(c.phase(), Phase::Idle);
        let offset = c.offset();
        let snapped = cells.snap_correction(offset).unwrap();
        prop_assert!(snapped.hypot() <= 0.5 + 1e-9, "settled off-cell at {:?}", offset);
        prop_assert_eq!(cells.cell_of(offset), cells.home);
    }
}
