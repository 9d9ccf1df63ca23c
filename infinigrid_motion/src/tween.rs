// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic, frame-stepped [`Animator`].

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Vec2;

use crate::{Animator, Axis, Ease, TargetId, TweenId, VelocityTracker};

#[derive(Clone, Debug)]
struct Tween {
    id: TweenId,
    target: TargetId,
    from: Vec2,
    to: Vec2,
    start_ms: u64,
    duration_ms: u64,
    ease: Ease,
}

impl Tween {
    /// Value at `now_ms`, and whether the tween has finished.
    fn sample(&self, now_ms: u64) -> (Vec2, bool) {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        (self.from.lerp(self.to, self.ease.apply(t)), false)
    }
}

/// In-memory animation backend stepped explicitly by [`Animator::advance`].
///
/// Tweens start at the time of the most recent `advance` call and are
/// sampled on every later call. Tracked targets record their position after
/// each step (and on every [`Animator::set`]) so velocity reflects both
/// tween-driven and directly-set motion.
///
/// ```rust
/// use infinigrid_motion::{Animator, Ease, TargetId, TweenEngine};
/// use kurbo::Vec2;
///
/// let grid = TargetId(0);
/// let mut engine = TweenEngine::new();
/// let tween = engine.tween(grid, Vec2::new(100.0, 0.0), 200, Ease::Linear);
///
/// engine.advance(100);
/// assert_eq!(engine.position(grid), Vec2::new(50.0, 0.0));
///
/// engine.advance(200);
/// assert!(!engine.is_running(tween));
/// assert_eq!(engine.position(grid), Vec2::new(100.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct TweenEngine {
    ready: bool,
    now_ms: u64,
    next_tween: u64,
    values: HashMap<TargetId, Vec2>,
    trackers: HashMap<TargetId, VelocityTracker>,
    tweens: Vec<Tween>,
}

impl Default for TweenEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenEngine {
    /// Creates a ready engine with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ready: true,
            now_ms: 0,
            next_tween: 1,
            values: HashMap::new(),
            trackers: HashMap::new(),
            tweens: Vec::new(),
        }
    }

    /// Creates an engine that reports not ready until [`TweenEngine::set_ready`].
    #[must_use]
    pub fn pending() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    /// Marks the backend as (not) ready.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Time of the most recent [`Animator::advance`].
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.tweens.len()
    }

    fn record(&mut self, target: TargetId) {
        if let Some(tracker) = self.trackers.get_mut(&target) {
            let value = self.values.get(&target).copied().unwrap_or(Vec2::ZERO);
            tracker.record(self.now_ms, value);
        }
    }
}

impl Animator for TweenEngine {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn track(&mut self, target: TargetId) {
        self.trackers.entry(target).or_default();
        self.record(target);
    }

    fn reset_tracking(&mut self, target: TargetId) {
        if let Some(tracker) = self.trackers.get_mut(&target) {
            tracker.clear();
        }
    }

    fn get_property(&self, target: TargetId, axis: Axis) -> f64 {
        let value = self.values.get(&target).copied().unwrap_or(Vec2::ZERO);
        match axis {
            Axis::X => value.x,
            Axis::Y => value.y,
        }
    }

    fn set(&mut self, target: TargetId, value: Vec2) {
        if !value.x.is_finite() || !value.y.is_finite() {
            tracing::trace!(?target, "ignored non-finite set");
            return;
        }
        self.values.insert(target, value);
        self.record(target);
    }

    fn tween(&mut self, target: TargetId, to: Vec2, duration_ms: u64, ease: Ease) -> TweenId {
        if !to.x.is_finite() || !to.y.is_finite() {
            tracing::trace!(?target, "ignored tween to non-finite value");
            return TweenId::NONE;
        }
        if duration_ms == 0 {
            self.set(target, to);
            return TweenId::NONE;
        }
        let id = TweenId(self.next_tween);
        self.next_tween += 1;
        self.tweens.push(Tween {
            id,
            target,
            from: self.position(target),
            to,
            start_ms: self.now_ms,
            duration_ms,
            ease,
        });
        id
    }

    fn kill_tweens_of(&mut self, target: TargetId) {
        self.tweens.retain(|tween| tween.target != target);
    }

    fn is_running(&self, tween: TweenId) -> bool {
        tween != TweenId::NONE && self.tweens.iter().any(|t| t.id == tween)
    }

    fn velocity(&self, target: TargetId) -> Vec2 {
        self.trackers
            .get(&target)
            .map_or(Vec2::ZERO, VelocityTracker::velocity)
    }

    fn advance(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;
        let values = &mut self.values;
        self.tweens.retain(|tween| {
            let (value, done) = tween.sample(now);
            values.insert(tween.target, value);
            !done
        });
        let targets: Vec<TargetId> = self.trackers.keys().copied().collect();
        for target in targets {
            self.record(target);
        }
    }
}
