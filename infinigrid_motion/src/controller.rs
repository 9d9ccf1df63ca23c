// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.

use kurbo::{Point, Vec2};

use crate::{Animator, DragState, MotionConfig, TargetId, TweenId};

/// Snap corrections shorter than this are treated as "already centered".
const SNAP_EPSILON: f64 = 0.5;

/// What the controller needs from the grid it moves.
///
/// Offsets are the translation of the grid container relative to the
/// viewport.
pub trait CenterTracker {
    /// Detects the element under the viewport center for `offset` and, if it
    /// is not the one currently at home, recenters the slot pool around it.
    ///
    /// Returns `true` if a recentering happened. Finding nothing under the
    /// center (a gutter, a stale element) is not an error and returns `false`.
    fn track_center(&mut self, offset: Vec2) -> bool;

    /// Translation that would put the center of the element nearest to the
    /// viewport center exactly on the viewport center, or `None` if there is
    /// no element to snap to.
    fn snap_correction(&self, offset: Vec2) -> Option<Vec2>;
}

/// Observable state of an [`InteractionController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// At rest.
    Idle,
    /// The pointer is down and moving the grid.
    Dragging,
    /// Released with velocity; coasting with exponential decay.
    Throwing,
    /// Smoothing a wheel pulse.
    Scrolling,
    /// Tweening the nearest element onto the viewport center.
    SnappingBack,
}

#[derive(Copy, Clone, Debug)]
enum Motion {
    Idle,
    Dragging,
    Throwing {
        origin: Vec2,
        velocity: Vec2,
        start_ms: u64,
    },
    Scrolling(TweenId),
    SnappingBack(TweenId),
}

impl Motion {
    fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Dragging => Phase::Dragging,
            Self::Throwing { .. } => Phase::Throwing,
            Self::Scrolling(_) => Phase::Scrolling,
            Self::SnappingBack(_) => Phase::SnappingBack,
        }
    }
}

/// Drives one translated target through drag, throw, wheel, and snap-back.
///
/// The controller owns the [`Animator`] for its target and is the only writer
/// of the target's translation. Every input takes the host's current time in
/// milliseconds; [`InteractionController::frame`] must be called once per
/// animation frame. Every transition runs synchronously inside the call that
/// caused it, including any recentering triggered by center detection.
///
/// Input is ignored until the animator reports ready; readiness is polled on
/// frames and inputs, at most once per
/// [`MotionConfig::readiness_poll_interval_ms`].
#[derive(Debug)]
pub struct InteractionController<A> {
    config: MotionConfig,
    animator: A,
    target: TargetId,
    motion: Motion,
    drag: DragState,
    ready: bool,
    last_ready_poll: Option<u64>,
    last_center_check: Option<u64>,
}

impl<A: Animator> InteractionController<A> {
    /// Creates an idle controller for `target`.
    ///
    /// If the animator is already ready the target is tracked right away.
    pub fn new(animator: A, target: TargetId, config: MotionConfig) -> Self {
        let mut controller = Self {
            config,
            animator,
            target,
            motion: Motion::Idle,
            drag: DragState::default(),
            ready: false,
            last_ready_poll: None,
            last_center_check: None,
        };
        if controller.animator.is_ready() {
            controller.become_ready();
        }
        controller
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.motion.phase()
    }

    /// Returns `true` once the animator has reported ready.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The animated target.
    #[must_use]
    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Current translation of the target.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.animator.position(self.target)
    }

    /// The tuning constants.
    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// The animation backend.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the animation backend.
    ///
    /// Writing the target's translation through this bypasses the state
    /// machine; use it for backend housekeeping only.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Polls the animator's readiness if a poll is due, and returns readiness.
    pub fn poll_ready(&mut self, now_ms: u64) -> bool {
        if self.ready {
            return true;
        }
        if let Some(last) = self.last_ready_poll {
            if now_ms.saturating_sub(last) < self.config.readiness_poll_interval_ms {
                return false;
            }
        }
        self.last_ready_poll = Some(now_ms);
        if self.animator.is_ready() {
            self.become_ready();
        } else {
            tracing::trace!(now_ms, "animation backend not ready yet");
        }
        self.ready
    }

    /// Pointer pressed at `pos`.
    ///
    /// Cancels any throw, wheel, or snap tween in flight and starts dragging.
    /// Release velocity is measured from this point on.
    /// Returns `false` if the input was ignored because the backend is not
    /// ready or `pos` is not finite.
    pub fn pointer_down(&mut self, pos: Point, now_ms: u64) -> bool {
        if !self.poll_ready(now_ms) {
            tracing::trace!("pointer down ignored: backend not ready");
            return false;
        }
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return false;
        }
        self.animator.kill_tweens_of(self.target);
        self.animator.reset_tracking(self.target);
        self.animator.advance(now_ms);
        self.drag.start(pos, self.offset(), self.config.drag_resistance);
        self.transition(Motion::Dragging);
        true
    }

    /// Pointer moved to `pos`. Only meaningful while dragging.
    pub fn pointer_move(&mut self, pos: Point, now_ms: u64, tracker: &mut impl CenterTracker) {
        if !matches!(self.motion, Motion::Dragging) {
            return;
        }
        if let Some(offset) = self.drag.update(pos) {
            self.animator.advance(now_ms);
            self.animator.set(self.target, offset);
            self.check_center(now_ms, tracker, false);
        }
    }

    /// Pointer released at `pos`.
    ///
    /// Starts a throw if the release velocity exceeds the threshold on either
    /// axis, otherwise snaps back right away.
    pub fn pointer_up(&mut self, pos: Point, now_ms: u64, tracker: &mut impl CenterTracker) {
        if !matches!(self.motion, Motion::Dragging) {
            return;
        }
        if let Some(offset) = self.drag.update(pos) {
            self.animator.advance(now_ms);
            self.animator.set(self.target, offset);
        }
        self.drag.end();
        self.check_center(now_ms, tracker, true);

        let velocity = self.release_velocity();
        let threshold = self.config.throw_velocity_threshold;
        if velocity.x.abs() > threshold || velocity.y.abs() > threshold {
            self.transition(Motion::Throwing {
                origin: self.offset(),
                velocity,
                start_ms: now_ms,
            });
        } else {
            self.start_snap(now_ms, tracker);
        }
    }

    /// Wheel pulse with the given deltas.
    ///
    /// Only the dominant axis is applied. The pulse cancels any throw, wheel,
    /// or snap tween in flight; it is ignored while dragging.
    pub fn wheel(&mut self, delta: Vec2, now_ms: u64) {
        if !self.poll_ready(now_ms) {
            tracing::trace!("wheel ignored: backend not ready");
            return;
        }
        if matches!(self.motion, Motion::Dragging) {
            tracing::trace!("wheel ignored while dragging");
            return;
        }
        if !delta.x.is_finite() || !delta.y.is_finite() || delta == Vec2::ZERO {
            return;
        }
        let delta = if delta.x.abs() > delta.y.abs() {
            Vec2::new(delta.x, 0.0)
        } else {
            Vec2::new(0.0, delta.y)
        };
        self.animator.kill_tweens_of(self.target);
        self.animator.advance(now_ms);
        let to = self.offset() - delta * self.config.scroll_speed;
        let tween = self.animator.tween(
            self.target,
            to,
            self.config.scroll_smoothing_ms,
            self.config.scroll_ease,
        );
        self.transition(Motion::Scrolling(tween));
    }

    /// Advances animations to `now_ms` and runs any due transition.
    pub fn frame(&mut self, now_ms: u64, tracker: &mut impl CenterTracker) {
        self.poll_ready(now_ms);
        self.animator.advance(now_ms);

        match self.motion {
            Motion::Idle | Motion::Dragging => {}
            Motion::Throwing {
                origin,
                velocity,
                start_ms,
            } => {
                let elapsed = now_ms.saturating_sub(start_ms);
                let (offset, current) = self.throw_at(origin, velocity, elapsed);
                self.animator.set(self.target, offset);
                self.check_center(now_ms, tracker, false);
                let threshold = self.config.throw_velocity_threshold;
                if current.x.abs() < threshold && current.y.abs() < threshold {
                    self.start_snap(now_ms, tracker);
                }
            }
            Motion::Scrolling(tween) => {
                self.check_center(now_ms, tracker, false);
                if !self.animator.is_running(tween) {
                    self.start_snap(now_ms, tracker);
                }
            }
            Motion::SnappingBack(tween) => {
                self.check_center(now_ms, tracker, false);
                if !self.animator.is_running(tween) {
                    self.check_center(now_ms, tracker, true);
                    self.transition(Motion::Idle);
                }
            }
        }
    }

    /// Stops all motion and moves the target to `offset`.
    ///
    /// Used when the layout is rebuilt (for example after a resize).
    pub fn reset(&mut self, offset: Vec2) {
        self.animator.kill_tweens_of(self.target);
        self.animator.set(self.target, offset);
        self.drag.end();
        self.last_center_check = None;
        self.transition(Motion::Idle);
    }

    fn become_ready(&mut self) {
        self.ready = true;
        self.animator.track(self.target);
        tracing::debug!(target_id = self.target.0, "animation backend ready");
    }

    fn transition(&mut self, next: Motion) {
        let (from, to) = (self.motion.phase(), next.phase());
        self.motion = next;
        if from != to {
            tracing::debug!(?from, ?to, "interaction phase changed");
        }
    }

    fn release_velocity(&self) -> Vec2 {
        let velocity = self.animator.velocity(self.target);
        if !velocity.x.is_finite() || !velocity.y.is_finite() {
            return Vec2::ZERO;
        }
        let speed = velocity.hypot();
        let max = self.config.max_throw_speed;
        if speed > max && speed > 0.0 {
            velocity * (max / speed)
        } else {
            velocity
        }
    }

    /// Offset and instantaneous velocity of a throw `elapsed_ms` after release.
    fn throw_at(&self, origin: Vec2, velocity: Vec2, elapsed_ms: u64) -> (Vec2, Vec2) {
        let tau_ms = self.config.throw_time_constant_ms;
        if tau_ms == 0 {
            return (origin, Vec2::ZERO);
        }
        let tau = tau_ms as f64;
        let decay = libm::exp(-(elapsed_ms as f64) / tau);
        let travel = velocity * (tau / 1000.0) * (1.0 - decay);
        (origin + travel, velocity * decay)
    }

    fn start_snap(&mut self, now_ms: u64, tracker: &mut impl CenterTracker) {
        self.check_center(now_ms, tracker, true);
        let offset = self.offset();
        match tracker.snap_correction(offset) {
            Some(correction)
                if correction.x.is_finite()
                    && correction.y.is_finite()
                    && correction.hypot() > SNAP_EPSILON =>
            {
                self.animator.kill_tweens_of(self.target);
                self.animator.advance(now_ms);
                let tween = self.animator.tween(
                    self.target,
                    offset + correction,
                    self.config.snap_duration_ms,
                    self.config.snap_ease,
                );
                self.transition(Motion::SnappingBack(tween));
            }
            _ => self.transition(Motion::Idle),
        }
    }

    fn check_center(&mut self, now_ms: u64, tracker: &mut impl CenterTracker, force: bool) {
        if !force {
            if let Some(last) = self.last_center_check {
                if now_ms.saturating_sub(last) < self.config.center_check_interval_ms {
                    return;
                }
            }
        }
        self.last_center_check = Some(now_ms);
        if tracker.track_center(self.offset()) {
            tracing::trace!(now_ms, "center changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{CenterTracker, InteractionController, Phase};
    use crate::{Animator, MotionConfig, TargetId, TweenEngine};

    /// A one-dimensional strip of 100 px cells centered on multiples of 100.
    #[derive(Default)]
    struct Strip {
        home: i64,
        recenters: usize,
    }

    impl CenterTracker for Strip {
        fn track_center(&mut self, offset: Vec2) -> bool {
            let cell = libm::round(-offset.x / 100.0) as i64;
            if cell != self.home {
                self.home = cell;
                self.recenters += 1;
                true
            } else {
                false
            }
        }

        fn snap_correction(&self, offset: Vec2) -> Option<Vec2> {
            let nearest = libm::round(offset.x / 100.0) * 100.0;
            Some(Vec2::new(nearest - offset.x, -offset.y))
        }
    }

    /// A controller whose drags follow the pointer exactly.
    fn controller() -> InteractionController<TweenEngine> {
        let config = MotionConfig {
            drag_resistance: 0.0,
            ..MotionConfig::default()
        };
        InteractionController::new(TweenEngine::new(), TargetId(0), config)
    }

    #[test]
    fn drag_moves_offset_and_recenters() {
        let mut c = controller();
        let mut strip = Strip::default();
        assert!(c.pointer_down(Point::new(500.0, 400.0), 0));
        assert_eq!(c.phase(), Phase::Dragging);

        c.pointer_move(Point::new(380.0, 400.0), 20, &mut strip);
        assert_eq!(c.offset(), Vec2::new(-120.0, 0.0));
        assert_eq!(strip.home, 1);
        assert_eq!(strip.recenters, 1);
    }

    #[test]
    fn slow_release_snaps_back_then_idles() {
        let mut c = controller();
        let mut strip = Strip::default();
        c.pointer_down(Point::new(0.0, 0.0), 0);
        c.frame(1_000, &mut strip);
        c.pointer_move(Point::new(-30.0, 0.0), 1_000, &mut strip);
        c.frame(2_000, &mut strip);
        c.pointer_up(Point::new(-30.0, 0.0), 2_000, &mut strip);
        assert_eq!(c.phase(), Phase::SnappingBack);

        c.frame(2_150, &mut strip);
        assert_eq!(c.phase(), Phase::SnappingBack);
        c.frame(2_300, &mut strip);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.offset(), Vec2::ZERO);
    }

    #[test]
    fn release_already_centered_goes_idle() {
        let mut c = controller();
        let mut strip = Strip::default();
        c.pointer_down(Point::new(0.0, 0.0), 0);
        c.pointer_up(Point::new(0.0, 0.0), 10, &mut strip);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn fast_release_throws_with_decay_then_snaps() {
        let mut c = controller();
        let mut strip = Strip::default();
        c.pointer_down(Point::new(0.0, 0.0), 0);
        for frame in 1..=5_u32 {
            let now = u64::from(frame) * 16;
            c.frame(now, &mut strip);
            c.pointer_move(Point::new(-f64::from(frame) * 16.0, 0.0), now, &mut strip);
        }
        c.pointer_up(Point::new(-80.0, 0.0), 80, &mut strip);
        assert_eq!(c.phase(), Phase::Throwing);

        // Total throw distance is v * tau = 1000 px/s * 0.5 s.
        let mut now = 80;
        while c.phase() == Phase::Throwing {
            now += 16;
            c.frame(now, &mut strip);
            assert!(now < 10_000, "throw never settled");
        }
        assert_eq!(c.phase(), Phase::SnappingBack);
        assert!(c.offset().x < -560.0 && c.offset().x > -580.0, "{:?}", c.offset());
        assert!(strip.recenters >= 5);

        for _ in 0..30 {
            now += 16;
            c.frame(now, &mut strip);
        }
        assert_eq!(c.phase(), Phase::Idle);
        assert!((c.offset().x - -600.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_down_cancels_snap_in_the_same_call() {
        let mut c = controller();
        let mut strip = Strip::default();
        c.pointer_down(Point::new(0.0, 0.0), 0);
        c.pointer_move(Point::new(-40.0, 0.0), 0, &mut strip);
        c.pointer_up(Point::new(-40.0, 0.0), 0, &mut strip);
        assert_eq!(c.phase(), Phase::SnappingBack);
        c.frame(100, &mut strip);
        let held = c.offset();

        assert!(c.pointer_down(Point::new(10.0, 10.0), 100));
        assert_eq!(c.phase(), Phase::Dragging);
        for frame in 1..=30 {
            c.frame(100 + frame * 16, &mut strip);
        }
        assert_eq!(c.offset(), held);
        assert_eq!(c.animator().running_count(), 0);
    }

    #[test]
    fn wheel_uses_the_dominant_axis_and_snaps() {
        let mut c = controller();
        let mut strip = Strip::default();
        c.wheel(Vec2::new(4.0, 20.0), 0);
        assert_eq!(c.phase(), Phase::Scrolling);

        c.frame(200, &mut strip);
        // 20 * 1.5 on y only; the x component is suppressed.
        assert_eq!(c.phase(), Phase::SnappingBack);
        c.frame(500, &mut strip);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.offset(), Vec2::ZERO);

        c.wheel(Vec2::new(-60.0, 10.0), 600);
        c.frame(800, &mut strip);
        assert!((c.offset().x - 90.0).abs() < 1e-9);
        assert_eq!(c.offset().y, 0.0);
    }

    #[test]
    fn wheel_is_ignored_while_dragging() {
        let mut c = controller();
        c.pointer_down(Point::new(0.0, 0.0), 0);
        c.wheel(Vec2::new(0.0, 100.0), 5);
        assert_eq!(c.phase(), Phase::Dragging);
        assert_eq!(c.animator().running_count(), 0);
    }

    #[test]
    fn input_waits_for_readiness() {
        let mut c =
            InteractionController::new(TweenEngine::pending(), TargetId(0), MotionConfig::default());
        let mut strip = Strip::default();
        assert!(!c.is_ready());
        assert!(!c.pointer_down(Point::ZERO, 0));
        assert_eq!(c.phase(), Phase::Idle);

        c.animator_mut().set_ready(true);
        // The next poll is not due until a full interval has passed.
        c.frame(500, &mut strip);
        assert!(!c.pointer_down(Point::ZERO, 600));
        c.frame(1_000, &mut strip);
        assert!(c.is_ready());
        assert!(c.pointer_down(Point::ZERO, 1_010));
    }

    #[test]
    fn center_checks_are_throttled_while_dragging() {
        let mut c = controller();
        let mut strip = Strip::default();
        c.pointer_down(Point::new(0.0, 0.0), 0);
        c.pointer_move(Point::new(-60.0, 0.0), 1, &mut strip);
        assert_eq!(strip.recenters, 1);
        // Back over cell 0 within the same frame: not checked yet.
        c.pointer_move(Point::new(0.0, 0.0), 5, &mut strip);
        assert_eq!(strip.home, 1);
        c.pointer_move(Point::new(0.0, 0.0), 17, &mut strip);
        assert_eq!(strip.home, 0);
    }

    #[test]
    fn reset_stops_motion() {
        let mut c = controller();
        c.wheel(Vec2::new(0.0, 50.0), 0);
        c.reset(Vec2::ZERO);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.animator().running_count(), 0);
        assert_eq!(c.offset(), Vec2::ZERO);
    }
}
