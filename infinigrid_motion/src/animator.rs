// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animation backend seam.

use kurbo::Vec2;

use crate::Ease;

/// Handle of an animated target (for the grid, its container translation).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// Handle of one tween started by [`Animator::tween`].
///
/// Handles are never reused, so a stale handle simply reports "not running".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub(crate) u64);

impl TweenId {
    /// A handle that never refers to a running tween.
    pub const NONE: Self = Self(0);
}

/// Axis of a two-dimensional animated property.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal translation.
    X,
    /// Vertical translation.
    Y,
}

/// Animation backend driven by the interaction controller.
///
/// The controller never reads a clock or touches a platform animation
/// library directly; it goes through this trait, which the host constructs
/// once and hands over. Times are milliseconds on a monotonic host clock.
///
/// Only one writer per target is meaningful: starting a tween, or calling
/// [`Animator::set`], while another tween of the same target is running is
/// last-writer-wins, and callers are expected to call
/// [`Animator::kill_tweens_of`] first.
pub trait Animator {
    /// Returns `true` once the backend can accept tweens and tracking.
    ///
    /// Hosts whose animation library loads asynchronously return `false`
    /// until it does; the controller polls this and stays inert meanwhile.
    fn is_ready(&self) -> bool;

    /// Starts recording the target's motion so [`Animator::velocity`] works.
    fn track(&mut self, target: TargetId);

    /// Forgets the motion recorded so far for the target.
    ///
    /// Velocity reported afterwards reflects only later movement.
    fn reset_tracking(&mut self, target: TargetId);

    /// Current value of one axis of the target's translation.
    fn get_property(&self, target: TargetId, axis: Axis) -> f64;

    /// Sets the target's translation immediately.
    fn set(&mut self, target: TargetId, value: Vec2);

    /// Animates the target's translation to `to` over `duration_ms`.
    fn tween(&mut self, target: TargetId, to: Vec2, duration_ms: u64, ease: Ease) -> TweenId;

    /// Stops every running tween of the target, leaving it where it is.
    fn kill_tweens_of(&mut self, target: TargetId);

    /// Returns `true` while the tween is still animating.
    fn is_running(&self, tween: TweenId) -> bool;

    /// Recent velocity of a tracked target, in pixels per second.
    ///
    /// Untracked targets report zero.
    fn velocity(&self, target: TargetId) -> Vec2;

    /// Steps every running tween to `now_ms`.
    fn advance(&mut self, now_ms: u64);

    /// Current translation of the target.
    fn position(&self, target: TargetId) -> Vec2 {
        Vec2::new(
            self.get_property(target, Axis::X),
            self.get_property(target, Axis::Y),
        )
    }
}
