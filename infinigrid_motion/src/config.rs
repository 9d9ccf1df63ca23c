// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Ease;

/// Tuning constants for [`InteractionController`](crate::InteractionController).
///
/// Durations are milliseconds, speeds are pixels per second.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Fraction of the pointer displacement a drag does not follow.
    ///
    /// `0.0` keeps the grab point under the pointer.
    pub drag_resistance: f64,
    /// Duration of the snap-back tween.
    pub snap_duration_ms: u64,
    /// Easing of the snap-back tween.
    pub snap_ease: Ease,
    /// Multiplier applied to wheel deltas.
    pub scroll_speed: f64,
    /// Duration of the smoothing tween for one wheel pulse.
    pub scroll_smoothing_ms: u64,
    /// Easing of the wheel smoothing tween.
    pub scroll_ease: Ease,
    /// Release speed above which a throw starts, and below which it settles.
    pub throw_velocity_threshold: f64,
    /// Exponential decay time constant of a throw.
    ///
    /// The total throw distance is `release_velocity * throw_time_constant`.
    pub throw_time_constant_ms: u64,
    /// Release speeds are clamped to this magnitude.
    pub max_throw_speed: f64,
    /// Minimum interval between two center detections.
    pub center_check_interval_ms: u64,
    /// Interval between two readiness polls of a backend that is not ready.
    pub readiness_poll_interval_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            drag_resistance: 0.2,
            snap_duration_ms: 300,
            snap_ease: Ease::Power2Out,
            scroll_speed: 1.5,
            scroll_smoothing_ms: 200,
            scroll_ease: Ease::Power2Out,
            throw_velocity_threshold: 20.0,
            throw_time_constant_ms: 500,
            max_throw_speed: 8000.0,
            center_check_interval_ms: 16,
            readiness_poll_interval_ms: 1000,
        }
    }
}
