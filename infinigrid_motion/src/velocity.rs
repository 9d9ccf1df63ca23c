// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use smallvec::SmallVec;

/// Estimates velocity from timestamped positions over a short sliding window.
///
/// Samples older than the window (relative to the newest sample) are
/// discarded, except that one sample at or beyond the window edge is kept so
/// a slow, steady motion still has a baseline.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    window_ms: u64,
    samples: SmallVec<[(u64, Vec2); 8]>,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_MS)
    }
}

impl VelocityTracker {
    /// Default sampling window.
    pub const DEFAULT_WINDOW_MS: u64 = 100;

    /// Creates an empty tracker with the given window.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            samples: SmallVec::new(),
        }
    }

    /// Records `position` at `time_ms`.
    ///
    /// A sample with the same timestamp as the newest one replaces it.
    /// Samples that go back in time, or carry non-finite positions, are
    /// ignored.
    pub fn record(&mut self, time_ms: u64, position: Vec2) {
        if !position.x.is_finite() || !position.y.is_finite() {
            return;
        }
        match self.samples.last_mut() {
            Some(last) if last.0 == time_ms => last.1 = position,
            Some(last) if last.0 > time_ms => return,
            _ => self.samples.push((time_ms, position)),
        }
        let horizon = time_ms.saturating_sub(self.window_ms);
        let stale = self
            .samples
            .iter()
            .take_while(|(t, _)| *t <= horizon)
            .count();
        if stale > 1 {
            self.samples.drain(..stale - 1);
        }
    }

    /// Velocity in pixels per second across the retained samples.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return Vec2::ZERO;
        };
        let dt = last.0.saturating_sub(first.0);
        if dt == 0 {
            return Vec2::ZERO;
        }
        let seconds = dt as f64 / 1000.0;
        (last.1 - first.1) / seconds
    }

    /// Forgets every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
