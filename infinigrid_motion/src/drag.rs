// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: map pointer positions onto a translation offset.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer-down with the pointer position,
//!    the offset the dragged target had at that moment, and the drag
//!    resistance.
//! 2) On each pointer-move, call [`DragState::update`] to get the offset the
//!    target should now have. With zero resistance the grab point stays under
//!    the pointer; otherwise the target trails it.
//! 3) Call [`DragState::end`] on pointer-up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use infinigrid_motion::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0), Vec2::new(-300.0, 0.0), 0.5);
//!
//! let offset = drag.update(Point::new(30.0, 40.0)).unwrap();
//! assert_eq!(offset, Vec2::new(-290.0, 10.0));
//!
//! assert_eq!(drag.total_offset(Point::new(30.0, 40.0)), Some(Vec2::new(20.0, 20.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer drag of a translated target.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer position at drag start.
    pub start_pos: Option<Point>,
    /// Last pointer position seen during the drag.
    pub last_pos: Option<Point>,
    /// Target offset at drag start.
    pub origin: Vec2,
    /// Fraction of the pointer displacement the target does not follow.
    pub resistance: f64,
}

impl DragState {
    /// Starts a drag at `pos` for a target currently translated by `origin`.
    ///
    /// `resistance` is clamped to `0.0..=1.0`; a non-finite value counts as
    /// zero.
    pub fn start(&mut self, pos: Point, origin: Vec2, resistance: f64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.origin = origin;
        self.resistance = if resistance.is_finite() {
            resistance.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Records a pointer move and returns the target's new offset.
    ///
    /// Returns `None` when no drag is active or `pos` is not finite.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        let total = self.total_offset(pos)?;
        self.last_pos = Some(pos);
        Some(self.origin + total * (1.0 - self.resistance))
    }

    /// Pointer displacement from the drag start.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}
