// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinigrid_motion --heading-base-level=0

//! Infinigrid Motion: the interaction state machine for a draggable, wrapping grid.
//!
//! [`InteractionController`] turns pointer and wheel input into a continuous
//! translation of one target (the grid container):
//!
//! ```text
//! Idle ──pointer down──▶ Dragging ──release, fast──▶ Throwing ──settled──┐
//!  ▲                        │                                          ▼
//!  │                        └──release, slow──────────────────▶ SnappingBack
//!  │                                                                    │
//!  ├──wheel──▶ Scrolling ──tween done───────────────────────────────────┤
//!  └────────────────────────────────tween done──────────────────────────┘
//! ```
//!
//! A pointer-down in any phase cancels whatever is in flight and starts a
//! new drag in the same call. Wheel pulses only apply their dominant axis.
//!
//! The controller does not know about slots or images. It reports offsets to
//! a [`CenterTracker`], which detects the element under the viewport center
//! and recenters the slot pool; center detection is throttled to
//! [`MotionConfig::center_check_interval_ms`] and runs in every moving phase.
//!
//! Animation goes through the [`Animator`] trait, an explicit stand-in for a
//! platform animation library (tweens, property reads, velocity tracking).
//! [`TweenEngine`] is a deterministic implementation stepped by
//! [`Animator::advance`], suitable for headless hosts and tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use infinigrid_motion::{
//!     CenterTracker, InteractionController, MotionConfig, Phase, TargetId, TweenEngine,
//! };
//! use kurbo::{Point, Vec2};
//!
//! /// Snaps to multiples of 100 px and never needs recentering.
//! struct Cells;
//!
//! impl CenterTracker for Cells {
//!     fn track_center(&mut self, _offset: Vec2) -> bool {
//!         false
//!     }
//!     fn snap_correction(&self, offset: Vec2) -> Option<Vec2> {
//!         let snapped = Vec2::new(
//!             (offset.x / 100.0).round() * 100.0,
//!             (offset.y / 100.0).round() * 100.0,
//!         );
//!         Some(snapped - offset)
//!     }
//! }
//!
//! let mut cells = Cells;
//! let mut controller =
//!     InteractionController::new(TweenEngine::new(), TargetId(0), MotionConfig::default());
//!
//! // Drag 70 px left; with the default resistance the grid follows 56 px.
//! controller.pointer_down(Point::new(400.0, 300.0), 0);
//! controller.pointer_move(Point::new(330.0, 300.0), 16, &mut cells);
//! assert_eq!(controller.offset(), Vec2::new(-56.0, 0.0));
//!
//! // Hold still before releasing so the release does not throw.
//! controller.frame(200, &mut cells);
//! controller.pointer_up(Point::new(330.0, 300.0), 200, &mut cells);
//! assert_eq!(controller.phase(), Phase::SnappingBack);
//!
//! controller.frame(600, &mut cells);
//! assert_eq!(controller.phase(), Phase::Idle);
//! assert_eq!(controller.offset(), Vec2::new(-100.0, 0.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod config;
mod controller;
mod drag;
mod ease;
mod tween;
mod velocity;

pub use animator::{Animator, Axis, TargetId, TweenId};
pub use config::MotionConfig;
pub use controller::{CenterTracker, InteractionController, Phase};
pub use drag::DragState;
pub use ease::Ease;
pub use tween::TweenEngine;
pub use velocity::VelocityTracker;
