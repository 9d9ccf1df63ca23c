// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinigrid --heading-base-level=0

//! Infinigrid: an infinitely wrapping, draggable image grid.
//!
//! A finite pool of `row_count × images_per_row` slots is laid out around the
//! viewport center. As the user drags, throws, or scrolls, whichever slot
//! lands under the viewport center is made the new *home* slot by rotating
//! whole rows and columns from one edge of the pool to the other, and every
//! slot is relabeled with image `(row * images_per_row + column) % image_count`.
//! Nothing is ever allocated after construction, and the illusion is of an
//! unbounded lattice.
//!
//! [`InfiniteGrid`] wires together the member crates:
//!
//! - [`infinigrid_geometry`]: box sizes, gutters, and offsets from the viewport.
//! - [`infinigrid_lattice`]: the slot pool and the recentering engine.
//! - [`infinigrid_motion`]: the drag/throw/wheel/snap state machine over an
//!   injected [`Animator`](infinigrid_motion::Animator).
//! - [`infinigrid_render`]: per-slot render output and detail-view links.
//!
//! ## Minimal example
//!
//! ```rust
//! use infinigrid::{GridConfig, InfiniteGrid, Phase};
//! use infinigrid_motion::TweenEngine;
//! use infinigrid_render::ImageRecord;
//! use kurbo::{Point, Size};
//!
//! let records = (0..15)
//!     .map(|i| ImageRecord::new(format!("{i}"), format!("/img/{i}.jpg"), format!("Image {i}")))
//!     .collect();
//! let mut grid = InfiniteGrid::new(
//!     records,
//!     Size::new(1000.0, 800.0),
//!     TweenEngine::new(),
//!     GridConfig::default(),
//! )
//! .unwrap();
//!
//! // Drag one column to the left, slowly.
//! grid.pointer_down(Point::new(500.0, 400.0), 0);
//! for step in 1..=20 {
//!     grid.frame(step * 16);
//!     grid.pointer_move(Point::new(500.0 - 20.0 * step as f64, 400.0), step * 16);
//! }
//! for step in 21..=40 {
//!     grid.frame(step * 16);
//! }
//! grid.pointer_up(Point::new(100.0, 400.0), 640);
//!
//! // The right neighbor of the old home slot is now home.
//! let centered = grid.centered_slot().unwrap();
//! assert_eq!(grid.lattice().position_of(centered), Some(grid.lattice().home()));
//!
//! // Snap the neighbor exactly onto the center, then rest.
//! for step in 41..=80 {
//!     grid.frame(step * 16);
//! }
//! assert_eq!(grid.phase(), Phase::Idle);
//! assert!((grid.offset().x + 400.0).abs() < 1e-9);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod grid;
mod surface;

pub use config::{GridConfig, GridError};
pub use grid::{GRID_TARGET, InfiniteGrid};

pub use infinigrid_motion::Phase;
