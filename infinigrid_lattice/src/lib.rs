// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinigrid_lattice --heading-base-level=0

//! Infinigrid Lattice: a fixed slot pool that simulates an unbounded, wrapping image grid.
//!
//! A [`Lattice`] owns `row_count` row slots, each holding `images_per_row` image
//! slots. Nothing is ever allocated or freed after construction: when the user
//! drags a new image into the middle of the viewport, [`Lattice::recenter`]
//! rotates whole rows (and, in every row, whole columns) from one edge of the
//! pool to the opposite edge, so that the image under the viewport center sits
//! at the *home* slot again.
//!
//! - Rows are addressed by stable [`RowId`] handles, images by [`ImageSlotId`].
//! - A slot's current [`SlotPosition`] (order indices) is O(1) to look up.
//! - Each image slot shows image `(row * images_per_row + column) % image_count`,
//!   recomputed on every rotation.
//! - Rows alternate a brick-wall parity flag. With an odd row count, a row that
//!   wraps toggles its flag (and shifts by half a box) so neighbors never share
//!   parity.
//!
//! Positions are translations relative to the grid container. The container's
//! own translation (the user's drag offset) lives elsewhere; subtract it from
//! viewport points before calling [`Lattice::hit_test`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use infinigrid_geometry::GridGeometry;
//! use infinigrid_lattice::{Lattice, LatticeShape, SlotPosition};
//!
//! let shape = LatticeShape::new(5, 9, 15).unwrap();
//! let geometry = GridGeometry::from_viewport(
//!     Size::new(1000.0, 800.0),
//!     shape.img_mid_index(),
//!     shape.row_mid_index(),
//! )
//! .unwrap();
//! let mut lattice = Lattice::with_layout(shape, &geometry);
//!
//! // The user dragged the top-middle image into the center.
//! let target = lattice.slot_at(SlotPosition::new(0, 4)).unwrap();
//! let result = lattice.recenter(target, &geometry);
//!
//! assert_eq!(result.row_steps, -2);
//! assert_eq!(lattice.position_of(target), Some(lattice.home()));
//! assert_eq!(lattice.display_index(target), Some(7));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod lattice;
mod recenter;
mod ring;
mod types;

pub use lattice::{ImageSlot, Lattice, RowSlot};
pub use ring::move_index;
pub use types::{ImageSlotId, LatticeShape, Recentered, RowId, ShapeError, SlotPosition};
