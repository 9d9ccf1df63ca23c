// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinigrid_geometry --heading-base-level=0

//! Infinigrid Geometry: viewport-relative sizing for an infinitely wrapping image grid.
//!
//! This crate provides one small, pure computation: given a viewport size and the
//! indices of the designated "home" row and column, derive the box size, gutter,
//! spacings, and offsets that place the home slot exactly in the middle of the
//! viewport.
//!
//! - Boxes are `35%` of the viewport width/height.
//! - Gutters are `5%` of the viewport width, on both axes.
//! - Offsets are chosen so that the box at `(row_mid_index, img_mid_index)`
//!   is centered on the viewport midpoint.
//!
//! It does **not** own any slots, offsets, or animation state. Callers recompute a
//! [`GridGeometry`] whenever the viewport changes and reset whatever depends on it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use infinigrid_geometry::{GridGeometry, mid_index};
//!
//! let geometry = GridGeometry::from_viewport(Size::new(1000.0, 800.0), mid_index(9), mid_index(5))
//!     .expect("viewport is valid");
//!
//! assert!((geometry.box_width - 350.0).abs() < 1e-9);
//! assert!((geometry.gutter - 50.0).abs() < 1e-9);
//!
//! // The home box is centered on the viewport midpoint.
//! let home = geometry.initial_image_rect(2, 4);
//! assert!((home.center().x - geometry.viewport_center.x).abs() < 1e-9);
//! assert!((home.center().y - geometry.viewport_center.y).abs() < 1e-9);
//! ```
//!
//! Zero, negative, or non-finite viewport sizes are rejected with a
//! [`GeometryError`] instead of producing `NaN` positions.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod geometry;

pub use error::GeometryError;
pub use geometry::{GridGeometry, mid_index};
