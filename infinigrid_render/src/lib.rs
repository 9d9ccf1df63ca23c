// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinigrid_render --heading-base-level=0

//! Infinigrid Render: what to draw for each slot of an infinite image grid.
//!
//! This crate turns a [`Lattice`](infinigrid_lattice::Lattice), its
//! [`GridGeometry`](infinigrid_geometry::GridGeometry), and a [`Gallery`] of
//! [`ImageRecord`]s into a [`GridView`]: every row and image slot in paint
//! order, with translations, box size, the record the slot currently shows,
//! an eager-load hint, and a [`DetailLink`] for navigation.
//!
//! It does not draw anything. Hosts key their retained elements by the slot
//! handles in the view and update transforms and image sources in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use infinigrid_geometry::GridGeometry;
//! use infinigrid_lattice::{Lattice, LatticeShape};
//! use infinigrid_render::{Gallery, GridView, ImageRecord};
//! use kurbo::{Size, Vec2};
//!
//! let gallery = Gallery::new(
//!     (0..15)
//!         .map(|i| ImageRecord::new(format!("img-{i}"), format!("/photos/{i}.jpg"), format!("Photo {i}")))
//!         .collect(),
//! )
//! .unwrap();
//! let shape = LatticeShape::new(5, 9, gallery.len()).unwrap();
//! let geometry =
//!     GridGeometry::from_viewport(Size::new(1000.0, 800.0), shape.img_mid_index(), shape.row_mid_index())
//!         .unwrap();
//! let lattice = Lattice::with_layout(shape, &geometry);
//!
//! let view = GridView::build(&lattice, &geometry, &gallery, Vec2::ZERO);
//! let home = view.images().find(|(_, image, _)| image.priority).unwrap().1;
//! assert_eq!(home.record.id, "img-7");
//! assert_eq!(home.link.href(), "/image/img-7?row=2&col=4&pos=22");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gallery;
mod link;
mod view;

pub use gallery::{Adjacent, Gallery, GalleryError, ImageRecord};
pub use link::DetailLink;
pub use view::{GridView, ImageView, RowView};
