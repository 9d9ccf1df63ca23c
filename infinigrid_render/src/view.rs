// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame render output.

use alloc::vec::Vec;

use infinigrid_geometry::GridGeometry;
use infinigrid_lattice::{ImageSlotId, Lattice, RowId};
use kurbo::{Point, Rect, Size, Vec2};

use crate::{DetailLink, Gallery, ImageRecord};

/// One image slot as the host should draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageView<'a> {
    /// Stable slot handle; key host elements by this.
    pub slot: ImageSlotId,
    /// Horizontal translation relative to the owning row.
    pub x: f64,
    /// Box size.
    pub size: Size,
    /// The image currently shown.
    pub record: &'a ImageRecord,
    /// Eager-load hint: set for the slot that occupies the home position in
    /// the initial layout.
    pub priority: bool,
    /// Where activating the image navigates.
    pub link: DetailLink,
}

/// One row slot as the host should draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView<'a> {
    /// Stable row handle.
    pub row: RowId,
    /// Translation relative to the grid container.
    pub translation: Vec2,
    /// Brick-wall parity flag.
    pub is_offset: bool,
    /// Images in paint order.
    pub images: Vec<ImageView<'a>>,
}

/// A full snapshot of the grid, in paint order.
///
/// Rows and images appear in creation order, which never changes, so a
/// retained-mode host can diff snapshots slot by slot.
#[derive(Clone, Debug, PartialEq)]
pub struct GridView<'a> {
    /// Translation of the grid container relative to the viewport.
    pub offset: Vec2,
    /// Rows in paint order.
    pub rows: Vec<RowView<'a>>,
}

impl<'a> GridView<'a> {
    /// Builds the snapshot for `lattice` laid out with `geometry` and
    /// translated by `offset`.
    ///
    /// Each slot shows `gallery.cycle(display_index)`; a gallery whose length
    /// differs from the lattice's image count still renders, wrapping by its
    /// own length.
    #[must_use]
    pub fn build(
        lattice: &Lattice,
        geometry: &GridGeometry,
        gallery: &'a Gallery,
        offset: Vec2,
    ) -> Self {
        let shape = lattice.shape();
        if shape.image_count() != gallery.len() {
            tracing::warn!(
                lattice = shape.image_count(),
                gallery = gallery.len(),
                "gallery length differs from the lattice image count"
            );
        }
        let per_row = shape.images_per_row();
        let home = shape.home();
        let priority_slot = home.row * per_row + home.column;
        let size = geometry.box_size();

        let rows = lattice
            .rows_in_paint_order()
            .map(|(row_id, row)| RowView {
                row: row_id,
                translation: row.translation(),
                is_offset: row.is_offset(),
                images: lattice
                    .row_images_in_paint_order(row_id)
                    .filter_map(|slot| {
                        let image = lattice.image(slot)?;
                        let position = lattice.position_of(slot)?;
                        let record = gallery.cycle(image.display_index());
                        Some(ImageView {
                            slot,
                            x: image.x(),
                            size,
                            record,
                            priority: slot.index() == priority_slot,
                            link: DetailLink {
                                image_id: record.id.clone(),
                                row: position.row,
                                column: position.column,
                                position: position.row * per_row + position.column,
                            },
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { offset, rows }
    }

    /// Iterates every image with its rectangle in viewport coordinates.
    pub fn images(&self) -> impl Iterator<Item = (&RowView<'a>, &ImageView<'a>, Rect)> + '_ {
        self.rows.iter().flat_map(move |row| {
            row.images.iter().map(move |image| {
                let origin = Point::ZERO + self.offset + row.translation + Vec2::new(image.x, 0.0);
                (row, image, Rect::from_origin_size(origin, image.size))
            })
        })
    }

    /// Images whose rectangle intersects `viewport`.
    pub fn visible_in(
        &self,
        viewport: Rect,
    ) -> impl Iterator<Item = (&RowView<'a>, &ImageView<'a>, Rect)> + '_ {
        self.images()
            .filter(move |(_, _, rect)| rect.intersect(viewport).area() > 0.0)
    }

    /// The image view for a slot handle.
    #[must_use]
    pub fn image(&self, slot: ImageSlotId) -> Option<&ImageView<'a>> {
        self.rows
            .iter()
            .flat_map(|row| row.images.iter())
            .find(|image| image.slot == slot)
    }
}
