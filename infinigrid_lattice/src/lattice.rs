// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slot pool: rows, images, their orderings, and the position map.

use alloc::vec::Vec;

use infinigrid_geometry::GridGeometry;
use kurbo::{Point, Rect, Vec2};

use crate::types::{ImageSlotId, LatticeShape, RowId, SlotPosition};

/// One row slot.
///
/// A row owns a fixed set of image slots. Its translation and parity flag are
/// rewritten by recentering; the set of images it owns never changes.
#[derive(Clone, Debug)]
pub struct RowSlot {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) is_offset: bool,
    /// Image handles in current (left-to-right) order.
    pub(crate) images: Vec<ImageSlotId>,
}

impl RowSlot {
    /// Horizontal translation of the row, relative to the grid container.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical translation of the row, relative to the grid container.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Translation of the row as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Brick-wall parity flag: offset rows sit half a box further left.
    #[must_use]
    pub fn is_offset(&self) -> bool {
        self.is_offset
    }

    /// Image handles of this row in current left-to-right order.
    #[must_use]
    pub fn images(&self) -> &[ImageSlotId] {
        &self.images
    }
}

/// One image slot.
#[derive(Clone, Debug)]
pub struct ImageSlot {
    pub(crate) row: RowId,
    pub(crate) x: f64,
    pub(crate) display: usize,
}

impl ImageSlot {
    /// The row slot owning this image slot.
    #[must_use]
    pub fn row(&self) -> RowId {
        self.row
    }

    /// Horizontal translation of the image, relative to its row.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Index into the image pool of the image currently shown by this slot.
    #[must_use]
    pub fn display_index(&self) -> usize {
        self.display
    }
}

/// A fixed pool of row and image slots simulating an unbounded, wrapping lattice.
///
/// The pool is allocated once by [`Lattice::new`]; neither recentering nor
/// [`Lattice::reset`] allocates or frees slots. Slots are addressed by stable
/// handles ([`RowId`], [`ImageSlotId`]) while their *order* (and therefore
/// their displayed image) is reassigned as the viewport moves.
///
/// The handle → position map is kept in sync on every rotation, so
/// [`Lattice::position_of`] is O(1).
#[derive(Clone, Debug)]
pub struct Lattice {
    pub(crate) shape: LatticeShape,
    /// Row arena, indexed by `RowId`.
    pub(crate) rows: Vec<RowSlot>,
    /// Image arena, indexed by `ImageSlotId`.
    pub(crate) images: Vec<ImageSlot>,
    /// Row handles in current top-to-bottom order.
    pub(crate) row_order: Vec<RowId>,
    /// Current position of each image slot, indexed by `ImageSlotId`.
    pub(crate) positions: Vec<SlotPosition>,
    /// Flips on every row rotation; see [`Lattice::parity_phase`].
    pub(crate) row_phase: bool,
}

impl Lattice {
    /// Allocates the slot pool for `shape`.
    ///
    /// Slots start in identity order with zero translations and parity flags
    /// matching their row index. Call [`Lattice::reset`] with a geometry to
    /// position them.
    #[must_use]
    pub fn new(shape: LatticeShape) -> Self {
        let row_count = shape.row_count();
        let per_row = shape.images_per_row();

        let mut rows = Vec::with_capacity(row_count);
        let mut images = Vec::with_capacity(shape.slot_count());
        for r in 0..row_count {
            let row_id = RowId(slot_handle(r));
            let mut row_images = Vec::with_capacity(per_row);
            for c in 0..per_row {
                row_images.push(ImageSlotId(slot_handle(r * per_row + c)));
                images.push(ImageSlot {
                    row: row_id,
                    x: 0.0,
                    display: 0,
                });
            }
            rows.push(RowSlot {
                x: 0.0,
                y: 0.0,
                is_offset: GridGeometry::initial_row_offset(r),
                images: row_images,
            });
        }

        let mut lattice = Self {
            shape,
            rows,
            images,
            row_order: (0..row_count).map(|r| RowId(slot_handle(r))).collect(),
            positions: alloc::vec![SlotPosition::default(); shape.slot_count()],
            row_phase: false,
        };
        lattice.sync_all_rows();
        lattice
    }

    /// Allocates the slot pool and lays it out for `geometry`.
    #[must_use]
    pub fn with_layout(shape: LatticeShape, geometry: &GridGeometry) -> Self {
        let mut lattice = Self::new(shape);
        lattice.reset(geometry);
        lattice
    }

    /// Restores the initial layout for `geometry`.
    ///
    /// Orders return to identity, parity flags to "odd rows are offset", and
    /// translations to the values the geometry prescribes. Invalid geometries
    /// leave translations untouched.
    pub fn reset(&mut self, geometry: &GridGeometry) {
        for (r, id) in self.row_order.iter_mut().enumerate() {
            *id = RowId(slot_handle(r));
        }
        let per_row = self.shape.images_per_row();
        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, id) in row.images.iter_mut().enumerate() {
                *id = ImageSlotId(slot_handle(r * per_row + c));
            }
            row.is_offset = GridGeometry::initial_row_offset(r);
        }
        self.row_phase = false;

        if geometry.is_valid() {
            for (r, row) in self.rows.iter_mut().enumerate() {
                row.x = geometry.initial_row_x(row.is_offset);
                row.y = geometry.initial_row_y(r);
                for (c, id) in row.images.iter().enumerate() {
                    self.images[id.index()].x = geometry.initial_image_x(c);
                }
            }
        } else {
            tracing::warn!("lattice reset with invalid geometry; keeping translations");
        }
        self.sync_all_rows();
    }

    /// The shape this pool was allocated for.
    #[must_use]
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// Number of row slots.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of image slots per row.
    #[must_use]
    pub fn images_per_row(&self) -> usize {
        self.shape.images_per_row()
    }

    /// The home slot, `(row_mid_index, img_mid_index)`.
    #[must_use]
    pub fn home(&self) -> SlotPosition {
        self.shape.home()
    }

    /// Lattice-wide row parity phase.
    ///
    /// Every row rotation shifts the order index of all other rows by one, so
    /// parity flags are consistent with order indices *relative to this
    /// phase*: for every row, `is_offset == ((order + phase) % 2 == 1)`.
    /// The phase flips on each row rotation and is `0` after any sequence of
    /// rotations that nets out.
    #[must_use]
    pub fn parity_phase(&self) -> usize {
        usize::from(self.row_phase)
    }

    /// Row handles in current top-to-bottom order.
    #[must_use]
    pub fn row_order(&self) -> &[RowId] {
        &self.row_order
    }

    /// Returns the row slot for a handle.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&RowSlot> {
        self.rows.get(id.index())
    }

    /// Returns the row slot currently at `order` in the top-to-bottom ordering.
    #[must_use]
    pub fn row_at(&self, order: usize) -> Option<(RowId, &RowSlot)> {
        let id = *self.row_order.get(order)?;
        Some((id, &self.rows[id.index()]))
    }

    /// Rows in current top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &RowSlot)> + '_ {
        self.row_order
            .iter()
            .map(move |id| (*id, &self.rows[id.index()]))
    }

    /// Rows in paint (creation) order.
    pub fn rows_in_paint_order(&self) -> impl Iterator<Item = (RowId, &RowSlot)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (RowId(slot_handle(i)), row))
    }

    /// Image handles of `row` in paint (creation) order.
    pub fn row_images_in_paint_order(&self, row: RowId) -> impl Iterator<Item = ImageSlotId> {
        let per_row = self.shape.images_per_row();
        let start = row.index() * per_row;
        (start..start + per_row).map(|i| ImageSlotId(slot_handle(i)))
    }

    /// Returns the image slot for a handle.
    #[must_use]
    pub fn image(&self, id: ImageSlotId) -> Option<&ImageSlot> {
        self.images.get(id.index())
    }

    /// Current position of an image slot, or `None` for a stale or foreign handle.
    #[must_use]
    pub fn position_of(&self, id: ImageSlotId) -> Option<SlotPosition> {
        self.positions.get(id.index()).copied()
    }

    /// Image slot currently at `position`.
    #[must_use]
    pub fn slot_at(&self, position: SlotPosition) -> Option<ImageSlotId> {
        let (_, row) = self.row_at(position.row)?;
        row.images.get(position.column).copied()
    }

    /// Index into the image pool of the image currently shown by `id`.
    #[must_use]
    pub fn display_index(&self, id: ImageSlotId) -> Option<usize> {
        self.image(id).map(ImageSlot::display_index)
    }

    /// Rectangle of an image slot relative to the grid container.
    #[must_use]
    pub fn image_rect(&self, id: ImageSlotId, geometry: &GridGeometry) -> Option<Rect> {
        let image = self.image(id)?;
        let row = &self.rows[image.row.index()];
        Some(Rect::from_origin_size(
            Point::new(row.x + image.x, row.y),
            geometry.box_size(),
        ))
    }

    /// Recomputes the position map and displayed images for the row at `order`.
    pub(crate) fn sync_row(&mut self, order: usize) {
        let Some(&row_id) = self.row_order.get(order) else {
            return;
        };
        let shape = self.shape;
        for (column, id) in self.rows[row_id.index()].images.iter().enumerate() {
            let position = SlotPosition::new(order, column);
            self.positions[id.index()] = position;
            self.images[id.index()].display = shape.display_index(position);
        }
    }

    pub(crate) fn sync_all_rows(&mut self) {
        for order in 0..self.row_order.len() {
            self.sync_row(order);
        }
    }
}

/// Converts a slot index into a handle value.
#[expect(
    clippy::cast_possible_truncation,
    reason = "LatticeShape::new rejects slot counts outside the u32 range"
)]
pub(crate) fn slot_handle(index: usize) -> u32 {
    index as u32
}
