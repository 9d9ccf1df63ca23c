// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the lattice: slot handles, positions, shape, and recenter results.

use core::fmt;

use infinigrid_geometry::mid_index;

/// Stable handle of a row slot.
///
/// Row handles are assigned once, in creation (paint) order, and never change:
/// recentering moves a row to another position in the visible window but the
/// handle, and whatever host element is keyed by it, stays the same.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RowId(pub(crate) u32);

impl RowId {
    /// Index of this row in creation order (`0..row_count`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable handle of an image slot.
///
/// Image handles are numbered row-major in creation order, so
/// `index() == row * images_per_row + column` for the *initial* layout. After
/// recentering the handle still identifies the same host element; its current
/// position is available from [`Lattice::position_of`](crate::Lattice::position_of).
///
/// ### Paint order
///
/// Host elements are never re-created or re-parented, so paint order is
/// creation order: a higher handle index is painted on top.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ImageSlotId(pub(crate) u32);

impl ImageSlotId {
    /// Index of this image slot in creation order (`0..row_count * images_per_row`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Current position of an image slot inside the visible window.
///
/// `row` is the row's index in the row ordering, `column` is the image's index
/// in its row's ordering. These are slot-order indices, not logical lattice
/// coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct SlotPosition {
    /// Index in the row ordering.
    pub row: usize,
    /// Index in the row's image ordering.
    pub column: usize,
}

impl SlotPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Error returned by [`LatticeShape::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// `row_count` was zero.
    NoRows,
    /// `images_per_row` was zero.
    NoColumns,
    /// The image pool was empty, so no slot could display anything.
    EmptyImagePool,
    /// `row_count * images_per_row` does not fit the slot handle space.
    TooManySlots,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NoRows => "lattice needs at least one row",
            Self::NoColumns => "lattice needs at least one image per row",
            Self::EmptyImagePool => "lattice needs at least one image to display",
            Self::TooManySlots => "row count times images per row exceeds the slot handle range",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ShapeError {}

/// Dimensions of the slot pool and the size of the image pool it cycles through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LatticeShape {
    row_count: usize,
    images_per_row: usize,
    image_count: usize,
}

impl LatticeShape {
    /// Validates and creates a shape.
    pub fn new(
        row_count: usize,
        images_per_row: usize,
        image_count: usize,
    ) -> Result<Self, ShapeError> {
        if row_count == 0 {
            return Err(ShapeError::NoRows);
        }
        if images_per_row == 0 {
            return Err(ShapeError::NoColumns);
        }
        if image_count == 0 {
            return Err(ShapeError::EmptyImagePool);
        }
        match row_count.checked_mul(images_per_row) {
            Some(total) if u32::try_from(total).is_ok() => {}
            _ => return Err(ShapeError::TooManySlots),
        }
        Ok(Self {
            row_count,
            images_per_row,
            image_count,
        })
    }

    /// Number of row slots.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of image slots in each row.
    #[must_use]
    pub const fn images_per_row(&self) -> usize {
        self.images_per_row
    }

    /// Number of distinct images the slots cycle through.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Total number of image slots.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.row_count * self.images_per_row
    }

    /// Index of the home row, `floor(row_count / 2)`.
    #[must_use]
    pub const fn row_mid_index(&self) -> usize {
        mid_index(self.row_count)
    }

    /// Index of the home column, `floor(images_per_row / 2)`.
    #[must_use]
    pub const fn img_mid_index(&self) -> usize {
        mid_index(self.images_per_row)
    }

    /// The home slot.
    #[must_use]
    pub const fn home(&self) -> SlotPosition {
        SlotPosition::new(self.row_mid_index(), self.img_mid_index())
    }

    /// Image displayed by the slot at `position`.
    ///
    /// This is `(row * images_per_row + column) mod image_count`, always in
    /// `0..image_count`.
    #[must_use]
    pub const fn display_index(&self, position: SlotPosition) -> usize {
        (position.row * self.images_per_row + position.column) % self.image_count
    }
}

/// Summary of the rotations performed by one call to
/// [`Lattice::recenter`](crate::Lattice::recenter).
///
/// Steps are signed: a negative `row_steps` means rows were moved from the
/// bottom edge to the top edge (the centered element was above home), a
/// positive value means the opposite. `column_steps` follows the same
/// convention for left/right, and every row was rotated by the same amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Recentered {
    /// Signed number of row rotations.
    pub row_steps: isize,
    /// Signed number of per-row image rotations.
    pub column_steps: isize,
}

impl Recentered {
    /// Nothing was rotated.
    pub const NONE: Self = Self {
        row_steps: 0,
        column_steps: 0,
    };

    /// Returns `true` if no rotation happened.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.row_steps == 0 && self.column_steps == 0
    }

    /// Number of row rotations performed.
    #[must_use]
    pub const fn row_rotations(&self) -> usize {
        self.row_steps.unsigned_abs()
    }

    /// Number of image rotations performed in each row.
    #[must_use]
    pub const fn column_rotations(&self) -> usize {
        self.column_steps.unsigned_abs()
    }
}
