// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::GeometryError;

/// Index of the middle element of a sequence of `count` elements.
///
/// This is `floor(count / 2)`; for even counts it picks the upper of the two
/// middle elements.
#[must_use]
pub const fn mid_index(count: usize) -> usize {
    count / 2
}

/// Grid sizing derived from a viewport.
///
/// All values are in device pixels. A `GridGeometry` is a pure function of the
/// viewport size and the home row/column indices; it is recomputed on every
/// resize and never mutated in place.
///
/// Invariants (guaranteed by [`GridGeometry::from_viewport`]):
/// - every field is finite,
/// - `horiz_spacing` and `vert_spacing` are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Viewport size this geometry was computed for.
    pub viewport: Size,
    /// Width of one image box.
    pub box_width: f64,
    /// Height of one image box.
    pub box_height: f64,
    /// Gap between neighboring boxes, on both axes.
    pub gutter: f64,
    /// Distance between the left edges of neighboring boxes in a row.
    pub horiz_spacing: f64,
    /// Distance between the top edges of neighboring rows.
    pub vert_spacing: f64,
    /// Initial horizontal translation of non-offset rows.
    pub horiz_offset: f64,
    /// Initial vertical translation of the first row.
    pub vert_offset: f64,
    /// Midpoint of the viewport.
    pub viewport_center: Point,
}

impl GridGeometry {
    /// Fraction of the viewport width (height) used for one box width (height).
    pub const BOX_FRACTION: f64 = 0.35;
    /// Fraction of the viewport width used for the gutter.
    pub const GUTTER_FRACTION: f64 = 0.05;

    /// Computes the grid geometry for a viewport.
    ///
    /// `img_mid_index` and `row_mid_index` designate the home column and row,
    /// usually [`mid_index`] of the images-per-row and row counts. The offsets
    /// are chosen so that the box at that slot is centered in the viewport.
    pub fn from_viewport(
        viewport: Size,
        img_mid_index: usize,
        row_mid_index: usize,
    ) -> Result<Self, GeometryError> {
        if !viewport.width.is_finite() || !viewport.height.is_finite() {
            return Err(GeometryError::NonFiniteViewport(viewport));
        }
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(GeometryError::EmptyViewport(viewport));
        }

        let win_mid_x = viewport.width / 2.0;
        let win_mid_y = viewport.height / 2.0;
        let box_width = viewport.width * Self::BOX_FRACTION;
        let box_height = viewport.height * Self::BOX_FRACTION;
        let gutter = viewport.width * Self::GUTTER_FRACTION;
        let horiz_spacing = box_width + gutter;
        let vert_spacing = box_height + gutter;
        let horiz_offset = win_mid_x - (img_mid_index as f64 * horiz_spacing + box_width / 2.0);
        let vert_offset = win_mid_y - (row_mid_index as f64 * vert_spacing + box_height / 2.0);

        Ok(Self {
            viewport,
            box_width,
            box_height,
            gutter,
            horiz_spacing,
            vert_spacing,
            horiz_offset,
            vert_offset,
            viewport_center: Point::new(win_mid_x, win_mid_y),
        })
    }

    /// Returns `true` if every field is finite and both spacings are positive.
    ///
    /// Geometries built with [`GridGeometry::from_viewport`] always satisfy
    /// this; hand-assembled values may not, and consumers treat an invalid
    /// geometry as "do nothing".
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let fields = [
            self.viewport.width,
            self.viewport.height,
            self.box_width,
            self.box_height,
            self.gutter,
            self.horiz_spacing,
            self.vert_spacing,
            self.horiz_offset,
            self.vert_offset,
            self.viewport_center.x,
            self.viewport_center.y,
        ];
        fields.iter().all(|v| v.is_finite()) && self.horiz_spacing > 0.0 && self.vert_spacing > 0.0
    }

    /// Size of one image box.
    #[must_use]
    pub fn box_size(&self) -> Size {
        Size::new(self.box_width, self.box_height)
    }

    /// The viewport as a rectangle anchored at the origin.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        self.viewport.to_rect()
    }

    /// Horizontal shift applied to rows whose parity flag is set.
    ///
    /// Offset rows sit half a box further left than plain rows, giving the
    /// brick-wall pattern.
    #[must_use]
    pub fn brick_shift(&self) -> f64 {
        self.box_width / 2.0
    }

    /// Initial horizontal translation of a row with the given parity flag.
    #[must_use]
    pub fn initial_row_x(&self, is_offset: bool) -> f64 {
        if is_offset {
            self.horiz_offset - self.brick_shift()
        } else {
            self.horiz_offset
        }
    }

    /// Initial vertical translation of the row at `row_index`.
    #[must_use]
    pub fn initial_row_y(&self, row_index: usize) -> f64 {
        row_index as f64 * self.vert_spacing + self.vert_offset
    }

    /// Initial horizontal translation, relative to its row, of the image at `col_index`.
    #[must_use]
    pub fn initial_image_x(&self, col_index: usize) -> f64 {
        col_index as f64 * self.horiz_spacing
    }

    /// Initial parity flag for the row at `row_index`: odd rows are offset.
    #[must_use]
    pub const fn initial_row_offset(row_index: usize) -> bool {
        row_index % 2 == 1
    }

    /// Rectangle, relative to the grid container, of the box at `(row_index, col_index)`
    /// in the initial layout.
    #[must_use]
    pub fn initial_image_rect(&self, row_index: usize, col_index: usize) -> Rect {
        let x = self.initial_row_x(Self::initial_row_offset(row_index)) + self.initial_image_x(col_index);
        let y = self.initial_row_y(row_index);
        Rect::from_origin_size(Point::new(x, y), self.box_size())
    }
}
