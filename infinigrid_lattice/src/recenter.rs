// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recentering: rotate slots so that a given image slot occupies the home slot.

use infinigrid_geometry::GridGeometry;

use crate::lattice::Lattice;
use crate::ring::move_index;
use crate::types::{ImageSlotId, Recentered};

impl Lattice {
    /// Rotates rows and images so that `slot` ends up at the home slot.
    ///
    /// Rows are corrected first: while the slot sits above the home row, the
    /// bottom row is moved directly above the top row (and vice versa below).
    /// Columns are then corrected in every row, so all rows stay
    /// column-synchronized. Each rotation is a pure reassignment of position,
    /// order, and displayed image; no slot is created or destroyed, and the
    /// slot itself does not move on screen.
    ///
    /// A handle that is not part of this lattice, or an invalid geometry,
    /// makes this a no-op. Calling it with the slot already at home performs
    /// zero rotations.
    pub fn recenter(&mut self, slot: ImageSlotId, geometry: &GridGeometry) -> Recentered {
        let Some(position) = self.position_of(slot) else {
            tracing::trace!(slot = slot.index(), "recenter ignored: unknown slot");
            return Recentered::NONE;
        };
        if !geometry.is_valid() {
            tracing::trace!("recenter ignored: invalid geometry");
            return Recentered::NONE;
        }

        let home = self.home();
        let mut result = Recentered::NONE;

        let mut row_index = position.row;
        while row_index < home.row {
            self.wrap_bottom_row_to_top(geometry);
            row_index += 1;
            result.row_steps -= 1;
        }
        while row_index > home.row {
            self.wrap_top_row_to_bottom(geometry);
            row_index -= 1;
            result.row_steps += 1;
        }

        let mut img_index = position.column;
        while img_index < home.column {
            self.wrap_right_images_to_left(geometry);
            img_index += 1;
            result.column_steps -= 1;
        }
        while img_index > home.column {
            self.wrap_left_images_to_right(geometry);
            img_index -= 1;
            result.column_steps += 1;
        }

        if !result.is_noop() {
            tracing::debug!(
                slot = slot.index(),
                row_steps = result.row_steps,
                column_steps = result.column_steps,
                "recentered lattice"
            );
        }
        result
    }

    fn wrap_bottom_row_to_top(&mut self, geometry: &GridGeometry) {
        let len = self.row_order.len();
        let first = self.row_order[0];
        let last = self.row_order[len - 1];
        let y = self.rows[first.index()].y - geometry.gutter - geometry.box_height;
        self.rows[last.index()].y = y;
        if len % 2 == 1 {
            self.toggle_parity(last.index(), geometry);
        }
        move_index(&mut self.row_order, len - 1, 0);
        self.row_phase = !self.row_phase;
        self.sync_all_rows();
        tracing::trace!(row = last.index(), y, "moved bottom row to top");
    }

    fn wrap_top_row_to_bottom(&mut self, geometry: &GridGeometry) {
        let len = self.row_order.len();
        let first = self.row_order[0];
        let last = self.row_order[len - 1];
        let y = self.rows[last.index()].y + geometry.gutter + geometry.box_height;
        self.rows[first.index()].y = y;
        if len % 2 == 1 {
            self.toggle_parity(first.index(), geometry);
        }
        move_index(&mut self.row_order, 0, len - 1);
        self.row_phase = !self.row_phase;
        self.sync_all_rows();
        tracing::trace!(row = first.index(), y, "moved top row to bottom");
    }

    /// With an odd row count, the row that wraps lands next to a row of the
    /// same parity, so its brick offset has to flip.
    fn toggle_parity(&mut self, row: usize, geometry: &GridGeometry) {
        let row = &mut self.rows[row];
        row.is_offset = !row.is_offset;
        if row.is_offset {
            row.x -= geometry.brick_shift();
        } else {
            row.x += geometry.brick_shift();
        }
    }

    fn wrap_right_images_to_left(&mut self, geometry: &GridGeometry) {
        for row in &mut self.rows {
            let len = row.images.len();
            let first = row.images[0];
            let last = row.images[len - 1];
            self.images[last.index()].x =
                self.images[first.index()].x - geometry.gutter - geometry.box_width;
            move_index(&mut row.images, len - 1, 0);
        }
        self.sync_all_rows();
    }

    fn wrap_left_images_to_right(&mut self, geometry: &GridGeometry) {
        for row in &mut self.rows {
            let len = row.images.len();
            let first = row.images[0];
            let last = row.images[len - 1];
            self.images[first.index()].x =
                self.images[last.index()].x + geometry.gutter + geometry.box_width;
            move_index(&mut row.images, 0, len - 1);
        }
        self.sync_all_rows();
    }
}
