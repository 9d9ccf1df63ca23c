// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries over image slots.

use infinigrid_geometry::GridGeometry;
use kurbo::{Point, Rect};

use crate::lattice::{Lattice, slot_handle};
use crate::types::ImageSlotId;

impl Lattice {
    /// Returns the topmost image slot containing `point`.
    ///
    /// `point` is relative to the grid container (subtract the container's
    /// translation from a viewport point first). Only image slots are
    /// eligible; rows and gutters never hit. When several slots contain the
    /// point, the one painted last (highest [`ImageSlotId`]) wins.
    ///
    /// Returns `None` for an invalid geometry.
    #[must_use]
    pub fn hit_test(&self, point: Point, geometry: &GridGeometry) -> Option<ImageSlotId> {
        if !geometry.is_valid() || !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let mut hit = None;
        self.for_each_rect(geometry, |id, rect| {
            if rect.contains(point) {
                hit = Some(id);
            }
        });
        hit
    }

    /// Returns the image slot whose center is nearest to `point`.
    ///
    /// Ties go to the slot painted last, matching [`Lattice::hit_test`].
    /// Returns `None` for an invalid geometry.
    #[must_use]
    pub fn nearest_image(&self, point: Point, geometry: &GridGeometry) -> Option<ImageSlotId> {
        if !geometry.is_valid() || !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let mut best: Option<(ImageSlotId, f64)> = None;
        self.for_each_rect(geometry, |id, rect| {
            let d = (rect.center() - point).hypot2();
            match best {
                Some((_, best_d)) if d > best_d => {}
                _ => best = Some((id, d)),
            }
        });
        best.map(|(id, _)| id)
    }

    /// Visits every image slot in paint order with its container-relative rectangle.
    fn for_each_rect(&self, geometry: &GridGeometry, mut f: impl FnMut(ImageSlotId, Rect)) {
        let size = geometry.box_size();
        for (index, image) in self.images.iter().enumerate() {
            let row = &self.rows[image.row.index()];
            let rect = Rect::from_origin_size(Point::new(row.x + image.x, row.y), size);
            f(ImageSlotId(slot_handle(index)), rect);
        }
    }
}
