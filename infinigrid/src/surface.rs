// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center detection over the slot pool.

use infinigrid_geometry::GridGeometry;
use infinigrid_lattice::{ImageSlotId, Lattice};
use infinigrid_motion::CenterTracker;
use kurbo::{Point, Vec2};

/// The slot pool together with the geometry it is laid out for.
///
/// `geometry` is `None` while the viewport is degenerate; every query is
/// then a no-op.
#[derive(Clone, Debug)]
pub(crate) struct Surface {
    pub(crate) lattice: Lattice,
    pub(crate) geometry: Option<GridGeometry>,
}

impl Surface {
    /// Viewport center in container coordinates for a container `offset`.
    fn local_center(geometry: &GridGeometry, offset: Vec2) -> Option<Point> {
        let local = geometry.viewport_center - offset;
        (local.x.is_finite() && local.y.is_finite()).then_some(local)
    }

    /// The image slot under the viewport center.
    pub(crate) fn centered_slot(&self, offset: Vec2) -> Option<ImageSlotId> {
        let geometry = self.geometry.as_ref()?;
        let local = Self::local_center(geometry, offset)?;
        self.lattice.hit_test(local, geometry)
    }
}

impl CenterTracker for Surface {
    fn track_center(&mut self, offset: Vec2) -> bool {
        let Some(slot) = self.centered_slot(offset) else {
            tracing::trace!(?offset, "no image under the viewport center");
            return false;
        };
        if self.lattice.position_of(slot) == Some(self.lattice.home()) {
            return false;
        }
        let Some(geometry) = self.geometry else {
            return false;
        };
        !self.lattice.recenter(slot, &geometry).is_noop()
    }

    fn snap_correction(&self, offset: Vec2) -> Option<Vec2> {
        let geometry = self.geometry.as_ref()?;
        let local = Self::local_center(geometry, offset)?;
        let slot = self
            .lattice
            .hit_test(local, geometry)
            .or_else(|| self.lattice.nearest_image(local, geometry))?;
        let rect = self.lattice.image_rect(slot, geometry)?;
        Some(geometry.viewport_center - (rect.center() + offset))
    }
}

#[cfg(test)]
mod tests {
    use infinigrid_geometry::GridGeometry;
    use infinigrid_lattice::{Lattice, LatticeShape, SlotPosition};
    use infinigrid_motion::CenterTracker;
    use kurbo::{Size, Vec2};

    use super::Surface;

    fn surface() -> Surface {
        let shape = LatticeShape::new(5, 9, 15).unwrap();
        let geometry = GridGeometry::from_viewport(Size::new(1000.0, 800.0), 4, 2).unwrap();
        Surface {
            lattice: Lattice::with_layout(shape, &geometry),
            geometry: Some(geometry),
        }
    }

    #[test]
    fn centered_home_does_not_recenter() {
        let mut s = surface();
        assert!(!s.track_center(Vec2::ZERO));
        assert!(!s.track_center(Vec2::new(30.0, -30.0)));
    }

    #[test]
    fn moving_a_neighbor_into_the_center_recenters() {
        let mut s = surface();
        let g = s.geometry.unwrap();
        let up = s.lattice.slot_at(SlotPosition::new(1, 4)).unwrap();
        // Offset rows sit half a box left; move the grid down one row and
        // right by the brick shift so the neighbor above is centered.
        let offset = Vec2::new(g.brick_shift(), g.vert_spacing);
        assert_eq!(s.centered_slot(offset), Some(up));

        assert!(s.track_center(offset));
        assert_eq!(s.lattice.position_of(up), Some(s.lattice.home()));
        assert!(!s.track_center(offset));
    }

    #[test]
    fn snap_targets_the_nearest_image_from_a_gutter() {
        let s = surface();
        let g = s.geometry.unwrap();
        // Center lands in the gutter just right of the home box.
        let offset = Vec2::new(-(g.box_width / 2.0 + g.gutter * 0.25), 0.0);
        assert_eq!(s.centered_slot(offset), None);
        let correction = s.snap_correction(offset).unwrap();
        assert!((correction.x - (g.box_width / 2.0 + g.gutter * 0.25)).abs() < 1e-9);
        assert!(correction.y.abs() < 1e-9);
    }

    #[test]
    fn missing_geometry_is_inert() {
        let mut s = surface();
        s.geometry = None;
        assert!(!s.track_center(Vec2::new(-500.0, 0.0)));
        assert_eq!(s.snap_correction(Vec2::new(-500.0, 0.0)), None);
        assert_eq!(s.centered_slot(Vec2::ZERO), None);
    }
}
