// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use infinigrid_geometry::GridGeometry;
use infinigrid_lattice::{ImageSlotId, Lattice, LatticeShape};
use infinigrid_motion::{Animator, InteractionController, Phase, TargetId};
use infinigrid_render::{Gallery, GridView, ImageRecord};
use kurbo::{Point, Size, Vec2};

use crate::surface::Surface;
use crate::{GridConfig, GridError};

/// Animation target used for the grid container.
pub const GRID_TARGET: TargetId = TargetId(0);

#[derive(Copy, Clone, Debug)]
struct PendingResize {
    size: Size,
    due_ms: u64,
}

/// An infinitely wrapping, draggable image grid.
///
/// Owns the image pool, the slot pool and its geometry, and the interaction
/// controller. The host forwards input and frame ticks (with its monotonic
/// time in milliseconds) and draws [`InfiniteGrid::view`].
#[derive(Debug)]
pub struct InfiniteGrid<A> {
    config: GridConfig,
    gallery: Gallery,
    surface: Surface,
    controller: InteractionController<A>,
    pending_resize: Option<PendingResize>,
}

impl<A: Animator> InfiniteGrid<A> {
    /// Creates a grid over `records` for a viewport of `viewport` pixels.
    ///
    /// A degenerate viewport is not an error: the grid is created without a
    /// layout and stays inert until a valid [`InfiniteGrid::resize`].
    pub fn new(
        records: Vec<ImageRecord>,
        viewport: Size,
        animator: A,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        let gallery = Gallery::new(records)?;
        let shape = LatticeShape::new(config.row_count, config.images_per_row, gallery.len())?;
        let geometry = layout_geometry(shape, viewport);
        let lattice = match &geometry {
            Some(geometry) => Lattice::with_layout(shape, geometry),
            None => Lattice::new(shape),
        };
        let mut controller = InteractionController::new(animator, GRID_TARGET, config.motion);
        controller.reset(Vec2::ZERO);
        Ok(Self {
            config,
            gallery,
            surface: Surface { lattice, geometry },
            controller,
            pending_resize: None,
        })
    }

    /// The configuration the grid was created with.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The image pool.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// The slot pool.
    #[must_use]
    pub fn lattice(&self) -> &Lattice {
        &self.surface.lattice
    }

    /// Current geometry, or `None` while the viewport is degenerate.
    #[must_use]
    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.surface.geometry.as_ref()
    }

    /// The interaction controller.
    #[must_use]
    pub fn controller(&self) -> &InteractionController<A> {
        &self.controller
    }

    /// Mutable access to the animation backend, for hosts that flip its
    /// readiness or otherwise manage it.
    pub fn animator_mut(&mut self) -> &mut A {
        self.controller.animator_mut()
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Translation of the grid container relative to the viewport.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.controller.offset()
    }

    /// Returns `true` once the animation backend is ready for input.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.controller.is_ready()
    }

    /// The image slot under the viewport center.
    #[must_use]
    pub fn centered_slot(&self) -> Option<ImageSlotId> {
        self.surface.centered_slot(self.offset())
    }

    /// Resolves a detail-view image id.
    #[must_use]
    pub fn detail(&self, id: &str) -> Option<(usize, &ImageRecord)> {
        self.gallery.find(id)
    }

    /// Pointer pressed at `pos` (viewport coordinates).
    ///
    /// Returns `false` if ignored: no layout yet, or the backend is not ready.
    pub fn pointer_down(&mut self, pos: Point, now_ms: u64) -> bool {
        if self.surface.geometry.is_none() {
            tracing::trace!("pointer down ignored: no layout");
            return false;
        }
        self.controller.pointer_down(pos, now_ms)
    }

    /// Pointer moved to `pos`.
    pub fn pointer_move(&mut self, pos: Point, now_ms: u64) {
        self.controller.pointer_move(pos, now_ms, &mut self.surface);
    }

    /// Pointer released at `pos`.
    pub fn pointer_up(&mut self, pos: Point, now_ms: u64) {
        self.controller.pointer_up(pos, now_ms, &mut self.surface);
    }

    /// Wheel pulse.
    pub fn wheel(&mut self, delta: Vec2, now_ms: u64) {
        if self.surface.geometry.is_none() {
            tracing::trace!("wheel ignored: no layout");
            return;
        }
        self.controller.wheel(delta, now_ms);
    }

    /// Viewport resized.
    ///
    /// The layout is rebuilt once no further resize has arrived for
    /// [`GridConfig::resize_debounce_ms`]; see [`InfiniteGrid::frame`].
    pub fn resize(&mut self, size: Size, now_ms: u64) {
        let due_ms = now_ms.saturating_add(self.config.resize_debounce_ms);
        self.pending_resize = Some(PendingResize { size, due_ms });
        if self.config.resize_debounce_ms == 0 {
            self.apply_pending_resize(now_ms);
        }
    }

    /// Advances the grid to `now_ms`: applies a due resize, steps
    /// animations, and runs center detection and recentering.
    pub fn frame(&mut self, now_ms: u64) {
        self.apply_pending_resize(now_ms);
        self.controller.frame(now_ms, &mut self.surface);
    }

    /// Snapshot of what to draw, or `None` while there is no layout.
    #[must_use]
    pub fn view(&self) -> Option<GridView<'_>> {
        let geometry = self.surface.geometry.as_ref()?;
        Some(GridView::build(
            &self.surface.lattice,
            geometry,
            &self.gallery,
            self.offset(),
        ))
    }

    fn apply_pending_resize(&mut self, now_ms: u64) {
        let Some(pending) = self.pending_resize else {
            return;
        };
        if now_ms < pending.due_ms {
            return;
        }
        self.pending_resize = None;

        let shape = self.surface.lattice.shape();
        self.surface.geometry = layout_geometry(shape, pending.size);
        match &self.surface.geometry {
            Some(geometry) => {
                self.surface.lattice.reset(geometry);
                self.controller.reset(Vec2::ZERO);
                tracing::debug!(
                    width = pending.size.width,
                    height = pending.size.height,
                    "grid re-laid out after resize"
                );
            }
            None => {
                let offset = self.controller.offset();
                self.controller.reset(offset);
            }
        }
    }
}

/// Geometry for `viewport`, logging and absorbing a degenerate size.
fn layout_geometry(shape: LatticeShape, viewport: Size) -> Option<GridGeometry> {
    match GridGeometry::from_viewport(viewport, shape.img_mid_index(), shape.row_mid_index()) {
        Ok(geometry) => Some(geometry),
        Err(err) => {
            tracing::warn!(%err, "grid left without layout");
            None
        }
    }
}
