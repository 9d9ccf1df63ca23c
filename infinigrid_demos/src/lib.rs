// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Infinigrid demos.
//!
//! The demos run headless: a [`Session`] owns a grid and a frame clock and
//! feeds it the same pointer, wheel, and resize input a host window would.

use infinigrid::{GridConfig, GridError, InfiniteGrid, Phase};
use infinigrid_motion::TweenEngine;
use infinigrid_render::ImageRecord;
use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;

/// Milliseconds per simulated frame.
pub const FRAME_MS: u64 = 16;

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info`; `RUST_LOG=infinigrid_lattice=debug` shows recenters.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .init();
}

/// A pool of `count` placeholder images.
pub fn sample_records(count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| {
            ImageRecord::new(
                format!("photo-{i:02}"),
                format!("https://picsum.photos/seed/{i}/800/640"),
                format!("Photo {i}"),
            )
        })
        .collect()
}

/// A grid driven by a simulated frame clock.
#[derive(Debug)]
pub struct Session {
    /// The grid under test.
    pub grid: InfiniteGrid<TweenEngine>,
    now_ms: u64,
}

impl Session {
    /// Creates a session over `records` for a `viewport`-sized window.
    pub fn new(
        records: Vec<ImageRecord>,
        viewport: Size,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        let grid = InfiniteGrid::new(records, viewport, TweenEngine::new(), config)?;
        Ok(Self { grid, now_ms: 0 })
    }

    /// Current simulated time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advances `frames` frames.
    pub fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now_ms += FRAME_MS;
            self.grid.frame(self.now_ms);
        }
    }

    /// Runs frames until the grid is idle, up to `max_frames`.
    pub fn settle(&mut self, max_frames: u32) {
        for _ in 0..max_frames {
            if self.grid.phase() == Phase::Idle {
                return;
            }
            self.tick(1);
        }
    }

    /// Drags from `from` by `delta` over `frames` frames.
    ///
    /// With `hold` the pointer rests before release, so the grid snaps
    /// instead of coasting.
    pub fn drag(&mut self, from: Point, delta: Vec2, frames: u32, hold: bool) {
        if !self.grid.pointer_down(from, self.now_ms) {
            tracing::warn!("drag ignored");
            return;
        }
        let frames = frames.max(1);
        for i in 1..=frames {
            self.tick(1);
            let pos = from + delta * (f64::from(i) / f64::from(frames));
            self.grid.pointer_move(pos, self.now_ms);
        }
        if hold {
            self.tick(10);
        }
        self.grid.pointer_up(from + delta, self.now_ms);
    }

    /// Sends one wheel pulse.
    pub fn wheel(&mut self, delta: Vec2) {
        self.grid.wheel(delta, self.now_ms);
    }

    /// Reports a window resize.
    pub fn resize(&mut self, size: Size) {
        self.grid.resize(size, self.now_ms);
    }

    /// One-line description of the centered image and its detail link.
    pub fn describe_center(&self) -> String {
        let Some(view) = self.grid.view() else {
            return String::from("no layout");
        };
        let Some(image) = self
            .grid
            .centered_slot()
            .and_then(|slot| view.image(slot))
        else {
            return String::from("no image under the center");
        };
        format!(
            "{} ({}) -> {}",
            image.record.title,
            image.record.url,
            image.link.href()
        )
    }
}
