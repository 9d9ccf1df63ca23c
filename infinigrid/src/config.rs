// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use infinigrid_lattice::ShapeError;
use infinigrid_motion::MotionConfig;
use infinigrid_render::GalleryError;

/// Configuration of an [`InfiniteGrid`](crate::InfiniteGrid).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of row slots.
    pub row_count: usize,
    /// Number of image slots per row.
    pub images_per_row: usize,
    /// Quiet period after the last resize before the layout is rebuilt.
    pub resize_debounce_ms: u64,
    /// Interaction tuning.
    pub motion: MotionConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: 5,
            images_per_row: 9,
            resize_debounce_ms: 150,
            motion: MotionConfig::default(),
        }
    }
}

/// Error returned by [`InfiniteGrid::new`](crate::InfiniteGrid::new).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The row/column counts or the image pool size were rejected.
    Shape(ShapeError),
    /// The image list was rejected.
    Gallery(GalleryError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(err) => write!(f, "invalid grid shape: {err}"),
            Self::Gallery(err) => write!(f, "invalid gallery: {err}"),
        }
    }
}

impl core::error::Error for GridError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Shape(err) => Some(err),
            Self::Gallery(err) => Some(err),
        }
    }
}

impl From<ShapeError> for GridError {
    fn from(err: ShapeError) -> Self {
        Self::Shape(err)
    }
}

impl From<GalleryError> for GridError {
    fn from(err: GalleryError) -> Self {
        Self::Gallery(err)
    }
}
