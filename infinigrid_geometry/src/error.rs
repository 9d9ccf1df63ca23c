// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned when a viewport cannot produce a usable grid geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// One of the viewport dimensions is `NaN` or infinite.
    NonFiniteViewport(Size),
    /// One of the viewport dimensions is zero or negative.
    EmptyViewport(Size),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteViewport(size) => {
                write!(f, "viewport {}x{} is not finite", size.width, size.height)
            }
            Self::EmptyViewport(size) => {
                write!(f, "viewport {}x{} has no area", size.width, size.height)
            }
        }
    }
}

impl core::error::Error for GeometryError {}
