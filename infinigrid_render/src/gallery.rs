// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The image pool the grid cycles through.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// One image of the pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRecord {
    /// Stable identifier, used in detail-view links.
    pub id: String,
    /// Source URL of the image.
    pub url: String,
    /// Human-readable title (also the alt text).
    pub title: String,
}

impl ImageRecord {
    /// Creates a record.
    pub fn new(id: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Error returned by [`Gallery::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GalleryError {
    /// The record list was empty.
    Empty,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("gallery needs at least one image"),
        }
    }
}

impl core::error::Error for GalleryError {}

/// The neighbors of one image in gallery order, wrapping at both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Adjacent<'a> {
    /// The image before the current one.
    pub previous: &'a ImageRecord,
    /// The current image.
    pub current: &'a ImageRecord,
    /// The image after the current one.
    pub next: &'a ImageRecord,
}

/// A non-empty, ordered image pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    records: Vec<ImageRecord>,
}

impl Gallery {
    /// Creates a gallery, rejecting an empty list.
    pub fn new(records: Vec<ImageRecord>) -> Result<Self, GalleryError> {
        if records.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { records })
    }

    /// Number of images. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All records, in order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Record at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Record at `index` modulo the gallery length.
    #[must_use]
    pub fn cycle(&self, index: usize) -> &ImageRecord {
        &self.records[index % self.records.len()]
    }

    /// Looks up a record by id, returning its index too.
    ///
    /// `None` means the detail view has nothing to show.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<(usize, &ImageRecord)> {
        self.records.iter().enumerate().find(|(_, r)| r.id == id)
    }

    /// Predecessor and successor of the image at `position` (taken modulo
    /// the gallery length), wrapping around at both ends.
    #[must_use]
    pub fn adjacent(&self, position: usize) -> Adjacent<'_> {
        let len = self.records.len();
        let current = position % len;
        Adjacent {
            previous: &self.records[(current + len - 1) % len],
            current: &self.records[current],
            next: &self.records[(current + 1) % len],
        }
    }
}
