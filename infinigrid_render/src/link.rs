// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detail-view addressing.

use alloc::string::{String, ToString};
use core::fmt;

/// Address of the detail view opened by activating one grid image.
///
/// Carries the image id plus the slot it was activated from, so the detail
/// view can offer previous/next navigation. The textual form is
/// `/image/{id}?row={row}&col={column}&pos={position}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailLink {
    /// Id of the linked image.
    pub image_id: String,
    /// Row order index of the slot.
    pub row: usize,
    /// Column order index of the slot.
    pub column: usize,
    /// Flat position, `row * images_per_row + column`.
    pub position: usize,
}

impl DetailLink {
    /// Path prefix of every detail link.
    pub const PREFIX: &'static str = "/image/";

    /// Formats the link as a path with query parameters.
    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }

    /// Parses the output of [`DetailLink::href`].
    ///
    /// Query parameters may come in any order; unknown ones are ignored.
    /// Returns `None` if the prefix, id, or any of the three positions is
    /// missing or malformed.
    #[must_use]
    pub fn parse(href: &str) -> Option<Self> {
        let rest = href.strip_prefix(Self::PREFIX)?;
        let (id, query) = rest.split_once('?')?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        let (mut row, mut column, mut position) = (None, None, None);
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=')?;
            let slot = match key {
                "row" => &mut row,
                "col" => &mut column,
                "pos" => &mut position,
                _ => continue,
            };
            *slot = Some(value.parse::<usize>().ok()?);
        }
        Some(Self {
            image_id: id.into(),
            row: row?,
            column: column?,
            position: position?,
        })
    }
}

impl fmt::Display for DetailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}?row={}&col={}&pos={}",
            Self::PREFIX,
            self.image_id,
            self.row,
            self.column,
            self.position
        )
    }
}
