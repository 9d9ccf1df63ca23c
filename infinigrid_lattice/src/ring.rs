// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single reordering primitive used to shift rows and images across the visible window.

/// Moves the element at `from` so that it ends up at index `to`.
///
/// `to` is clamped to `len - 1`. The relative order of every other element is
/// preserved, so moving the last element to `0` rotates the tail to the head
/// and moving `0` to `len - 1` rotates the head to the tail.
///
/// Out-of-range `from` indices leave the slice untouched. Runs in `O(|from - to|)`.
///
/// ```rust
/// use infinigrid_lattice::move_index;
///
/// let mut rows = ['a', 'b', 'c', 'd'];
/// move_index(&mut rows, 3, 0);
/// assert_eq!(rows, ['d', 'a', 'b', 'c']);
///
/// move_index(&mut rows, 0, 10);
/// assert_eq!(rows, ['a', 'b', 'c', 'd']);
/// ```
pub fn move_index<T>(items: &mut [T], from: usize, to: usize) {
    let len = items.len();
    if len == 0 || from >= len {
        return;
    }
    let to = to.min(len - 1);
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}
