/*
counting.rs

Copyright 2025 The Puzzlepress authors

This file is part of Puzzlepress.

Puzzlepress is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Puzzlepress is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Puzzlepress. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Counting rows: a run of identical icons the solver counts and writes
//! down. Each row draws its own icon and count from a seed offset by the
//! row index, so rows stay independent but reproducible.

use serde::{Deserialize, Serialize};

use crate::pools::emoji_themes;
use crate::rng::SeededRandom;

/// Seed offset between consecutive rows.
const ROW_SEED_STRIDE: u64 = 1_000;

/// One row of icons to count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountingRow {
    pub emoji: String,

    /// How many icons the row shows.
    pub count: usize,
}

/// Generate one counting row with a count in `min..=max`.
pub fn generate_counting_row(seed: u64, min: usize, max: usize) -> CountingRow {
    let mut rng = SeededRandom::new(seed);
    let emoji = rng.pick(&emoji_themes::COUNTING_EMOJIS);
    CountingRow {
        emoji: emoji.to_string(),
        count: rng.next_int_range(min, max),
    }
}

/// Generate the rows for a puzzle slot, one per grid row.
///
/// The count range follows the slot width, `max(1, width - 3)` up to
/// `width + 2`, so wider slots hold longer runs.
pub fn generate_counting_rows(seed: u64, grid_width: usize, grid_height: usize) -> Vec<CountingRow> {
    let min = grid_width.saturating_sub(3).max(1);
    let max = grid_width + 2;
    (0..grid_height)
        .map(|row| generate_counting_row(seed.wrapping_add(row as u64 * ROW_SEED_STRIDE), min, max))
        .collect()
}
