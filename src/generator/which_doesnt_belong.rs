/*
which_doesnt_belong.rs

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

//! Which-doesnt-belong rows: four icons from one category and one from
//! another, in shuffled order. Unlike the odd-one-out grid, which
//! duplicates icons from a single theme, every icon here is different
//! and the outlier is the one from the foreign category.

use serde::{Deserialize, Serialize};

use crate::pools::emoji_themes;
use crate::rng::SeededRandom;

/// Icons from the shared category.
const SHARED_ICONS: usize = 4;

/// One row of five icons, one of which does not belong.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WhichDoesntBelongRow {
    /// The five icons in display order.
    pub items: Vec<String>,

    /// Category the four matching icons share.
    pub category: String,

    /// Category the outlier came from.
    pub outlier_category: String,

    /// Position of the outlier in `items`.
    pub outlier_index: usize,
}

/// Generate one row.
///
/// An icon can belong to two categories in the pool, so the outlier is
/// tracked through the shuffle by position, not by value.
pub fn generate_which_doesnt_belong_row(seed: u64) -> WhichDoesntBelongRow {
    let mut rng = SeededRandom::new(seed);

    let mut order: Vec<usize> = (0..emoji_themes::BELONGING_CATEGORIES.len()).collect();
    rng.shuffle(&mut order);
    let category = &emoji_themes::BELONGING_CATEGORIES[order[0]];
    let outlier_category = &emoji_themes::BELONGING_CATEGORIES[order[1]];

    let mut shared: Vec<&str> = category.emojis.to_vec();
    rng.shuffle(&mut shared);
    shared.truncate(SHARED_ICONS);

    let mut foreign: Vec<&str> = outlier_category.emojis.to_vec();
    rng.shuffle(&mut foreign);

    let mut slots: Vec<(&str, bool)> = shared.iter().map(|&icon| (icon, false)).collect();
    slots.push((foreign[0], true));
    rng.shuffle(&mut slots);

    let outlier_index = slots
        .iter()
        .position(|&(_, is_outlier)| is_outlier)
        .unwrap_or(slots.len() - 1);

    WhichDoesntBelongRow {
        items: slots.iter().map(|&(icon, _)| icon.to_string()).collect(),
        category: category.name.to_string(),
        outlier_category: outlier_category.name.to_string(),
        outlier_index,
    }
}

/// Generate the rows for a puzzle slot, one per grid row. Consecutive
/// rows use consecutive seeds.
pub fn generate_which_doesnt_belong_rows(seed: u64, grid_height: usize) -> Vec<WhichDoesntBelongRow> {
    (0..grid_height)
        .map(|row| generate_which_doesnt_belong_row(seed.wrapping_add(row as u64)))
        .collect()
}
