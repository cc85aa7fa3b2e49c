/*
ordering.rs

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

//! Ordering rows: a handful of items the solver arranges from smallest to
//! largest. Numbers mode shuffles distinct values from 1 to 20; emoji mode
//! shows one icon at distinct display sizes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use crate::pools::emoji_themes;
use crate::rng::SeededRandom;

/// Seed offset between consecutive rows.
const ROW_SEED_STRIDE: u64 = 1_000;

/// Display sizes available to emoji mode, smallest to largest.
const FONT_SIZES: [usize; 5] = [4, 6, 8, 10, 12];

/// Largest value numbers mode draws from.
const NUMBER_POOL_MAX: usize = 20;

/// What kind of items a row holds.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum OrderingMode {
    #[default]
    Numbers,
    Emoji,
}

/// One item to put in order. `value` is the sort key: the number itself,
/// or the display size in emoji mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderingItem {
    pub value: usize,
    pub display: String,
    pub font_size: Option<usize>,
}

/// One row of items in scrambled order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderingRow {
    pub items: Vec<OrderingItem>,

    /// The icon shared by all items in emoji mode.
    pub emoji: Option<String>,
}

/// Generate one ordering row with up to `item_count` items.
///
/// Emoji mode caps the row at the number of distinct display sizes.
pub fn generate_ordering_row(seed: u64, item_count: usize, mode: OrderingMode) -> OrderingRow {
    let mut rng = SeededRandom::new(seed);

    match mode {
        OrderingMode::Numbers => {
            let pool: Vec<usize> = (1..=NUMBER_POOL_MAX).collect();
            let values = rng.pick_unique(&pool, item_count);
            let mut items: Vec<OrderingItem> = values
                .into_iter()
                .map(|value| OrderingItem {
                    value,
                    display: value.to_string(),
                    font_size: None,
                })
                .collect();
            rng.shuffle(&mut items);
            OrderingRow { items, emoji: None }
        }
        OrderingMode::Emoji => {
            let emoji = rng.pick(&emoji_themes::ORDERING_EMOJIS).to_string();
            let sizes = rng.pick_unique(&FONT_SIZES, item_count);
            let mut items: Vec<OrderingItem> = sizes
                .into_iter()
                .map(|size| OrderingItem {
                    value: size,
                    display: emoji.clone(),
                    font_size: Some(size),
                })
                .collect();
            rng.shuffle(&mut items);
            OrderingRow {
                items,
                emoji: Some(emoji),
            }
        }
    }
}

/// Generate the rows for a puzzle slot, one per grid row, `grid_width`
/// items each.
pub fn generate_ordering_rows(
    seed: u64,
    grid_width: usize,
    grid_height: usize,
    mode: OrderingMode,
) -> Vec<OrderingRow> {
    (0..grid_height)
        .map(|row| {
            generate_ordering_row(
                seed.wrapping_add(row as u64 * ROW_SEED_STRIDE),
                grid_width,
                mode,
            )
        })
        .collect()
}
