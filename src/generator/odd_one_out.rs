/*
odd_one_out.rs

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

//! Odd-one-out grids: every icon appears twice except a single one.
//!
//! The grid must hold an odd number of cells, so the side length is odd.
//! One themed emoji pool supplies the icons.

use serde::{Deserialize, Serialize};

use crate::pools::emoji_themes;
use crate::rng::SeededRandom;

/// A generated odd-one-out grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OddOneOutPuzzle {
    /// Icons indexed by `grid[y][x]`.
    pub grid: Vec<Vec<String>>,

    /// The icon that appears only once.
    pub odd_emoji: String,

    pub theme_name: String,

    pub size: usize,
}

/// Generate an odd-one-out grid of `size` x `size` cells.
///
/// The same `(size, seed)` input always produces the same puzzle.
///
/// # Panics
///
/// Panics if `size` is even or zero, or if the grid needs more distinct
/// icons than the themes provide (side length above 7).
pub fn generate_odd_one_out(size: usize, seed: u64) -> OddOneOutPuzzle {
    assert!(size % 2 == 1, "odd-one-out grid side must be odd");

    let mut rng = SeededRandom::new(seed);

    let theme = &emoji_themes::ODD_ONE_OUT_THEMES[rng.next_int(emoji_themes::ODD_ONE_OUT_THEMES.len())];

    let pair_count = (size * size - 1) / 2;
    assert!(
        pair_count + 1 <= theme.emojis.len(),
        "odd-one-out grid side {size} needs more icons than the {} theme holds",
        theme.name
    );

    let selected: Vec<&str> = rng.pick_unique(theme.emojis, pair_count + 1);
    let odd_emoji = selected[selected.len() - 1];

    let mut cells: Vec<&str> = Vec::with_capacity(size * size);
    for &emoji in &selected[..pair_count] {
        cells.push(emoji);
        cells.push(emoji);
    }
    cells.push(odd_emoji);
    rng.shuffle(&mut cells);

    let grid: Vec<Vec<String>> = cells
        .chunks(size)
        .map(|row| row.iter().map(|emoji| emoji.to_string()).collect())
        .collect();

    OddOneOutPuzzle {
        grid,
        odd_emoji: odd_emoji.to_string(),
        theme_name: theme.name.to_string(),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn five_by_five_has_one_singleton_and_twelve_pairs() {
        let puzzle = generate_odd_one_out(5, 5);
        assert_eq!(puzzle.grid.len(), 5);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &puzzle.grid {
            assert_eq!(row.len(), 5);
            for emoji in row {
                *counts.entry(emoji.as_str()).or_insert(0) += 1;
            }
        }
        assert_eq!(counts.values().sum::<usize>(), 25);

        let singletons: Vec<&str> = counts
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(&emoji, _)| emoji)
            .collect();
        assert_eq!(singletons, [puzzle.odd_emoji.as_str()]);
        assert!(
            counts
                .iter()
                .all(|(&emoji, &count)| count == 2 || emoji == puzzle.odd_emoji)
        );
    }

    #[test]
    fn icons_come_from_the_reported_theme() {
        for seed in 0..10 {
            let puzzle = generate_odd_one_out(3, seed);
            let theme = emoji_themes::ODD_ONE_OUT_THEMES
                .iter()
                .find(|theme| theme.name == puzzle.theme_name)
                .unwrap();
            for row in &puzzle.grid {
                for emoji in row {
                    assert!(theme.emojis.contains(&emoji.as_str()));
                }
            }
        }
    }

    #[test]
    fn largest_supported_grid_works() {
        let puzzle = generate_odd_one_out(7, 1);
        assert_eq!(puzzle.grid.concat().len(), 49);
    }

    #[test]
    fn single_cell_grid_is_all_odd() {
        let puzzle = generate_odd_one_out(1, 2);
        assert_eq!(puzzle.grid, [[puzzle.odd_emoji.clone()]]);
    }

    #[test]
    fn same_seed_same_puzzle() {
        assert_eq!(generate_odd_one_out(5, 77), generate_odd_one_out(5, 77));
    }

    #[test]
    #[should_panic(expected = "side must be odd")]
    fn even_grid_side_is_rejected() {
        generate_odd_one_out(4, 0);
    }
}
