/*
matching.rs

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

//! Matching puzzles: connect each item in the left column with its partner
//! in the shuffled right column.
//!
//! One curated category supplies the pairs. Rows are drawn without
//! replacement, refilling the pool when more rows are requested than the
//! category holds. The right column is shuffled with a second stream
//! seeded `seed + 1` so the display order stays independent of the draws.

use serde::{Deserialize, Serialize};

use crate::pools::matching_pairs;
use crate::rng::SeededRandom;

/// One left/right item pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
}

/// A generated matching puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchingPuzzle {
    /// Name of the category the pairs came from.
    pub category: String,

    /// Pairs in left-column order.
    pub pairs: Vec<MatchingPair>,

    /// Right-column items in display order.
    pub shuffled_right: Vec<String>,

    /// For each pair, the index of its partner in `shuffled_right`.
    /// Repeated pairs claim distinct display slots.
    pub answers: Vec<usize>,
}

/// Generate a matching puzzle with `count` rows.
///
/// The same `(seed, count)` input always produces the same puzzle.
pub fn generate_matching(seed: u64, count: usize) -> MatchingPuzzle {
    let mut rng = SeededRandom::new(seed);

    let category = &matching_pairs::CATEGORIES[rng.next_int(matching_pairs::CATEGORIES.len())];

    let mut available: Vec<(&str, &str)> = category.pairs.to_vec();
    let mut pairs: Vec<MatchingPair> = Vec::with_capacity(count);
    for _ in 0..count {
        if available.is_empty() {
            available = category.pairs.to_vec();
        }
        let (left, right) = available.remove(rng.next_int(available.len()));
        pairs.push(MatchingPair {
            left: left.to_string(),
            right: right.to_string(),
        });
    }

    let mut display_rng = SeededRandom::new(seed.wrapping_add(1));
    let mut shuffled_right: Vec<String> = pairs.iter().map(|pair| pair.right.clone()).collect();
    display_rng.shuffle(&mut shuffled_right);

    // Repeated right items (pool refills) each claim their own slot.
    let mut answers = vec![0_usize; pairs.len()];
    let mut claimed = vec![false; shuffled_right.len()];
    for (i, pair) in pairs.iter().enumerate() {
        for (j, right) in shuffled_right.iter().enumerate() {
            if !claimed[j] && *right == pair.right {
                answers[i] = j;
                claimed[j] = true;
                break;
            }
        }
    }

    MatchingPuzzle {
        category: category.name.to_string(),
        pairs,
        shuffled_right,
        answers,
    }
}
