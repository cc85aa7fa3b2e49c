/*
pattern.rs

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

//! Pattern sequences: a row of colored dots ending in a blank the solver
//! fills with the color that continues the cycle. Patterns alternate two
//! colors or repeat a cycle of three.

use serde::{Deserialize, Serialize};

use crate::rng::SeededRandom;

/// Seed offset between consecutive rows.
const ROW_SEED_STRIDE: u64 = 1_000;

/// Dot color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PatternColor {
    Red,
    Green,
    Blue,
    Yellow,
}

const COLORS: [PatternColor; 4] = [
    PatternColor::Red,
    PatternColor::Green,
    PatternColor::Blue,
    PatternColor::Yellow,
];

/// Cycle shape of a pattern row.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Two colors taking turns.
    Alternating,

    /// A cycle of three colors.
    Repeating,
}

/// One pattern row. The final entry of `colors` is the blank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PatternSequence {
    /// Shown dots, `None` for the blank to fill in.
    pub colors: Vec<Option<PatternColor>>,

    /// Color that belongs in the blank.
    pub answer: PatternColor,

    pub kind: PatternKind,
}

/// Generate one pattern row.
///
/// With `kind` unset, a coin flip on the row's own stream picks the shape.
pub fn generate_pattern_sequence(seed: u64, kind: Option<PatternKind>) -> PatternSequence {
    let mut rng = SeededRandom::new(seed);

    let kind = kind.unwrap_or_else(|| {
        if rng.next() < 0.5 {
            PatternKind::Alternating
        } else {
            PatternKind::Repeating
        }
    });

    let (length, cycle) = match kind {
        PatternKind::Alternating => (4 + rng.next_int(3), rng.pick_unique(&COLORS, 2)),
        PatternKind::Repeating => (5 + rng.next_int(3), rng.pick_unique(&COLORS, 3)),
    };

    let mut colors: Vec<Option<PatternColor>> =
        (0..length).map(|i| Some(cycle[i % cycle.len()])).collect();
    let answer = cycle[length % cycle.len()];
    colors.push(None);

    PatternSequence {
        colors,
        answer,
        kind,
    }
}

/// Generate the rows for a puzzle slot.
///
/// A master stream over the base seed picks each row's shape, then each
/// row draws its content from its own offset seed.
pub fn generate_pattern_sequences(seed: u64, rows: usize) -> Vec<PatternSequence> {
    let mut master = SeededRandom::new(seed);
    (0..rows)
        .map(|row| {
            let kind = if master.next() < 0.5 {
                PatternKind::Alternating
            } else {
                PatternKind::Repeating
            };
            generate_pattern_sequence(seed.wrapping_add(row as u64 * ROW_SEED_STRIDE), Some(kind))
        })
        .collect()
}
