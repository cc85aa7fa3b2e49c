/*
scramble.rs

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

//! Picture scramble: a picture cut into four quadrants, shuffled and
//! rotated for the solver to mentally reassemble. Only the arrangement is
//! generated; the picture itself comes from the caller.

use serde::{Deserialize, Serialize};

use crate::rng::SeededRandom;

/// One scrambled quadrant slot.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScrambledQuadrant {
    /// Index of the source quadrant shown in this slot, row-major from the
    /// top left.
    pub position: usize,

    /// Clockwise rotation in degrees, a multiple of 90.
    pub rotation: u16,
}

/// A generated scramble arrangement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambledPuzzle {
    /// The four slots, row-major from the top left.
    pub quadrants: Vec<ScrambledQuadrant>,
}

/// Generate a scramble arrangement.
///
/// The same seed always produces the same arrangement.
pub fn generate_scramble(seed: u64) -> ScrambledPuzzle {
    let mut rng = SeededRandom::new(seed);

    let mut positions: [usize; 4] = [0, 1, 2, 3];
    rng.shuffle(&mut positions);

    let quadrants = positions
        .into_iter()
        .map(|position| ScrambledQuadrant {
            position,
            rotation: rng.next_int(4) as u16 * 90,
        })
        .collect();

    ScrambledPuzzle { quadrants }
}
