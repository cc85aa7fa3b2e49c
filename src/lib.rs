/*
lib.rs

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

//! Deterministic generators for printable children's puzzle pages.
//!
//! Puzzlepress builds the data behind a page of puzzles: mazes of several
//! flavors, word searches, picture Latin squares, and a set of smaller
//! fillers (counting, ordering, patterns, matching, odd-one-out,
//! which-doesnt-belong, scramble, chess). Everything is a pure function
//! of a seed and a configuration, so a printed page can be rebuilt
//! exactly from the seed in its footer.
//!
//! The usual entry point is the [`puzzle::generate`] dispatch:
//!
//! ```
//! use puzzlepress::puzzle::{self, PuzzleConfig, PuzzleKind};
//!
//! let config = PuzzleConfig::default_for(PuzzleKind::Maze);
//! let first = puzzle::generate(42, 4, 4, &config);
//! let second = puzzle::generate(42, 4, 4, &config);
//! assert_eq!(first, second);
//! ```
//!
//! Callers that already know the kind can use the typed functions in
//! [`generator`] directly.

pub mod cli_options;
pub mod generator;
pub mod pools;
pub mod puzzle;
pub mod rng;
