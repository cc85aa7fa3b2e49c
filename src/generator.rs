/*
generator.rs

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

//! Generate the puzzles.
//!
//! Every generator is a pure function of its parameters and a seed: the
//! same inputs always rebuild the same puzzle, so a page can be
//! regenerated from its seed alone. All randomness flows through
//! [`crate::rng::SeededRandom`].
//!
//! Grid puzzles build a maze or letter layout and keep the solution next
//! to the puzzle:
//!
//! * [`maze::generate_maze`] carves a perfect maze and solves it.
//! * [`weaving::generate_weaving_maze`] carves a maze whose passages may
//!   cross under one another.
//! * [`arrow_maze::generate_arrow_maze`] builds a jump network over a
//!   grid of arrows.
//! * [`laser::generate_laser_maze`] places mirrors and traces the beam.
//! * [`word_search::generate_word_search`] hides words in a letter grid.
//! * [`sudoku::generate_sudoku`] builds a small Latin square with picture
//!   symbols.
//!
//! Row puzzles produce one independent row per page line, each row
//! reseeded from the page seed:
//!
//! * [`counting::generate_counting_rows`]
//! * [`ordering::generate_ordering_rows`]
//! * [`pattern::generate_pattern_sequences`]
//! * [`which_doesnt_belong::generate_which_doesnt_belong_rows`]
//!
//! The remaining generators draw from curated pools in [`crate::pools`]:
//! [`matching::generate_matching`], [`odd_one_out::generate_odd_one_out`],
//! [`scramble::generate_scramble`], and [`chess::select_puzzle`].

pub mod arrow_maze;
pub mod chess;
pub mod counting;
pub mod grid;
pub mod laser;
pub mod matching;
pub mod maze;
pub mod odd_one_out;
pub mod ordering;
pub mod pattern;
pub mod scramble;
pub mod sudoku;
pub mod weaving;
pub mod which_doesnt_belong;
pub mod word_search;
