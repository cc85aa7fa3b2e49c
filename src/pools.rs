/*
pools.rs

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

//! Curated content the generators draw from.
//!
//! The pools are plain constants compiled into the binary. Generators
//! index into them with seeded draws, so the pools' ordering is part of
//! the deterministic contract: reordering a pool changes what a seed
//! produces.

pub mod chess_puzzles;
pub mod emoji_themes;
pub mod matching_pairs;
pub mod symbol_sets;
pub mod words;
