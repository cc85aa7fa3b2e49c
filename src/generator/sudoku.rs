/*
sudoku.rs

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

//! Sudoku-like Latin-square puzzles for young solvers.
//!
//! The constraint model is row and column distinctness only, no boxes.
//! A complete solution is built by permuting a base square, then cells are
//! revealed one by one until the givens pin down a unique completion,
//! checked with an exhaustive backtracking counter after each reveal.
//! Intended sizes are 3 and 4; other sizes fall back to a cyclic base
//! square.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::pools::symbol_sets;
use crate::rng::SeededRandom;

/// How the display symbols for the puzzle are chosen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolChoice {
    /// Index into the curated symbol sets, wrapping around the table.
    Set(usize),

    /// Caller-provided symbols, one per value.
    Custom(Vec<String>),
}

impl Default for SymbolChoice {
    fn default() -> Self {
        SymbolChoice::Set(0)
    }
}

/// One cell of the puzzle grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SudokuCell {
    /// Symbol value shown to the solver, `None` for cells left to fill in.
    pub value: Option<u8>,

    pub is_given: bool,
}

/// A generated Latin-square puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SudokuPuzzle {
    /// Puzzle grid with the given cells filled in.
    pub grid: Vec<Vec<SudokuCell>>,

    /// Complete solution the givens were taken from.
    pub solution: Vec<Vec<u8>>,

    /// Display symbol for each value index.
    pub symbols: Vec<String>,

    pub size: usize,
}

/// Generate a Latin-square puzzle with a unique solution.
///
/// The same `(size, seed, symbols)` input always produces the same puzzle.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn generate_sudoku(size: usize, seed: u64, symbols: &SymbolChoice) -> SudokuPuzzle {
    assert!(size > 0, "sudoku size must be positive");

    let mut rng = SeededRandom::new(seed);

    let solution = generate_complete_solution(size, &mut rng);
    let grid = create_puzzle(&solution, size, &mut rng);

    SudokuPuzzle {
        grid,
        solution,
        symbols: resolve_symbols(symbols, size),
        size,
    }
}

/// Build a complete Latin square by shuffling a base square with random
/// row and column swaps, which preserve the Latin property.
fn generate_complete_solution(size: usize, rng: &mut SeededRandom) -> Vec<Vec<u8>> {
    let mut grid: Vec<Vec<u8>> = match size {
        3 => vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]],
        4 => vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 3, 2],
            vec![2, 3, 0, 1],
            vec![3, 2, 1, 0],
        ],
        _ => (0..size)
            .map(|i| (0..size).map(|j| ((i + j) % size) as u8).collect())
            .collect(),
    };

    let num_swaps = 3 + (rng.next() * 5.0).floor() as usize;
    for _ in 0..num_swaps {
        if rng.next() < 0.5 {
            let a = rng.next_int(size);
            let b = rng.next_int(size);
            grid.swap(a, b);
        } else {
            let a = rng.next_int(size);
            let b = rng.next_int(size);
            for row in &mut grid {
                row.swap(a, b);
            }
        }
    }

    grid
}

/// Choose the given cells: one random cell per symbol value first, then
/// reveal more cells in random order until the solution is unique.
fn create_puzzle(solution: &[Vec<u8>], size: usize, rng: &mut SeededRandom) -> Vec<Vec<SudokuCell>> {
    let mut puzzle: Vec<Vec<Option<u8>>> = vec![vec![None; size]; size];

    // Every symbol is represented among the givens.
    for value in 0..size as u8 {
        let positions: Vec<(usize, usize)> = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| solution[y][x] == value)
            .collect();
        let (x, y) = positions[rng.next_int(positions.len())];
        puzzle[y][x] = Some(value);
    }

    let mut remaining: Vec<(usize, usize)> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| puzzle[y][x].is_none())
        .collect();
    rng.shuffle(&mut remaining);

    let mut revealed = 0;
    for (x, y) in remaining {
        if has_unique_solution(&puzzle, size) {
            break;
        }
        puzzle[y][x] = Some(solution[y][x]);
        revealed += 1;
    }
    debug!("sudoku size {size}: revealed {revealed} extra cells beyond the per-symbol givens");

    puzzle
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|value| SudokuCell {
                    value,
                    is_given: value.is_some(),
                })
                .collect()
        })
        .collect()
}

/// Whether the partial grid has exactly one completion.
fn has_unique_solution(puzzle: &[Vec<Option<u8>>], size: usize) -> bool {
    let mut grid = puzzle.to_vec();
    let mut count = 0;
    count_solutions(&mut grid, size, &mut count);
    count == 1
}

/// Count completions by backtracking, stopping as soon as two are found.
/// Cells are tried row-major, values ascending.
fn count_solutions(grid: &mut [Vec<Option<u8>>], size: usize, count: &mut usize) {
    if *count > 1 {
        return;
    }
    for y in 0..size {
        for x in 0..size {
            if grid[y][x].is_none() {
                for value in 0..size as u8 {
                    if placement_fits(grid, x, y, value) {
                        grid[y][x] = Some(value);
                        count_solutions(grid, size, count);
                        grid[y][x] = None;
                    }
                }
                return;
            }
        }
    }
    *count += 1;
}

/// Whether placing `value` at `(x, y)` keeps the row and column distinct.
fn placement_fits(grid: &[Vec<Option<u8>>], x: usize, y: usize, value: u8) -> bool {
    !grid[y].contains(&Some(value)) && grid.iter().all(|row| row[x] != Some(value))
}

/// Resolve the display symbols for a puzzle of the given size.
///
/// Curated sets wrap around the table; when the chosen list cannot cover
/// every value (a set is too small for the size, or custom symbols are
/// missing or blank), numerals stand in. The fallback is silent.
fn resolve_symbols(choice: &SymbolChoice, size: usize) -> Vec<String> {
    let numerals = || (1..=size).map(|n| n.to_string()).collect::<Vec<String>>();

    match choice {
        SymbolChoice::Set(index) => {
            let set = symbol_sets::set(*index);
            if size > set.symbols.len() {
                debug!("symbol set {} is too small for size {size}, using numerals", set.name);
                return numerals();
            }
            set.symbols[..size].iter().map(|s| s.to_string()).collect()
        }
        SymbolChoice::Custom(list) => {
            let usable: Vec<String> = list
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if usable.len() < size {
                debug!("{} custom symbols for size {size}, using numerals", usable.len());
                return numerals();
            }
            usable.into_iter().take(size).collect()
        }
    }
}
