/*
puzzle.rs

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

//! Dispatch a page slot to the right generator.
//!
//! A page is a grid of slots; a puzzle occupies a rectangle of
//! `grid_width` by `grid_height` slots. [`generate`] turns the slot
//! rectangle, a seed, and a per-kind [`PuzzleConfig`] into the matching
//! [`PuzzleData`]. The slot-to-cell conversions live here so that every
//! caller derives the same generator dimensions from the same slot
//! rectangle.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use crate::generator::arrow_maze::{self, ArrowMaze, EmojiMode};
use crate::generator::chess::{self, ChessDifficulty, ChessMode, ChessPuzzle, ParsedPosition};
use crate::generator::counting::{self, CountingRow};
use crate::generator::laser::{self, LaserMazePuzzle};
use crate::generator::matching::{self, MatchingPuzzle};
use crate::generator::maze::{self, Branchiness, Maze};
use crate::generator::odd_one_out::{self, OddOneOutPuzzle};
use crate::generator::ordering::{self, OrderingMode, OrderingRow};
use crate::generator::pattern::{self, PatternSequence};
use crate::generator::scramble::{self, ScrambledPuzzle};
use crate::generator::sudoku::{self, SudokuPuzzle, SymbolChoice};
use crate::generator::weaving::{self, CrossingDensity, WeavingMaze};
use crate::generator::which_doesnt_belong::{self, WhichDoesntBelongRow};
use crate::generator::word_search::{self, SearchDifficulty, WordSearchPuzzle};

/// The largest grid the odd-one-out themes can fill without repeats.
const ODD_ONE_OUT_MAX_SIDE: usize = 7;

/// The puzzle kinds a page can hold.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleKind {
    Maze,
    WeavingMaze,
    ArrowMaze,
    LaserMaze,
    Sudoku,
    WordSearch,
    Matching,
    OddOneOut,
    WhichDoesntBelong,
    Counting,
    Ordering,
    Pattern,
    Scramble,
    Chess,
}

/// How many maze cells one page slot spans.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellSizeRatio {
    #[default]
    Two = 2,
    Three = 3,
    Four = 4,
}

impl CellSizeRatio {
    /// The ratio as a multiplier.
    pub fn factor(self) -> usize {
        self as usize
    }
}

/// Per-kind generation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PuzzleConfig {
    Maze {
        cell_size_ratio: CellSizeRatio,
        branchiness: Branchiness,
    },
    WeavingMaze {
        cell_size_ratio: CellSizeRatio,
        branchiness: Branchiness,
        crossing_density: CrossingDensity,
    },
    ArrowMaze {
        emoji_mode: EmojiMode,
    },
    LaserMaze,
    Sudoku {
        size: usize,
        symbols: SymbolChoice,
    },
    WordSearch {
        difficulty: SearchDifficulty,
        word_count: usize,
        limited_letters: bool,
        custom_words: String,
    },
    Matching,
    OddOneOut,
    WhichDoesntBelong,
    Counting,
    Ordering {
        mode: OrderingMode,
    },
    Pattern,
    Scramble,
    Chess {
        difficulty: ChessDifficulty,
        mode: ChessMode,
    },
}

impl PuzzleConfig {
    /// The kind this configuration belongs to.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Self::Maze { .. } => PuzzleKind::Maze,
            Self::WeavingMaze { .. } => PuzzleKind::WeavingMaze,
            Self::ArrowMaze { .. } => PuzzleKind::ArrowMaze,
            Self::LaserMaze => PuzzleKind::LaserMaze,
            Self::Sudoku { .. } => PuzzleKind::Sudoku,
            Self::WordSearch { .. } => PuzzleKind::WordSearch,
            Self::Matching => PuzzleKind::Matching,
            Self::OddOneOut => PuzzleKind::OddOneOut,
            Self::WhichDoesntBelong => PuzzleKind::WhichDoesntBelong,
            Self::Counting => PuzzleKind::Counting,
            Self::Ordering { .. } => PuzzleKind::Ordering,
            Self::Pattern => PuzzleKind::Pattern,
            Self::Scramble => PuzzleKind::Scramble,
            Self::Chess { .. } => PuzzleKind::Chess,
        }
    }

    /// The default configuration for a kind.
    pub fn default_for(kind: PuzzleKind) -> Self {
        match kind {
            PuzzleKind::Maze => Self::Maze {
                cell_size_ratio: CellSizeRatio::default(),
                branchiness: Branchiness::default(),
            },
            PuzzleKind::WeavingMaze => Self::WeavingMaze {
                cell_size_ratio: CellSizeRatio::default(),
                branchiness: Branchiness::default(),
                crossing_density: CrossingDensity::default(),
            },
            PuzzleKind::ArrowMaze => Self::ArrowMaze {
                emoji_mode: EmojiMode::default(),
            },
            PuzzleKind::LaserMaze => Self::LaserMaze,
            PuzzleKind::Sudoku => Self::Sudoku {
                size: 4,
                symbols: SymbolChoice::default(),
            },
            PuzzleKind::WordSearch => Self::WordSearch {
                difficulty: SearchDifficulty::default(),
                word_count: 5,
                limited_letters: false,
                custom_words: String::new(),
            },
            PuzzleKind::Matching => Self::Matching,
            PuzzleKind::OddOneOut => Self::OddOneOut,
            PuzzleKind::WhichDoesntBelong => Self::WhichDoesntBelong,
            PuzzleKind::Counting => Self::Counting,
            PuzzleKind::Ordering => Self::Ordering {
                mode: OrderingMode::default(),
            },
            PuzzleKind::Pattern => Self::Pattern,
            PuzzleKind::Scramble => Self::Scramble,
            PuzzleKind::Chess => Self::Chess {
                difficulty: ChessDifficulty::default(),
                mode: ChessMode::default(),
            },
        }
    }
}

/// A generated puzzle, ready to lay out on the page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PuzzleData {
    Maze(Maze),
    WeavingMaze(WeavingMaze),
    ArrowMaze(ArrowMaze),
    LaserMaze(LaserMazePuzzle),
    Sudoku(SudokuPuzzle),
    WordSearch(WordSearchPuzzle),
    Matching(MatchingPuzzle),
    OddOneOut(OddOneOutPuzzle),
    WhichDoesntBelong { rows: Vec<WhichDoesntBelongRow> },
    Counting { rows: Vec<CountingRow> },
    Ordering { rows: Vec<OrderingRow> },
    Pattern { rows: Vec<PatternSequence> },
    Scramble(ScrambledPuzzle),
    Chess {
        puzzle: ChessPuzzle,

        /// Board after the setup move, absent if the stored position
        /// could not be parsed.
        position: Option<ParsedPosition>,
    },
}

impl PuzzleData {
    /// The kind this puzzle belongs to.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Self::Maze(_) => PuzzleKind::Maze,
            Self::WeavingMaze(_) => PuzzleKind::WeavingMaze,
            Self::ArrowMaze(_) => PuzzleKind::ArrowMaze,
            Self::LaserMaze(_) => PuzzleKind::LaserMaze,
            Self::Sudoku(_) => PuzzleKind::Sudoku,
            Self::WordSearch(_) => PuzzleKind::WordSearch,
            Self::Matching(_) => PuzzleKind::Matching,
            Self::OddOneOut(_) => PuzzleKind::OddOneOut,
            Self::WhichDoesntBelong { .. } => PuzzleKind::WhichDoesntBelong,
            Self::Counting { .. } => PuzzleKind::Counting,
            Self::Ordering { .. } => PuzzleKind::Ordering,
            Self::Pattern { .. } => PuzzleKind::Pattern,
            Self::Scramble(_) => PuzzleKind::Scramble,
            Self::Chess { .. } => PuzzleKind::Chess,
        }
    }
}

/// Generate the puzzle for a slot rectangle.
///
/// The same `(seed, grid_width, grid_height, config)` input always
/// produces the same puzzle.
///
/// # Panics
///
/// Panics if `grid_width` or `grid_height` is 0, or if the configuration
/// derives a zero-cell maze (one slot at the smallest cell size ratio).
pub fn generate(
    seed: u64,
    grid_width: usize,
    grid_height: usize,
    config: &PuzzleConfig,
) -> PuzzleData {
    assert!(
        grid_width > 0 && grid_height > 0,
        "puzzle slot dimensions must be positive"
    );

    match config {
        PuzzleConfig::Maze {
            cell_size_ratio,
            branchiness,
        } => {
            let (width, height) = maze_cells(grid_width, grid_height, *cell_size_ratio);
            PuzzleData::Maze(maze::generate_maze(width, height, seed, *branchiness))
        }
        PuzzleConfig::WeavingMaze {
            cell_size_ratio,
            branchiness,
            crossing_density,
        } => {
            let (width, height) = maze_cells(grid_width, grid_height, *cell_size_ratio);
            PuzzleData::WeavingMaze(weaving::generate_weaving_maze(
                width,
                height,
                seed,
                *branchiness,
                *crossing_density,
            ))
        }
        PuzzleConfig::ArrowMaze { emoji_mode } => PuzzleData::ArrowMaze(
            arrow_maze::generate_arrow_maze(
                2 * grid_width,
                2 * grid_height - 1,
                seed,
                *emoji_mode,
            ),
        ),
        PuzzleConfig::LaserMaze => {
            PuzzleData::LaserMaze(laser::generate_laser_maze(grid_width, grid_height, seed))
        }
        PuzzleConfig::Sudoku { size, symbols } => {
            PuzzleData::Sudoku(sudoku::generate_sudoku(*size, seed, symbols))
        }
        PuzzleConfig::WordSearch {
            difficulty,
            word_count,
            limited_letters,
            custom_words,
        } => PuzzleData::WordSearch(word_search::generate_word_search(
            seed,
            *difficulty,
            *word_count,
            word_search_size(grid_width, grid_height),
            *limited_letters,
            custom_words,
        )),
        PuzzleConfig::Matching => {
            PuzzleData::Matching(matching::generate_matching(seed, grid_height))
        }
        PuzzleConfig::OddOneOut => PuzzleData::OddOneOut(odd_one_out::generate_odd_one_out(
            odd_one_out_side(grid_width, grid_height),
            seed,
        )),
        PuzzleConfig::WhichDoesntBelong => PuzzleData::WhichDoesntBelong {
            rows: which_doesnt_belong::generate_which_doesnt_belong_rows(seed, grid_height),
        },
        PuzzleConfig::Counting => PuzzleData::Counting {
            rows: counting::generate_counting_rows(seed, grid_width, grid_height),
        },
        PuzzleConfig::Ordering { mode } => PuzzleData::Ordering {
            rows: ordering::generate_ordering_rows(seed, grid_width, grid_height, *mode),
        },
        PuzzleConfig::Pattern => PuzzleData::Pattern {
            rows: pattern::generate_pattern_sequences(seed, grid_height),
        },
        PuzzleConfig::Scramble => PuzzleData::Scramble(scramble::generate_scramble(seed)),
        PuzzleConfig::Chess { difficulty, mode } => {
            let puzzle = chess::select_puzzle(seed, *difficulty, *mode);
            let position = match chess::position_after_setup(&puzzle) {
                Ok(position) => Some(position),
                Err(message) => {
                    debug!("dropping the board preview: {message}");
                    None
                }
            };
            PuzzleData::Chess { puzzle, position }
        }
    }
}

/// Maze cells spanned by a slot rectangle.
fn maze_cells(grid_width: usize, grid_height: usize, ratio: CellSizeRatio) -> (usize, usize) {
    let factor = ratio.factor();
    (grid_width * factor - 2, grid_height * factor - 2)
}

/// Letter-grid side for a slot rectangle. The grid is square and a row
/// shorter than the slot to leave room for the word list.
fn word_search_size(grid_width: usize, grid_height: usize) -> usize {
    grid_width.min(grid_height.saturating_sub(1)).clamp(5, 9)
}

/// Odd grid side for a slot rectangle, capped by the theme sizes.
fn odd_one_out_side(grid_width: usize, grid_height: usize) -> usize {
    let side = grid_width.min(grid_height).min(ODD_ONE_OUT_MAX_SIDE);
    if side % 2 == 0 { side - 1 } else { side }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_slots_scale_to_cells() {
        let config = PuzzleConfig::Maze {
            cell_size_ratio: CellSizeRatio::Two,
            branchiness: Branchiness::Medium,
        };
        match generate(42, 4, 4, &config) {
            PuzzleData::Maze(maze) => {
                assert_eq!(maze.width, 6);
                assert_eq!(maze.height, 6);
            }
            other => panic!("wrong data: {other:?}"),
        }

        let config = PuzzleConfig::Maze {
            cell_size_ratio: CellSizeRatio::Four,
            branchiness: Branchiness::Medium,
        };
        match generate(42, 3, 2, &config) {
            PuzzleData::Maze(maze) => {
                assert_eq!(maze.width, 10);
                assert_eq!(maze.height, 6);
            }
            other => panic!("wrong data: {other:?}"),
        }
    }

    #[test]
    fn arrow_maze_slots_double_minus_one_row() {
        let config = PuzzleConfig::default_for(PuzzleKind::ArrowMaze);
        match generate(9, 3, 3, &config) {
            PuzzleData::ArrowMaze(maze) => {
                assert_eq!(maze.width, 6);
                assert_eq!(maze.height, 5);
            }
            other => panic!("wrong data: {other:?}"),
        }
    }

    #[test]
    fn word_search_side_is_clamped() {
        assert_eq!(word_search_size(10, 14), 9);
        assert_eq!(word_search_size(6, 7), 6);
        assert_eq!(word_search_size(2, 2), 5);
        assert_eq!(word_search_size(8, 1), 5);
    }

    #[test]
    fn odd_one_out_side_is_odd_and_capped() {
        assert_eq!(odd_one_out_side(5, 5), 5);
        assert_eq!(odd_one_out_side(6, 8), 5);
        assert_eq!(odd_one_out_side(9, 9), 7);
        assert_eq!(odd_one_out_side(1, 4), 1);
    }

    #[test]
    fn row_puzzles_fill_one_row_per_slot_row() {
        match generate(3, 5, 4, &PuzzleConfig::Counting) {
            PuzzleData::Counting { rows } => assert_eq!(rows.len(), 4),
            other => panic!("wrong data: {other:?}"),
        }
        match generate(3, 5, 4, &PuzzleConfig::Pattern) {
            PuzzleData::Pattern { rows } => assert_eq!(rows.len(), 4),
            other => panic!("wrong data: {other:?}"),
        }
        match generate(3, 5, 4, &PuzzleConfig::WhichDoesntBelong) {
            PuzzleData::WhichDoesntBelong { rows } => assert_eq!(rows.len(), 4),
            other => panic!("wrong data: {other:?}"),
        }
        let config = PuzzleConfig::default_for(PuzzleKind::Ordering);
        match generate(3, 5, 4, &config) {
            PuzzleData::Ordering { rows } => {
                assert_eq!(rows.len(), 4);
                assert_eq!(rows[0].items.len(), 5);
            }
            other => panic!("wrong data: {other:?}"),
        }
        match generate(3, 5, 4, &PuzzleConfig::Matching) {
            PuzzleData::Matching(puzzle) => assert_eq!(puzzle.pairs.len(), 4),
            other => panic!("wrong data: {other:?}"),
        }
    }

    #[test]
    fn chess_ships_a_replayed_board() {
        let config = PuzzleConfig::default_for(PuzzleKind::Chess);
        match generate(11, 2, 2, &config) {
            PuzzleData::Chess { position, .. } => assert!(position.is_some()),
            other => panic!("wrong data: {other:?}"),
        }
    }

    #[test]
    fn every_kind_has_a_default_config() {
        let kinds = [
            PuzzleKind::Maze,
            PuzzleKind::WeavingMaze,
            PuzzleKind::ArrowMaze,
            PuzzleKind::LaserMaze,
            PuzzleKind::Sudoku,
            PuzzleKind::WordSearch,
            PuzzleKind::Matching,
            PuzzleKind::OddOneOut,
            PuzzleKind::WhichDoesntBelong,
            PuzzleKind::Counting,
            PuzzleKind::Ordering,
            PuzzleKind::Pattern,
            PuzzleKind::Scramble,
            PuzzleKind::Chess,
        ];
        for kind in kinds {
            let config = PuzzleConfig::default_for(kind);
            assert_eq!(config.kind(), kind);
            let data = generate(1, 4, 4, &config);
            assert_eq!(data.kind(), kind);
        }
    }

    #[test]
    fn data_is_tagged_by_kind() {
        let data = generate(99, 5, 5, &PuzzleConfig::LaserMaze);
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["kind"], "laser-maze");
    }

    #[test]
    fn same_inputs_same_puzzle() {
        let config = PuzzleConfig::default_for(PuzzleKind::WordSearch);
        let a = generate(7, 6, 7, &config);
        let b = generate(7, 6, 7, &config);
        assert_eq!(a, b);
    }
}
