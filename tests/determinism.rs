/*
determinism.rs

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

//! End-to-end checks through the public dispatch.
//!
//! Each test drives [`puzzlepress::puzzle::generate`] the way a page
//! renderer would, then verifies the returned data with independent
//! reimplementations of the invariants (breadth-first reachability,
//! brute-force Latin-square completion counting, beam replay).

use std::collections::VecDeque;

use puzzlepress::generator::chess::{self, ChessDifficulty, ChessMode};
use puzzlepress::generator::laser::simulate_laser_path;
use puzzlepress::generator::maze::{Branchiness, Maze};
use puzzlepress::generator::sudoku::SymbolChoice;
use puzzlepress::generator::word_search::SearchDifficulty;
use puzzlepress::puzzle::{self, CellSizeRatio, PuzzleConfig, PuzzleData, PuzzleKind};

/// Number of wall openings over the whole grid. Every removed wall is
/// recorded on both of its cells.
fn open_wall_flags(maze: &Maze) -> usize {
    maze.grid
        .iter()
        .flatten()
        .map(|cell| {
            [
                cell.walls.top,
                cell.walls.right,
                cell.walls.bottom,
                cell.walls.left,
            ]
            .iter()
            .filter(|&&wall| !wall)
            .count()
        })
        .sum()
}

/// Number of cells reachable from the entrance through open walls.
fn reachable_cells(maze: &Maze) -> usize {
    let mut seen = vec![vec![false; maze.width]; maze.height];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    seen[maze.start.y][maze.start.x] = true;
    queue.push_back((maze.start.x, maze.start.y));

    let mut count = 0;
    while let Some((x, y)) = queue.pop_front() {
        count += 1;
        let walls = maze.grid[y][x].walls;
        if !walls.top && y > 0 && !seen[y - 1][x] {
            seen[y - 1][x] = true;
            queue.push_back((x, y - 1));
        }
        if !walls.bottom && y + 1 < maze.height && !seen[y + 1][x] {
            seen[y + 1][x] = true;
            queue.push_back((x, y + 1));
        }
        if !walls.left && x > 0 && !seen[y][x - 1] {
            seen[y][x - 1] = true;
            queue.push_back((x - 1, y));
        }
        if !walls.right && x + 1 < maze.width && !seen[y][x + 1] {
            seen[y][x + 1] = true;
            queue.push_back((x + 1, y));
        }
    }
    count
}

/// Count the Latin-square completions of a partially filled grid,
/// stopping at `limit`.
fn count_completions(grid: &mut Vec<Vec<Option<u8>>>, size: usize, limit: usize) -> usize {
    let empty = (0..size)
        .flat_map(|y| (0..size).map(move |x| (y, x)))
        .find(|&(y, x)| grid[y][x].is_none());
    let Some((y, x)) = empty else {
        return 1;
    };

    let mut found = 0;
    for value in 0..size as u8 {
        let fits = !grid[y].contains(&Some(value))
            && (0..size).all(|row| grid[row][x] != Some(value));
        if fits {
            grid[y][x] = Some(value);
            found += count_completions(grid, size, limit - found);
            grid[y][x] = None;
            if found >= limit {
                break;
            }
        }
    }
    found
}

#[test]
fn maze_page_slot_yields_a_perfect_four_by_four_maze() {
    let config = PuzzleConfig::Maze {
        cell_size_ratio: CellSizeRatio::Two,
        branchiness: Branchiness::Medium,
    };
    // 3x3 slots at ratio two give a 4x4 cell maze.
    let PuzzleData::Maze(maze) = puzzle::generate(42, 3, 3, &config) else {
        panic!("wrong puzzle data");
    };

    assert_eq!((maze.width, maze.height), (4, 4));
    assert_eq!(open_wall_flags(&maze), 2 * 15);
    assert_eq!(reachable_cells(&maze), 16);
    assert_eq!((maze.end.x, maze.end.y), (3, 3));
}

#[test]
fn sudoku_slot_yields_a_uniquely_solvable_latin_square() {
    let config = PuzzleConfig::Sudoku {
        size: 3,
        symbols: SymbolChoice::default(),
    };
    let PuzzleData::Sudoku(sudoku) = puzzle::generate(7, 4, 4, &config) else {
        panic!("wrong puzzle data");
    };

    for y in 0..3 {
        for x in 0..3 {
            let value = sudoku.solution[y][x];
            assert!(value < 3);
            assert!(!sudoku.solution[y][x + 1..].contains(&value));
            assert!((y + 1..3).all(|row| sudoku.solution[row][x] != value));
        }
    }

    let mut givens: Vec<Vec<Option<u8>>> = sudoku
        .grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_given { cell.value } else { None })
                .collect()
        })
        .collect();
    assert_eq!(count_completions(&mut givens, 3, 2), 1);
}

#[test]
fn beginner_word_search_places_rightward_words_only() {
    let config = PuzzleConfig::WordSearch {
        difficulty: SearchDifficulty::Beginner,
        word_count: 3,
        limited_letters: false,
        custom_words: String::new(),
    };
    // 5x6 slots give the 5-letter grid.
    let PuzzleData::WordSearch(search) = puzzle::generate(1, 5, 6, &config) else {
        panic!("wrong puzzle data");
    };

    assert_eq!(search.size, 5);
    assert!(search.words.len() <= 3);
    assert!(!search.words.is_empty());
    for placed in &search.words {
        assert_eq!((placed.direction.dx, placed.direction.dy), (1, 0));
        for (i, letter) in placed.word.chars().enumerate() {
            assert_eq!(search.grid[placed.start_y][placed.start_x + i], letter);
        }
    }
}

#[test]
fn laser_beam_replays_to_the_marked_exit() {
    let PuzzleData::LaserMaze(laser) = puzzle::generate(99, 5, 5, &PuzzleConfig::LaserMaze)
    else {
        panic!("wrong puzzle data");
    };

    let correct = laser
        .exits
        .iter()
        .find(|exit| exit.is_correct_exit)
        .expect("one exit must be correct");
    assert_eq!(correct.emoji, laser.correct_exit_emoji);

    let replay = simulate_laser_path(&laser.mirrors, laser.entry.position, 1_000);
    assert_eq!(replay.exit, Some((correct.side, correct.position)));
    assert!(replay.path.starts_with(&laser.solution_path));
}

#[test]
fn chess_selection_is_stable_per_seed() {
    let config = PuzzleConfig::Chess {
        difficulty: ChessDifficulty::Easy,
        mode: ChessMode::Mate,
    };
    let PuzzleData::Chess { puzzle: first, .. } = puzzle::generate(3, 2, 2, &config) else {
        panic!("wrong puzzle data");
    };
    let PuzzleData::Chess {
        puzzle: second,
        position,
    } = puzzle::generate(3, 2, 2, &config)
    else {
        panic!("wrong puzzle data");
    };

    assert_eq!(first, second);
    assert_eq!(
        first,
        chess::select_puzzle(3, ChessDifficulty::Easy, ChessMode::Mate)
    );
    assert!(position.is_some());
}

#[test]
fn odd_one_out_slot_yields_one_singleton_in_25_cells() {
    let PuzzleData::OddOneOut(grid) = puzzle::generate(5, 5, 5, &PuzzleConfig::OddOneOut)
    else {
        panic!("wrong puzzle data");
    };

    let cells: Vec<&String> = grid.grid.iter().flatten().collect();
    assert_eq!(cells.len(), 25);

    let mut singles = 0;
    for cell in &cells {
        match cells.iter().filter(|other| other == &cell).count() {
            1 => {
                singles += 1;
                assert_eq!(**cell, grid.odd_emoji);
            }
            2 => (),
            n => panic!("{cell} appears {n} times"),
        }
    }
    assert_eq!(singles, 1);
}

#[test]
fn every_kind_is_deterministic_through_the_dispatch() {
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
        for seed in [0, 1, 42, 9_999] {
            let first = puzzle::generate(seed, 4, 4, &config);
            let second = puzzle::generate(seed, 4, 4, &config);
            assert_eq!(first, second, "{kind:?} diverged for seed {seed}");
        }
    }
}
