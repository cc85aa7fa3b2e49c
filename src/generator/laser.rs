/*
laser.rs

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

//! Laser maze generation.
//!
//! A beam enters the mirror grid from the top, bounces off diagonal mirrors
//! and leaves through one side. The solver follows the beam and picks the
//! exit icon where it comes out. Layouts are drawn at random and simulated
//! until one sends the beam out on the left or right side with enough
//! reflections to be interesting; a hand-built zigzag layout stands in if
//! the search budget runs out.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::grid::{Direction, Point};
use crate::rng::SeededRandom;

/// Lowest number of reflections an accepted layout must produce.
const MIN_REFLECTIONS: usize = 4;

/// Number of random layouts tried before falling back.
const MAX_ATTEMPTS: usize = 500;

/// Step budget for one beam simulation.
const MAX_STEPS: usize = 1_000;

/// Icon marking the beam entry.
const ENTRY_EMOJI: &str = "🚀";

/// Icons for the exits on both sides, up to a 6x6 grid.
const EXIT_EMOJIS: [&str; 12] = [
    "🪐", "⭐", "🌙", "☀️", "🌍", "💫", "🌟", "✨", "🔮", "🎯", "💎", "🎪",
];

/// A diagonal mirror.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mirror {
    /// Rising diagonal, like `/`.
    #[serde(rename = "/")]
    Slash,

    /// Falling diagonal, like `\`.
    #[serde(rename = "\\")]
    Backslash,
}

/// Grid side where the beam can leave.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// One labelled exit slot on the left or right edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExitPoint {
    /// Edge the slot sits on. Only the left and right edges carry exits.
    pub side: Side,

    /// Row index on that edge.
    pub position: usize,

    pub emoji: String,

    /// Whether the beam really comes out here.
    pub is_correct_exit: bool,
}

/// Beam entry, always on the top edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Column index on the top edge.
    pub position: usize,

    pub emoji: String,
}

/// A generated laser maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LaserMazePuzzle {
    /// Mirrors indexed by `mirrors[row][col]`.
    pub mirrors: Vec<Vec<Option<Mirror>>>,

    pub entry: EntryPoint,

    /// Exit slots on both sides at every row.
    pub exits: Vec<ExitPoint>,

    /// Cells the beam crosses, in order.
    pub solution_path: Vec<Point>,

    /// Icon of the one correct exit.
    pub correct_exit_emoji: String,

    /// Mirror grid dimension.
    pub grid_size: usize,
}

/// Outcome of one beam simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Cells crossed, in order.
    pub path: Vec<Point>,

    /// Side and position where the beam left the grid, or `None` when the
    /// beam loops forever.
    pub exit: Option<(Side, usize)>,

    /// Number of mirror reflections.
    pub reflections: usize,
}

/// New travel direction after hitting a mirror.
fn reflect(direction: Direction, mirror: Mirror) -> Direction {
    match mirror {
        Mirror::Slash => match direction {
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Up => Direction::Right,
        },
        Mirror::Backslash => match direction {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Left,
        },
    }
}

/// Trace the beam from the given top-edge column through the mirror grid.
///
/// The beam starts heading down. Loops are detected through a set of
/// `(x, y, direction)` states; a looping beam reports no exit.
pub fn simulate_laser_path(
    mirrors: &[Vec<Option<Mirror>>],
    entry_col: usize,
    max_steps: usize,
) -> Simulation {
    let grid_size = mirrors.len() as i32;
    let mut path: Vec<Point> = Vec::new();
    let mut reflections: usize = 0;

    let mut x: i32 = entry_col as i32;
    let mut y: i32 = 0;
    let mut direction = Direction::Down;

    let mut visited: HashSet<(i32, i32, Direction)> = HashSet::new();

    for _ in 0..max_steps {
        if !visited.insert((x, y, direction)) {
            // Loop detected.
            return Simulation {
                path,
                exit: None,
                reflections,
            };
        }

        let exit = if x < 0 {
            Some((Side::Left, y as usize))
        } else if x >= grid_size {
            Some((Side::Right, y as usize))
        } else if y < 0 {
            Some((Side::Top, x as usize))
        } else if y >= grid_size {
            Some((Side::Bottom, x as usize))
        } else {
            None
        };
        if exit.is_some() {
            return Simulation {
                path,
                exit,
                reflections,
            };
        }

        path.push(Point::new(x as usize, y as usize));

        if let Some(mirror) = mirrors[y as usize][x as usize] {
            direction = reflect(direction, mirror);
            reflections += 1;
        }

        let (dx, dy) = direction.delta();
        x += dx;
        y += dy;
    }

    Simulation {
        path,
        exit: None,
        reflections,
    }
}

/// Hand-built zigzag layout used when no random layout passes: the beam
/// enters at column 0 and stair-steps down to leave on the right side of
/// row 2 with five reflections.
fn fallback_layout(grid_size: usize) -> (Vec<Vec<Option<Mirror>>>, usize, Vec<Point>, Side, usize) {
    let mut mirrors: Vec<Vec<Option<Mirror>>> = vec![vec![None; grid_size]; grid_size];
    mirrors[0][0] = Some(Mirror::Backslash);
    mirrors[0][1] = Some(Mirror::Backslash);
    mirrors[1][1] = Some(Mirror::Backslash);
    mirrors[1][2] = Some(Mirror::Backslash);
    mirrors[2][2] = Some(Mirror::Backslash);
    let path = vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(2, 1),
        Point::new(2, 2),
    ];
    (mirrors, 0, path, Side::Right, 2)
}

/// Generate a laser maze.
///
/// The mirror grid dimension is derived from the allocated page cells as
/// `min(grid_width, grid_height) - 1`, clamped to the 3 to 6 range. The
/// same input always produces the same puzzle.
pub fn generate_laser_maze(grid_width: usize, grid_height: usize, seed: u64) -> LaserMazePuzzle {
    let mut rng = SeededRandom::new(seed);

    let grid_size: usize = grid_width.min(grid_height).saturating_sub(1).clamp(3, 6);

    let mut mirrors: Vec<Vec<Option<Mirror>>> = Vec::new();
    let mut solution_path: Vec<Point> = Vec::new();
    let mut accepted: Option<(Side, usize)> = None;
    let mut entry_col: usize = 0;

    let mut attempts: usize = 0;
    while attempts < MAX_ATTEMPTS {
        mirrors = (0..grid_size)
            .map(|_| {
                (0..grid_size)
                    .map(|_| {
                        if rng.next() < 0.8 {
                            if rng.next() < 0.5 {
                                Some(Mirror::Slash)
                            } else {
                                Some(Mirror::Backslash)
                            }
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        entry_col = rng.next_int(grid_size);

        let result = simulate_laser_path(&mirrors, entry_col, MAX_STEPS);
        if let Some((side @ (Side::Left | Side::Right), position)) = result.exit {
            if position < grid_size && result.reflections >= MIN_REFLECTIONS {
                solution_path = result.path;
                accepted = Some((side, position));
                break;
            }
        }
        attempts += 1;
    }

    let (exit_side, exit_position) = match accepted {
        Some(exit) => {
            debug!("laser layout accepted after {attempts} failed attempts");
            exit
        }
        None => {
            debug!("no laser layout accepted after {MAX_ATTEMPTS} attempts, using the fallback");
            let (fallback_mirrors, fallback_entry, fallback_path, side, position) =
                fallback_layout(grid_size);
            mirrors = fallback_mirrors;
            entry_col = fallback_entry;
            solution_path = fallback_path;
            (side, position)
        }
    };

    // Label every row on both sides, one icon each, one of them correct.
    let total_exits: usize = grid_size * 2;
    let shuffled_emojis: Vec<&str> = rng.pick_unique(&EXIT_EMOJIS, total_exits);

    let mut exits: Vec<ExitPoint> = Vec::with_capacity(total_exits);
    let mut emoji_index: usize = 0;
    let mut correct_exit_emoji = String::new();

    for side in [Side::Left, Side::Right] {
        for position in 0..grid_size {
            let is_correct = side == exit_side && position == exit_position;
            let emoji = shuffled_emojis[emoji_index].to_string();
            emoji_index += 1;
            if is_correct {
                correct_exit_emoji = emoji.clone();
            }
            exits.push(ExitPoint {
                side,
                position,
                emoji,
                is_correct_exit: is_correct,
            });
        }
    }

    LaserMazePuzzle {
        mirrors,
        entry: EntryPoint {
            position: entry_col,
            emoji: ENTRY_EMOJI.to_string(),
        },
        exits,
        solution_path,
        correct_exit_emoji,
        grid_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replayed_beam_reaches_the_marked_exit() {
        for seed in [0, 7, 99, 360] {
            let puzzle = generate_laser_maze(5, 5, seed);
            let correct = puzzle
                .exits
                .iter()
                .find(|exit| exit.is_correct_exit)
                .unwrap();

            let replay = simulate_laser_path(&puzzle.mirrors, puzzle.entry.position, 1_000);
            assert_eq!(replay.exit, Some((correct.side, correct.position)));
            assert!(replay.reflections >= MIN_REFLECTIONS);
            assert_eq!(correct.emoji, puzzle.correct_exit_emoji);

            // The recorded path is how the replay starts.
            assert!(replay.path.starts_with(&puzzle.solution_path));
            assert_eq!(puzzle.solution_path[0], Point::new(puzzle.entry.position, 0));
        }
    }

    #[test]
    fn exactly_one_correct_exit() {
        let puzzle = generate_laser_maze(6, 6, 31);
        let correct_count = puzzle
            .exits
            .iter()
            .filter(|exit| exit.is_correct_exit)
            .count();
        assert_eq!(correct_count, 1);
    }

    #[test]
    fn exits_cover_both_sides_with_distinct_icons() {
        let puzzle = generate_laser_maze(5, 5, 12);
        assert_eq!(puzzle.exits.len(), puzzle.grid_size * 2);
        for side in [Side::Left, Side::Right] {
            for position in 0..puzzle.grid_size {
                assert!(
                    puzzle
                        .exits
                        .iter()
                        .any(|exit| exit.side == side && exit.position == position)
                );
            }
        }
        let mut icons: Vec<&str> = puzzle.exits.iter().map(|exit| exit.emoji.as_str()).collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), puzzle.exits.len());
    }

    #[test]
    fn grid_size_derivation() {
        assert_eq!(generate_laser_maze(5, 5, 1).grid_size, 4);
        assert_eq!(generate_laser_maze(10, 14, 1).grid_size, 6);
        assert_eq!(generate_laser_maze(3, 3, 1).grid_size, 3);
        assert_eq!(generate_laser_maze(1, 1, 1).grid_size, 3);
    }

    #[test]
    fn fallback_layout_satisfies_the_contract() {
        for grid_size in 3..=6 {
            let (mirrors, entry, path, side, position) = fallback_layout(grid_size);
            let result = simulate_laser_path(&mirrors, entry, 1_000);
            assert_eq!(result.exit, Some((side, position)));
            assert!(result.reflections >= MIN_REFLECTIONS);
            assert!(result.path.starts_with(&path));
        }
    }

    #[test]
    fn exhausted_step_budget_reports_no_exit() {
        let mirrors: Vec<Vec<Option<Mirror>>> = vec![vec![None; 4]; 4];
        let result = simulate_laser_path(&mirrors, 1, 2);
        assert_eq!(result.exit, None);
        assert_eq!(result.path.len(), 2);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = generate_laser_maze(5, 5, 99);
        let b = generate_laser_maze(5, 5, 99);
        assert_eq!(a, b);
    }
}
