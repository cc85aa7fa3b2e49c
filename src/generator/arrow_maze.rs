/*
arrow_maze.rs

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

//! Arrow maze generation.
//!
//! Every cell shows an arrow. Starting at the entrance and always walking in
//! the direction of the arrow under your feet, you eventually reach the
//! exit. The arrows form a spanning tree rooted at the exit cell: a depth
//! first search from the exit gives each cell a parent, and the arrow points
//! at that parent. Cells on the entrance-to-exit walk are flagged `is_path`
//! for the answer key; the printed page shows only the arrows.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use super::grid::Direction;
use crate::pools::emoji_themes;
use crate::rng::SeededRandom;

/// Icon style for the four direction markers.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    /// Colored circles, the easiest to tell apart.
    Circles,

    /// Four icons from a randomly chosen theme.
    #[default]
    Random,
}

/// The four icons bound to the cardinal directions for one puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectionEmojis {
    pub down: String,
    pub up: String,
    pub left: String,
    pub right: String,
}

impl DirectionEmojis {
    /// Icon for a direction.
    pub fn get(&self, direction: Direction) -> &str {
        match direction {
            Direction::Down => &self.down,
            Direction::Up => &self.up,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// One cell of the arrow maze.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArrowCell {
    /// Direction toward the parent cell in the tree. For the exit cell this
    /// is a placeholder pointing out of the grid.
    pub direction: Direction,

    /// Whether the cell lies on the entrance-to-exit walk.
    pub is_path: bool,
}

/// A generated arrow maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArrowMaze {
    /// Cells indexed by `grid[y][x]`.
    pub grid: Vec<Vec<ArrowCell>>,

    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Entrance column on the top row.
    pub start_x: usize,

    /// Exit column on the bottom row.
    pub end_x: usize,

    /// Icons bound to the directions for this instance.
    pub emojis: DirectionEmojis,
}

/// Generate an arrow maze.
///
/// The entrance is the top-left cell and the exit the bottom-right cell.
/// Following the arrows from any cell always ends at the exit.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn generate_arrow_maze(
    width: usize,
    height: usize,
    seed: u64,
    emoji_mode: EmojiMode,
) -> ArrowMaze {
    assert!(width > 0 && height > 0, "maze dimensions must be positive");

    let mut rng = SeededRandom::new(seed);

    let theme: &[&str] = match emoji_mode {
        EmojiMode::Circles => &emoji_themes::CIRCLES,
        EmojiMode::Random => *rng.pick(&emoji_themes::MIXED),
    };
    let mut available: Vec<&str> = theme.to_vec();
    let mut picked: Vec<&str> = Vec::with_capacity(4);
    for _ in 0..4 {
        let index: usize = rng.next_int(available.len());
        picked.push(available.remove(index));
    }
    let emojis = DirectionEmojis {
        down: picked[0].to_string(),
        up: picked[1].to_string(),
        left: picked[2].to_string(),
        right: picked[3].to_string(),
    };

    let exit_x: usize = width - 1;
    let exit_y: usize = height - 1;
    let start_x: usize = 0;

    // Depth-first search from the exit. Each newly reached cell records the
    // direction back toward the cell that discovered it. The exit itself has
    // no parent; its arrow points out of the grid.
    let mut parent: Vec<Vec<Option<Direction>>> = vec![vec![None; width]; height];
    parent[exit_y][exit_x] = Some(Direction::Down);

    let mut stack: Vec<(usize, usize)> = vec![(exit_x, exit_y)];
    while let Some(&(x, y)) = stack.last() {
        let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y < height - 1 {
            neighbors.push((x, y + 1));
        }
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x < width - 1 {
            neighbors.push((x + 1, y));
        }
        rng.shuffle(&mut neighbors);

        let mut found = false;
        for (nx, ny) in neighbors {
            if parent[ny][nx].is_none() {
                parent[ny][nx] = Some(direction_toward(nx, ny, x, y));
                stack.push((nx, ny));
                found = true;
                break;
            }
        }
        if !found {
            stack.pop();
        }
    }

    // Walk the unique tree path from the entrance to the exit.
    let mut on_path: Vec<Vec<bool>> = vec![vec![false; width]; height];
    let mut cx: usize = start_x;
    let mut cy: usize = 0;
    while !(cx == exit_x && cy == exit_y) {
        on_path[cy][cx] = true;
        match parent[cy][cx] {
            Some(Direction::Up) => cy -= 1,
            Some(Direction::Down) => cy += 1,
            Some(Direction::Left) => cx -= 1,
            Some(Direction::Right) => cx += 1,
            None => unreachable!("spanning tree covers every cell"),
        }
    }
    on_path[exit_y][exit_x] = true;

    let grid: Vec<Vec<ArrowCell>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| ArrowCell {
                    direction: parent[y][x].unwrap_or(Direction::Down),
                    is_path: on_path[y][x],
                })
                .collect()
        })
        .collect();

    debug!("generated a {width}x{height} arrow maze from seed {seed}");

    ArrowMaze {
        grid,
        width,
        height,
        start_x,
        end_x: exit_x,
        emojis,
    }
}

/// Direction needed to move from `(x1, y1)` to the adjacent `(x2, y2)`.
fn direction_toward(x1: usize, y1: usize, x2: usize, y2: usize) -> Direction {
    if y2 > y1 {
        Direction::Down
    } else if y2 < y1 {
        Direction::Up
    } else if x2 > x1 {
        Direction::Right
    } else {
        Direction::Left
    }
}
