/*
maze.rs

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

//! Classic maze generation with the Growing Tree algorithm.
//!
//! The frontier is a stack of carved cells. On every iteration the algorithm
//! either extends the most recently carved cell (depth-first behavior, long
//! corridors) or, with the probability given by [`Branchiness`], extends a
//! random frontier cell (more branching, shorter dead ends). The result is a
//! perfect maze: the open passages form a spanning tree of the grid, so any
//! two cells are connected by exactly one path.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::grid::Point;
use crate::rng::SeededRandom;

/// How often the carving frontier jumps to a random cell instead of staying
/// on the most recent one.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Branchiness {
    /// Pure depth-first carving. Long winding corridors.
    Low,

    /// Jump to a random frontier cell 30% of the time.
    #[default]
    Medium,

    /// Jump to a random frontier cell 60% of the time.
    High,
}

impl Branchiness {
    /// Probability of extending a random frontier cell instead of the newest
    /// one.
    pub fn branch_probability(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 0.3,
            Self::High => 0.6,
        }
    }
}

/// Walls around one cell. `true` means the wall is present.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Walls {
    /// All four walls up.
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

/// One cell of the maze grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub walls: Walls,
    pub visited: bool,
}

/// A generated maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Maze {
    /// Cells indexed by `grid[y][x]`.
    pub grid: Vec<Vec<Cell>>,

    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Entrance, always the top-left cell.
    pub start: Point,

    /// Exit, always the bottom-right cell.
    pub end: Point,
}

/// Generate a maze.
///
/// The same `(width, height, seed, branchiness)` input always produces the
/// same maze. Width or height of 1 produces a corridor.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn generate_maze(width: usize, height: usize, seed: u64, branchiness: Branchiness) -> Maze {
    assert!(width > 0 && height > 0, "maze dimensions must be positive");

    let mut rng = SeededRandom::new(seed);
    let branch_probability: f64 = branchiness.branch_probability();

    let mut grid: Vec<Vec<Cell>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| Cell {
                    x,
                    y,
                    walls: Walls::default(),
                    visited: false,
                })
                .collect()
        })
        .collect();

    let mut frontier: Vec<Point> = Vec::new();
    grid[0][0].visited = true;
    frontier.push(Point::new(0, 0));

    while !frontier.is_empty() {
        let index: usize = if rng.next() < branch_probability {
            rng.next_int(frontier.len())
        } else {
            frontier.len() - 1
        };
        let current = frontier[index];

        let neighbors = unvisited_neighbors(&grid, current, width, height);
        if neighbors.is_empty() {
            // Dead end. Retire the cell from the frontier.
            frontier.remove(index);
        } else {
            let next = neighbors[rng.next_int(neighbors.len())];
            remove_walls(&mut grid, current, next);
            grid[next.y][next.x].visited = true;
            frontier.push(next);
        }
    }

    debug!("generated a {width}x{height} maze from seed {seed}");

    Maze {
        grid,
        width,
        height,
        start: Point::new(0, 0),
        end: Point::new(width - 1, height - 1),
    }
}

/// Unvisited neighbors of a cell, scanned top, right, bottom, left.
fn unvisited_neighbors(grid: &[Vec<Cell>], at: Point, width: usize, height: usize) -> Vec<Point> {
    let mut neighbors: Vec<Point> = Vec::new();
    if at.y > 0 && !grid[at.y - 1][at.x].visited {
        neighbors.push(Point::new(at.x, at.y - 1));
    }
    if at.x < width - 1 && !grid[at.y][at.x + 1].visited {
        neighbors.push(Point::new(at.x + 1, at.y));
    }
    if at.y < height - 1 && !grid[at.y + 1][at.x].visited {
        neighbors.push(Point::new(at.x, at.y + 1));
    }
    if at.x > 0 && !grid[at.y][at.x - 1].visited {
        neighbors.push(Point::new(at.x - 1, at.y));
    }
    neighbors
}

/// Open the wall between two adjacent cells, on both sides.
fn remove_walls(grid: &mut [Vec<Cell>], a: Point, b: Point) {
    if b.x > a.x {
        grid[a.y][a.x].walls.right = false;
        grid[b.y][b.x].walls.left = false;
    } else if b.x < a.x {
        grid[a.y][a.x].walls.left = false;
        grid[b.y][b.x].walls.right = false;
    } else if b.y > a.y {
        grid[a.y][a.x].walls.bottom = false;
        grid[b.y][b.x].walls.top = false;
    } else {
        grid[a.y][a.x].walls.top = false;
        grid[b.y][b.x].walls.bottom = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Number of wall pairs that were opened. Each passage is counted once,
    /// through the right and bottom walls.
    fn removed_wall_count(maze: &Maze) -> usize {
        let mut count: usize = 0;
        for row in &maze.grid {
            for cell in row {
                if cell.x + 1 < maze.width && !cell.walls.right {
                    count += 1;
                }
                if cell.y + 1 < maze.height && !cell.walls.bottom {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of cells reachable from the start through open passages.
    fn reachable_cells(maze: &Maze) -> usize {
        let mut seen = vec![vec![false; maze.width]; maze.height];
        let mut queue: VecDeque<Point> = VecDeque::new();
        seen[maze.start.y][maze.start.x] = true;
        queue.push_back(maze.start);
        let mut count: usize = 0;
        while let Some(at) = queue.pop_front() {
            count += 1;
            let cell = &maze.grid[at.y][at.x];
            if !cell.walls.top && at.y > 0 && !seen[at.y - 1][at.x] {
                seen[at.y - 1][at.x] = true;
                queue.push_back(Point::new(at.x, at.y - 1));
            }
            if !cell.walls.right && at.x + 1 < maze.width && !seen[at.y][at.x + 1] {
                seen[at.y][at.x + 1] = true;
                queue.push_back(Point::new(at.x + 1, at.y));
            }
            if !cell.walls.bottom && at.y + 1 < maze.height && !seen[at.y + 1][at.x] {
                seen[at.y + 1][at.x] = true;
                queue.push_back(Point::new(at.x, at.y + 1));
            }
            if !cell.walls.left && at.x > 0 && !seen[at.y][at.x - 1] {
                seen[at.y][at.x - 1] = true;
                queue.push_back(Point::new(at.x - 1, at.y));
            }
        }
        count
    }

    fn assert_perfect(maze: &Maze) {
        assert_eq!(removed_wall_count(maze), maze.width * maze.height - 1);
        assert_eq!(reachable_cells(maze), maze.width * maze.height);
    }

    #[test]
    fn four_by_four_is_perfect() {
        let maze = generate_maze(4, 4, 42, Branchiness::Medium);
        assert_eq!(removed_wall_count(&maze), 15);
        assert_eq!(reachable_cells(&maze), 16);
        assert_eq!(maze.start, Point::new(0, 0));
        assert_eq!(maze.end, Point::new(3, 3));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_maze(8, 6, 7, Branchiness::Medium);
        let b = generate_maze(8, 6, 7, Branchiness::Medium);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_maze(8, 8, 1, Branchiness::Medium);
        let b = generate_maze(8, 8, 2, Branchiness::Medium);
        assert_ne!(a, b);
    }

    #[test]
    fn all_branchiness_levels_stay_perfect() {
        for branchiness in [Branchiness::Low, Branchiness::Medium, Branchiness::High] {
            for seed in [0, 5, 99, 1234] {
                assert_perfect(&generate_maze(7, 5, seed, branchiness));
            }
        }
    }

    #[test]
    fn single_row_is_a_corridor() {
        let maze = generate_maze(8, 1, 3, Branchiness::Medium);
        assert_perfect(&maze);
        for cell in &maze.grid[0] {
            assert!(cell.walls.top);
            assert!(cell.walls.bottom);
        }
    }

    #[test]
    fn single_column_is_a_corridor() {
        let maze = generate_maze(1, 6, 11, Branchiness::High);
        assert_perfect(&maze);
    }

    #[test]
    fn outer_walls_are_never_opened() {
        let maze = generate_maze(6, 6, 21, Branchiness::High);
        for cell in maze.grid.iter().flatten() {
            if cell.y == 0 {
                assert!(cell.walls.top);
            }
            if cell.y == maze.height - 1 {
                assert!(cell.walls.bottom);
            }
            if cell.x == 0 {
                assert!(cell.walls.left);
            }
            if cell.x == maze.width - 1 {
                assert!(cell.walls.right);
            }
        }
    }

    #[test]
    fn walls_are_symmetric() {
        let maze = generate_maze(5, 7, 13, Branchiness::Medium);
        for y in 0..maze.height {
            for x in 0..maze.width {
                if x + 1 < maze.width {
                    assert_eq!(maze.grid[y][x].walls.right, maze.grid[y][x + 1].walls.left);
                }
                if y + 1 < maze.height {
                    assert_eq!(maze.grid[y][x].walls.bottom, maze.grid[y + 1][x].walls.top);
                }
            }
        }
    }
}
