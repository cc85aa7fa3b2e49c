/*
weaving.rs

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

//! Weaving maze generation.
//!
//! A weaving maze is a maze whose corridors may pass over one another. The
//! carving loop is the same Growing Tree frontier as the classic maze, but
//! before connecting to a plain unvisited neighbor the algorithm also scans
//! the four directions for a bridge opportunity: a straight run of already
//! carved cells, each crossed at a right angle by an existing corridor, that
//! ends on an unvisited cell. A taken bridge jumps the run and lands on that
//! cell. Bridges are recorded in their own list and never alter the cells
//! they pass over, so the corridors underneath keep their own connections.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::grid::{Axis, Direction, Point};
use super::maze::Branchiness;
use crate::rng::SeededRandom;

/// How often the carving takes a bridge when both a bridge and a plain
/// neighbor are available.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CrossingDensity {
    /// Take an available bridge 30% of the time.
    Few,

    /// Take an available bridge 60% of the time.
    #[default]
    Medium,

    /// Take an available bridge 90% of the time.
    Many,
}

impl CrossingDensity {
    /// Probability of taking a bridge over a plain neighbor.
    pub fn bridge_probability(self) -> f64 {
        match self {
            Self::Few => 0.3,
            Self::Medium => 0.6,
            Self::Many => 0.9,
        }
    }
}

/// Open passages out of one cell. `true` means open.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Connections {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

/// One cell of the weaving maze grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct WeavingCell {
    pub x: usize,
    pub y: usize,
    pub connections: Connections,
    pub visited: bool,
}

/// A corridor that passes over other corridors.
///
/// The bridge runs from `start` to `end` in `direction`. The `segments` list
/// holds the cells passed over, in travel order. Those cells keep their own
/// connections untouched; only the two endpoint cells get a passage opened
/// toward the bridge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    pub start: Point,
    pub end: Point,
    pub direction: Direction,
    pub segments: Vec<Point>,
}

/// A generated weaving maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeavingMaze {
    /// Cells indexed by `grid[y][x]`.
    pub grid: Vec<Vec<WeavingCell>>,

    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Entrance, always the top-left cell.
    pub start: Point,

    /// Exit, always the bottom-right cell.
    pub end: Point,

    /// Bridges, in carving order.
    pub bridges: Vec<Bridge>,
}

/// Generate a weaving maze.
///
/// Ground-level connections plus bridges form a spanning tree of the grid.
/// Small grids or an unlucky seed may produce zero bridges; that is a valid
/// outcome, not a failure.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn generate_weaving_maze(
    width: usize,
    height: usize,
    seed: u64,
    branchiness: Branchiness,
    density: CrossingDensity,
) -> WeavingMaze {
    assert!(width > 0 && height > 0, "maze dimensions must be positive");

    let mut rng = SeededRandom::new(seed);
    let branch_probability: f64 = branchiness.branch_probability();
    let bridge_probability: f64 = density.bridge_probability();

    let mut grid: Vec<Vec<WeavingCell>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| WeavingCell {
                    x,
                    y,
                    connections: Connections::default(),
                    visited: false,
                })
                .collect()
        })
        .collect();
    let mut bridges: Vec<Bridge> = Vec::new();

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
        let crossings = bridge_opportunities(&grid, &bridges, current, width, height);

        let take_bridge: bool = if !neighbors.is_empty() && !crossings.is_empty() {
            rng.next() < bridge_probability
        } else {
            !crossings.is_empty()
        };

        if take_bridge {
            let bridge = crossings[rng.next_int(crossings.len())].clone();
            open_connection(&mut grid, bridge.start, bridge.direction);
            open_connection(&mut grid, bridge.end, bridge.direction.opposite());
            grid[bridge.end.y][bridge.end.x].visited = true;
            frontier.push(bridge.end);
            debug!(
                "bridge from ({}, {}) to ({}, {}) over {} cells",
                bridge.start.x,
                bridge.start.y,
                bridge.end.x,
                bridge.end.y,
                bridge.segments.len()
            );
            bridges.push(bridge);
        } else if neighbors.is_empty() {
            // Dead end. Retire the cell from the frontier.
            frontier.remove(index);
        } else {
            let next = neighbors[rng.next_int(neighbors.len())];
            connect(&mut grid, current, next);
            grid[next.y][next.x].visited = true;
            frontier.push(next);
        }
    }

    debug!(
        "generated a {width}x{height} weaving maze with {} bridges from seed {seed}",
        bridges.len()
    );

    WeavingMaze {
        grid,
        width,
        height,
        start: Point::new(0, 0),
        end: Point::new(width - 1, height - 1),
        bridges,
    }
}

/// Unvisited neighbors of a cell, scanned top, right, bottom, left.
fn unvisited_neighbors(
    grid: &[Vec<WeavingCell>],
    at: Point,
    width: usize,
    height: usize,
) -> Vec<Point> {
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

/// Bridges that could be taken from a cell.
///
/// In each direction, a candidate is a straight run of one or more visited
/// cells that can all be bridged over, followed by an unvisited landing
/// cell. Anything else ends the scan in that direction without a candidate.
fn bridge_opportunities(
    grid: &[Vec<WeavingCell>],
    bridges: &[Bridge],
    from: Point,
    width: usize,
    height: usize,
) -> Vec<Bridge> {
    let mut opportunities: Vec<Bridge> = Vec::new();
    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let mut segments: Vec<Point> = Vec::new();
        let mut x: i32 = from.x as i32 + dx;
        let mut y: i32 = from.y as i32 + dy;
        loop {
            if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                break;
            }
            let at = Point::new(x as usize, y as usize);
            let cell = &grid[at.y][at.x];
            if !cell.visited {
                if !segments.is_empty() {
                    opportunities.push(Bridge {
                        start: from,
                        end: at,
                        direction,
                        segments,
                    });
                }
                break;
            }
            if !can_bridge_over(cell, direction) || carries_bridge(bridges, at, direction.axis()) {
                break;
            }
            segments.push(at);
            x += dx;
            y += dy;
        }
    }
    opportunities
}

/// Whether a bridge travelling in `direction` may pass over the cell.
///
/// The cell must carry a complete corridor at a right angle to the bridge
/// and no passage parallel to it.
fn can_bridge_over(cell: &WeavingCell, direction: Direction) -> bool {
    match direction.axis() {
        Axis::Horizontal => {
            cell.connections.top
                && cell.connections.bottom
                && !cell.connections.left
                && !cell.connections.right
        }
        Axis::Vertical => {
            cell.connections.left
                && cell.connections.right
                && !cell.connections.top
                && !cell.connections.bottom
        }
    }
}

/// Whether an existing bridge along the same axis already passes over the
/// cell. The cell connections do not record overhead bridges, so this check
/// walks the recorded footprints.
fn carries_bridge(bridges: &[Bridge], at: Point, axis: Axis) -> bool {
    bridges
        .iter()
        .any(|bridge| bridge.direction.axis() == axis && bridge.segments.contains(&at))
}

/// Open the mutual passage between two adjacent cells.
fn connect(grid: &mut [Vec<WeavingCell>], a: Point, b: Point) {
    if b.x > a.x {
        grid[a.y][a.x].connections.right = true;
        grid[b.y][b.x].connections.left = true;
    } else if b.x < a.x {
        grid[a.y][a.x].connections.left = true;
        grid[b.y][b.x].connections.right = true;
    } else if b.y > a.y {
        grid[a.y][a.x].connections.bottom = true;
        grid[b.y][b.x].connections.top = true;
    } else {
        grid[a.y][a.x].connections.top = true;
        grid[b.y][b.x].connections.bottom = true;
    }
}

/// Open a single cell's passage toward a direction (bridge endpoints only).
fn open_connection(grid: &mut [Vec<WeavingCell>], at: Point, direction: Direction) {
    let connections = &mut grid[at.y][at.x].connections;
    match direction {
        Direction::Up => connections.top = true,
        Direction::Down => connections.bottom = true,
        Direction::Left => connections.left = true,
        Direction::Right => connections.right = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Ground-level passages, counted once each. Bridge endpoints open a
    /// one-sided connection, so only mutual pairs count.
    fn ground_edge_count(maze: &WeavingMaze) -> usize {
        let mut count: usize = 0;
        for row in &maze.grid {
            for cell in row {
                if cell.x + 1 < maze.width
                    && cell.connections.right
                    && maze.grid[cell.y][cell.x + 1].connections.left
                {
                    count += 1;
                }
                if cell.y + 1 < maze.height
                    && cell.connections.bottom
                    && maze.grid[cell.y + 1][cell.x].connections.top
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of cells reachable from the start through ground passages and
    /// bridges.
    fn reachable_cells(maze: &WeavingMaze) -> usize {
        let mut seen = vec![vec![false; maze.width]; maze.height];
        let mut queue: VecDeque<Point> = VecDeque::new();
        seen[maze.start.y][maze.start.x] = true;
        queue.push_back(maze.start);
        let mut count: usize = 0;
        while let Some(at) = queue.pop_front() {
            count += 1;
            let mut moves: Vec<Point> = Vec::new();
            let cell = &maze.grid[at.y][at.x];
            if cell.connections.top && at.y > 0 && maze.grid[at.y - 1][at.x].connections.bottom {
                moves.push(Point::new(at.x, at.y - 1));
            }
            if cell.connections.right
                && at.x + 1 < maze.width
                && maze.grid[at.y][at.x + 1].connections.left
            {
                moves.push(Point::new(at.x + 1, at.y));
            }
            if cell.connections.bottom
                && at.y + 1 < maze.height
                && maze.grid[at.y + 1][at.x].connections.top
            {
                moves.push(Point::new(at.x, at.y + 1));
            }
            if cell.connections.left && at.x > 0 && maze.grid[at.y][at.x - 1].connections.right {
                moves.push(Point::new(at.x - 1, at.y));
            }
            for bridge in &maze.bridges {
                if bridge.start == at {
                    moves.push(bridge.end);
                }
                if bridge.end == at {
                    moves.push(bridge.start);
                }
            }
            for to in moves {
                if !seen[to.y][to.x] {
                    seen[to.y][to.x] = true;
                    queue.push_back(to);
                }
            }
        }
        count
    }

    fn assert_spanning_tree(maze: &WeavingMaze) {
        assert_eq!(
            ground_edge_count(maze) + maze.bridges.len(),
            maze.width * maze.height - 1
        );
        assert_eq!(reachable_cells(maze), maze.width * maze.height);
    }

    fn assert_bridges_legal(maze: &WeavingMaze) {
        for bridge in &maze.bridges {
            let (dx, dy) = bridge.direction.delta();
            assert!(!bridge.segments.is_empty());

            // Segments run in a straight line from start to end.
            let mut x: i32 = bridge.start.x as i32 + dx;
            let mut y: i32 = bridge.start.y as i32 + dy;
            for segment in &bridge.segments {
                assert_eq!(*segment, Point::new(x as usize, y as usize));
                x += dx;
                y += dy;
            }
            assert_eq!(bridge.end, Point::new(x as usize, y as usize));

            // Every crossed cell keeps a full perpendicular corridor and no
            // mutual passage along the bridge axis. A crossed cell that later
            // anchors a bridge of its own carries a one-sided flag, never a
            // mutual one.
            for segment in &bridge.segments {
                let cell = &maze.grid[segment.y][segment.x];
                match bridge.direction.axis() {
                    Axis::Horizontal => {
                        assert!(cell.connections.top && cell.connections.bottom);
                        assert!(
                            !(cell.connections.left
                                && segment.x > 0
                                && maze.grid[segment.y][segment.x - 1].connections.right)
                        );
                        assert!(
                            !(cell.connections.right
                                && segment.x + 1 < maze.width
                                && maze.grid[segment.y][segment.x + 1].connections.left)
                        );
                    }
                    Axis::Vertical => {
                        assert!(cell.connections.left && cell.connections.right);
                        assert!(
                            !(cell.connections.top
                                && segment.y > 0
                                && maze.grid[segment.y - 1][segment.x].connections.bottom)
                        );
                        assert!(
                            !(cell.connections.bottom
                                && segment.y + 1 < maze.height
                                && maze.grid[segment.y + 1][segment.x].connections.top)
                        );
                    }
                }
            }
        }

        // No two bridges along the same axis share a crossed cell.
        for (i, a) in maze.bridges.iter().enumerate() {
            for b in maze.bridges.iter().skip(i + 1) {
                if a.direction.axis() == b.direction.axis() {
                    for segment in &a.segments {
                        assert!(!b.segments.contains(segment));
                    }
                }
            }
        }
    }

    #[test]
    fn spanning_tree_across_seeds() {
        for seed in [0, 1, 7, 42, 99, 512] {
            let maze =
                generate_weaving_maze(9, 7, seed, Branchiness::Medium, CrossingDensity::Medium);
            assert_spanning_tree(&maze);
            assert_bridges_legal(&maze);
        }
    }

    #[test]
    fn all_density_levels_stay_legal() {
        for density in [
            CrossingDensity::Few,
            CrossingDensity::Medium,
            CrossingDensity::Many,
        ] {
            for seed in [3, 17, 256] {
                let maze = generate_weaving_maze(8, 8, seed, Branchiness::High, density);
                assert_spanning_tree(&maze);
                assert_bridges_legal(&maze);
            }
        }
    }

    #[test]
    fn bridges_do_appear() {
        // A healthy grid size and the highest density produce at least one
        // bridge over a spread of seeds.
        let total: usize = (0..50)
            .map(|seed| {
                generate_weaving_maze(10, 10, seed, Branchiness::High, CrossingDensity::Many)
                    .bridges
                    .len()
            })
            .sum();
        assert!(total > 0);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_weaving_maze(8, 6, 27, Branchiness::Medium, CrossingDensity::Many);
        let b = generate_weaving_maze(8, 6, 27, Branchiness::Medium, CrossingDensity::Many);
        assert_eq!(a, b);
    }

    #[test]
    fn corridor_has_no_bridges() {
        let maze = generate_weaving_maze(9, 1, 5, Branchiness::Medium, CrossingDensity::Many);
        assert_spanning_tree(&maze);
        assert!(maze.bridges.is_empty());
    }
}
