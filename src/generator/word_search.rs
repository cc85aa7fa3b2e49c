/*
word_search.rs

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

//! Word search generation.
//!
//! Words come from the curated list plus optional caller-provided words,
//! longest placed first while the grid is emptiest. Each word prefers a
//! placement that crosses an already-placed letter; a bounded number of
//! random placements is the fallback, and words that fit nowhere are
//! dropped silently. The difficulty gates which directions words may run
//! in, from rightward-only up to all eight directions.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use crate::pools::words;
use crate::rng::SeededRandom;

/// Random placements tried per word once no crossing placement exists.
const MAX_PLACEMENT_ATTEMPTS: usize = 50;

/// Extra candidate words selected beyond the requested count, as spares
/// for words that fit nowhere.
const SPARE_CANDIDATES: usize = 2;

/// Difficulty level, gating the directions words may run in.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SearchDifficulty {
    /// Words only read left to right.
    Beginner = 1,

    /// Rightward and downward words.
    #[default]
    Easy = 2,

    /// Rightward, downward, and diagonally down-right words.
    Medium = 3,

    /// All eight directions, including backwards.
    Hard = 4,
}

impl SearchDifficulty {
    /// Directions words may run in at this level.
    pub fn directions(self) -> &'static [SearchDirection] {
        match self {
            Self::Beginner => &[SearchDirection { dx: 1, dy: 0 }],
            Self::Easy => &[
                SearchDirection { dx: 1, dy: 0 },
                SearchDirection { dx: 0, dy: 1 },
            ],
            Self::Medium => &[
                SearchDirection { dx: 1, dy: 0 },
                SearchDirection { dx: 0, dy: 1 },
                SearchDirection { dx: 1, dy: 1 },
            ],
            Self::Hard => &[
                SearchDirection { dx: 1, dy: 0 },
                SearchDirection { dx: -1, dy: 0 },
                SearchDirection { dx: 0, dy: 1 },
                SearchDirection { dx: 0, dy: -1 },
                SearchDirection { dx: 1, dy: 1 },
                SearchDirection { dx: -1, dy: -1 },
                SearchDirection { dx: 1, dy: -1 },
                SearchDirection { dx: -1, dy: 1 },
            ],
        }
    }
}

/// Unit step a word runs along.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SearchDirection {
    pub dx: i32,
    pub dy: i32,
}

/// A word that made it into the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,

    /// Icon shown next to the word in the word list, empty when the word
    /// has none.
    pub emoji: String,

    pub start_x: usize,
    pub start_y: usize,
    pub direction: SearchDirection,
}

/// A generated word search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordSearchPuzzle {
    /// Letter grid indexed by `grid[y][x]`.
    pub grid: Vec<Vec<char>>,

    pub words: Vec<PlacedWord>,

    pub size: usize,
}

/// A word still waiting for a spot in the grid.
#[derive(Debug, Clone)]
struct Candidate {
    word: String,
    emoji: String,
}

/// Generate a word search.
///
/// At most `word_count` words are placed; fewer is a silently accepted
/// outcome when candidates run out of room. Custom words are parsed from
/// `custom_words_text` (split on commas and whitespace, uppercased,
/// non-letters stripped) and always enter the candidate list. When
/// `limited_letters` is set, the filler cells reuse only letters from the
/// placed words. The same input always produces the same puzzle.
///
/// # Panics
///
/// Panics if `grid_size` is zero.
pub fn generate_word_search(
    seed: u64,
    difficulty: SearchDifficulty,
    word_count: usize,
    grid_size: usize,
    limited_letters: bool,
    custom_words_text: &str,
) -> WordSearchPuzzle {
    assert!(grid_size > 0, "word search grid size must be positive");

    let mut rng = SeededRandom::new(seed);

    let mut selected = parse_custom_words(custom_words_text, grid_size);
    let remaining_slots = (word_count + SPARE_CANDIDATES).saturating_sub(selected.len());
    if remaining_slots > 0 {
        let mut pool: Vec<Candidate> = words::WORD_LIST
            .iter()
            .filter(|entry| entry.word.len() <= grid_size)
            .map(|entry| Candidate {
                word: entry.word.to_string(),
                emoji: entry.emoji.to_string(),
            })
            .collect();
        rng.shuffle(&mut pool);

        let mut taken = 0;
        for candidate in pool {
            if taken >= remaining_slots {
                break;
            }
            if selected.iter().any(|chosen| chosen.word == candidate.word) {
                continue;
            }
            selected.push(candidate);
            taken += 1;
        }
    }

    // Longer words are harder to place, so they go in while the grid is
    // emptiest. The sort is stable; custom words keep their precedence
    // among equal lengths.
    selected.sort_by(|a, b| b.word.len().cmp(&a.word.len()));

    let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; grid_size]; grid_size];
    let mut placed: Vec<PlacedWord> = Vec::new();

    for candidate in &selected {
        if placed.len() >= word_count {
            break;
        }
        match try_place_word(
            &candidate.word,
            &mut grid,
            grid_size,
            &mut rng,
            difficulty.directions(),
        ) {
            Some((start_x, start_y, direction)) => placed.push(PlacedWord {
                word: candidate.word.clone(),
                emoji: candidate.emoji.clone(),
                start_x,
                start_y,
                direction,
            }),
            None => debug!("no room for {:?}, dropping it", candidate.word),
        }
    }

    let letter_pool = filler_letters(limited_letters, &placed);
    let filled: Vec<Vec<char>> = grid
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Some(letter) => letter,
                    None => letter_pool[rng.next_int(letter_pool.len())],
                })
                .collect()
        })
        .collect();

    WordSearchPuzzle {
        grid: filled,
        words: placed,
        size: grid_size,
    }
}

/// Uppercase and validate caller-provided words, longest first.
fn parse_custom_words(text: &str, grid_size: usize) -> Vec<Candidate> {
    let mut custom: Vec<Candidate> = text
        .to_uppercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty() && word.len() <= grid_size)
        .map(|word| {
            let emoji = words::WORD_LIST
                .iter()
                .find(|entry| entry.word == word)
                .map_or("", |entry| entry.emoji);
            Candidate {
                word,
                emoji: emoji.to_string(),
            }
        })
        .collect();
    custom.sort_by(|a, b| b.word.len().cmp(&a.word.len()));
    custom
}

/// Place one word, preferring spots that cross an already-placed letter.
/// Returns the start cell and direction, or `None` when the word fits
/// nowhere within the attempt budget.
fn try_place_word(
    word: &str,
    grid: &mut [Vec<Option<char>>],
    grid_size: usize,
    rng: &mut SeededRandom,
    directions: &[SearchDirection],
) -> Option<(usize, usize, SearchDirection)> {
    let letters: Vec<char> = word.chars().collect();

    let mut shuffled: Vec<SearchDirection> = directions.to_vec();
    rng.shuffle(&mut shuffled);

    // Every placement that reuses a filled cell, scanned row-major.
    let mut crossings: Vec<(i32, i32, SearchDirection)> = Vec::new();
    for y in 0..grid_size {
        for x in 0..grid_size {
            let Some(existing) = grid[y][x] else {
                continue;
            };
            for (char_index, &letter) in letters.iter().enumerate() {
                if letter != existing {
                    continue;
                }
                for &direction in &shuffled {
                    let start_x = x as i32 - direction.dx * char_index as i32;
                    let start_y = y as i32 - direction.dy * char_index as i32;
                    if placement_fits(&letters, start_x, start_y, direction, grid, grid_size) {
                        crossings.push((start_x, start_y, direction));
                    }
                }
            }
        }
    }

    if !crossings.is_empty() {
        rng.shuffle(&mut crossings);
        let (start_x, start_y, direction) = crossings[0];
        write_word(&letters, start_x, start_y, direction, grid);
        return Some((start_x as usize, start_y as usize, direction));
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let direction = shuffled[rng.next_int(shuffled.len())];
        let start_x = rng.next_int(grid_size) as i32;
        let start_y = rng.next_int(grid_size) as i32;
        if placement_fits(&letters, start_x, start_y, direction, grid, grid_size) {
            write_word(&letters, start_x, start_y, direction, grid);
            return Some((start_x as usize, start_y as usize, direction));
        }
    }

    None
}

/// Whether the word fits: in-bounds along the whole run, and any filled
/// cell on the run already holds the matching letter.
fn placement_fits(
    letters: &[char],
    start_x: i32,
    start_y: i32,
    direction: SearchDirection,
    grid: &[Vec<Option<char>>],
    grid_size: usize,
) -> bool {
    for (i, &letter) in letters.iter().enumerate() {
        let x = start_x + direction.dx * i as i32;
        let y = start_y + direction.dy * i as i32;
        if x < 0 || x >= grid_size as i32 || y < 0 || y >= grid_size as i32 {
            return false;
        }
        if let Some(existing) = grid[y as usize][x as usize] {
            if existing != letter {
                return false;
            }
        }
    }
    true
}

fn write_word(
    letters: &[char],
    start_x: i32,
    start_y: i32,
    direction: SearchDirection,
    grid: &mut [Vec<Option<char>>],
) {
    for (i, &letter) in letters.iter().enumerate() {
        let x = (start_x + direction.dx * i as i32) as usize;
        let y = (start_y + direction.dy * i as i32) as usize;
        grid[y][x] = Some(letter);
    }
}

/// Letters used to fill the empty cells.
fn filler_letters(limited_letters: bool, placed: &[PlacedWord]) -> Vec<char> {
    if limited_letters {
        let mut used: Vec<char> = Vec::new();
        for entry in placed {
            for letter in entry.word.chars() {
                if !used.contains(&letter) {
                    used.push(letter);
                }
            }
        }
        if !used.is_empty() {
            return used;
        }
    }
    ('A'..='Z').collect()
}
