/*
chess.rs

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

//! Chess puzzle selection and replay.
//!
//! Nothing is generated here; the seed only indexes into a curated pool of
//! pre-solved positions. Each entry stores a FEN, one setup move played by
//! the side to move, and the winning reply. Replaying the setup move on
//! the parsed position yields the diagram put in front of the solver.
//! Move application covers the two cases plain coordinate moves cannot
//! express by themselves, the castling rook jump and promotion.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use crate::pools::chess_puzzles::{self, ChessPuzzleEntry};
use crate::rng::SeededRandom;

/// How hard the solution is to spot.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ChessDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// What the winning move achieves.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ChessMode {
    Mate,
    Capture,
    #[default]
    Both,
}

/// A selected puzzle, ready for the page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChessPuzzle {
    /// Position before the setup move.
    pub fen: String,

    /// Move bringing about the diagram position, in coordinate notation.
    pub setup_move: String,

    /// The move the solver is asked to find.
    pub solution: String,

    pub description: String,
}

/// Piece kind, FEN letter order.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// A board position. Rows run from rank 8 down to rank 1, so
/// `board[0][0]` is a8 and `board[7][7]` is h1.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParsedPosition {
    pub board: [[Option<Piece>; 8]; 8],
    pub active: PieceColor,
}

/// Pick one pool entry for the difficulty and mode.
///
/// In `Both` mode the mate entries precede the capture entries, so a seed
/// keeps pointing at the same puzzle as long as the pool is unchanged.
pub fn select_puzzle(seed: u64, difficulty: ChessDifficulty, mode: ChessMode) -> ChessPuzzle {
    let pool = pool_for(difficulty, mode);
    let mut rng = SeededRandom::new(seed);
    let entry = pool[rng.next_int(pool.len())];
    ChessPuzzle {
        fen: entry.fen.to_string(),
        setup_move: entry.setup_move.to_string(),
        solution: entry.solution.to_string(),
        description: entry.description.to_string(),
    }
}

fn pool_for(difficulty: ChessDifficulty, mode: ChessMode) -> Vec<&'static ChessPuzzleEntry> {
    let (mate, capture): (&[ChessPuzzleEntry], &[ChessPuzzleEntry]) = match difficulty {
        ChessDifficulty::Easy => (&chess_puzzles::MATE_EASY, &chess_puzzles::CAPTURE_EASY),
        ChessDifficulty::Medium => (&chess_puzzles::MATE_MEDIUM, &chess_puzzles::CAPTURE_MEDIUM),
        ChessDifficulty::Hard => (&chess_puzzles::MATE_HARD, &chess_puzzles::CAPTURE_HARD),
    };
    match mode {
        ChessMode::Mate => mate.iter().collect(),
        ChessMode::Capture => capture.iter().collect(),
        ChessMode::Both => mate.iter().chain(capture.iter()).collect(),
    }
}

/// Diagram position for a selected puzzle: the FEN parsed and the setup
/// move played.
///
/// # Errors
///
/// Returns an error when the FEN does not describe a full board.
pub fn position_after_setup(puzzle: &ChessPuzzle) -> Result<ParsedPosition, String> {
    let position = parse_fen(&puzzle.fen)?;
    if puzzle.setup_move.is_empty() {
        return Ok(position);
    }
    Ok(apply_move(position, &puzzle.setup_move))
}

/// Parse the placement and active-color fields of a FEN string.
///
/// # Errors
///
/// Returns an error when the placement field is missing, holds an
/// unrecognized piece letter, or does not cover 8x8 squares.
pub fn parse_fen(fen: &str) -> Result<ParsedPosition, String> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| "empty FEN string".to_string())?;
    let active = match fields.next() {
        Some("b") => PieceColor::Black,
        _ => PieceColor::White,
    };

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("expected 8 ranks, found {}", ranks.len()));
    }

    let mut board: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = piece_from_char(c)
                .ok_or_else(|| format!("unrecognized piece {c:?} in rank {}", 8 - row))?;
            if col >= 8 {
                return Err(format!("rank {} is too wide", 8 - row));
            }
            board[row][col] = Some(piece);
            col += 1;
        }
        if col != 8 {
            return Err(format!("rank {} covers {col} files", 8 - row));
        }
    }

    Ok(ParsedPosition { board, active })
}

/// Play one move in coordinate notation, like `e2e4` or `a7a8q`.
///
/// A king moving two files brings its rook over (castling); a fifth
/// character promotes the moved piece. Unparseable notation leaves the
/// position untouched.
pub fn apply_move(mut position: ParsedPosition, notation: &str) -> ParsedPosition {
    let chars: Vec<char> = notation.trim().chars().collect();
    if chars.len() < 4 {
        debug!("move {notation:?} is too short, ignoring it");
        return position;
    }
    let (Some((from_col, from_row)), Some((to_col, to_row))) = (
        parse_square(chars[0], chars[1]),
        parse_square(chars[2], chars[3]),
    ) else {
        debug!("move {notation:?} names no square, ignoring it");
        return position;
    };
    let Some(piece) = position.board[from_row][from_col] else {
        debug!("no piece to move on {}{}", chars[0], chars[1]);
        return position;
    };

    position.board[from_row][from_col] = None;
    position.board[to_row][to_col] = Some(piece);

    // A castling king travels two files; the rook follows on its own.
    if piece.kind == PieceKind::King && from_col.abs_diff(to_col) == 2 {
        if to_col > from_col {
            position.board[to_row][5] = position.board[to_row][7].take();
        } else {
            position.board[to_row][3] = position.board[to_row][0].take();
        }
    }

    if let Some(&promotion) = chars.get(4) {
        if let Some(kind) = piece_kind_from_char(promotion) {
            position.board[to_row][to_col] = Some(Piece {
                kind,
                color: piece.color,
            });
        }
    }

    position.active = position.active.opposite();
    position
}

/// Board coordinates for a square like `e4`: `(col, row)`.
fn parse_square(file: char, rank: char) -> Option<(usize, usize)> {
    let col = (file as i32) - ('a' as i32);
    if !(0..8).contains(&col) {
        return None;
    }
    match rank.to_digit(10) {
        Some(digit @ 1..=8) => Some((col as usize, (8 - digit) as usize)),
        _ => None,
    }
}

fn piece_from_char(c: char) -> Option<Piece> {
    let kind = piece_kind_from_char(c.to_ascii_lowercase())?;
    let color = if c.is_ascii_uppercase() {
        PieceColor::White
    } else {
        PieceColor::Black
    };
    Some(Piece { kind, color })
}

fn piece_kind_from_char(c: char) -> Option<PieceKind> {
    match c.to_ascii_lowercase() {
        'p' => Some(PieceKind::Pawn),
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        'k' => Some(PieceKind::King),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn at(position: &ParsedPosition, square: &str) -> Option<Piece> {
        let chars: Vec<char> = square.chars().collect();
        let (col, row) = parse_square(chars[0], chars[1]).unwrap();
        position.board[row][col]
    }

    #[test]
    fn parses_the_starting_position() {
        let position = parse_fen(START).unwrap();
        assert_eq!(position.active, PieceColor::White);
        assert_eq!(
            at(&position, "a8"),
            Some(Piece {
                kind: PieceKind::Rook,
                color: PieceColor::Black
            })
        );
        assert_eq!(
            at(&position, "e1"),
            Some(Piece {
                kind: PieceKind::King,
                color: PieceColor::White
            })
        );
        assert_eq!(at(&position, "e4"), None);
        assert_eq!(
            (0..8)
                .map(|col| at(&position, &format!("{}2", (b'a' + col) as char)))
                .filter(|piece| piece.map(|p| p.kind) == Some(PieceKind::Pawn))
                .count(),
            8
        );
    }

    #[test]
    fn rejects_malformed_fens() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("banana").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("9/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("x7/8/8/8/8/8/8/8 w").is_err());
    }

    #[test]
    fn plain_moves_relocate_the_piece_and_pass_the_turn() {
        let position = parse_fen(START).unwrap();
        let after = apply_move(position, "e2e4");
        assert_eq!(after.active, PieceColor::Black);
        assert_eq!(at(&after, "e2"), None);
        assert_eq!(
            at(&after, "e4"),
            Some(Piece {
                kind: PieceKind::Pawn,
                color: PieceColor::White
            })
        );
    }

    #[test]
    fn castling_brings_the_rook_over() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let after = apply_move(position, "e1g1");
        assert_eq!(at(&after, "g1").map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(at(&after, "f1").map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(at(&after, "h1"), None);
        assert_eq!(at(&after, "e1"), None);

        let position = parse_fen("r3k3/8/8/8/8/8/8/4K3 b q - 0 1").unwrap();
        let after = apply_move(position, "e8c8");
        assert_eq!(at(&after, "c8").map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(at(&after, "d8").map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(at(&after, "a8"), None);
    }

    #[test]
    fn promotion_swaps_in_the_new_piece() {
        let position = parse_fen("8/P7/8/8/8/8/8/k1K5 w - - 0 1").unwrap();
        let after = apply_move(position, "a7a8q");
        assert_eq!(
            at(&after, "a8"),
            Some(Piece {
                kind: PieceKind::Queen,
                color: PieceColor::White
            })
        );
        assert_eq!(at(&after, "a7"), None);
    }

    #[test]
    fn bad_notation_leaves_the_position_alone() {
        let position = parse_fen(START).unwrap();
        assert_eq!(apply_move(position.clone(), ""), position);
        assert_eq!(apply_move(position.clone(), "e9e4"), position);
        assert_eq!(apply_move(position.clone(), "e4e5"), position);
    }

    #[test]
    fn selection_is_stable_for_a_seed() {
        let first = select_puzzle(3, ChessDifficulty::Easy, ChessMode::Mate);
        let second = select_puzzle(3, ChessDifficulty::Easy, ChessMode::Mate);
        assert_eq!(first, second);
        assert!(
            chess_puzzles::MATE_EASY
                .iter()
                .any(|entry| entry.fen == first.fen)
        );
    }

    #[test]
    fn both_mode_draws_from_mate_and_capture_pools() {
        for seed in 0..20 {
            let puzzle = select_puzzle(seed, ChessDifficulty::Medium, ChessMode::Both);
            let known = chess_puzzles::MATE_MEDIUM
                .iter()
                .chain(chess_puzzles::CAPTURE_MEDIUM.iter())
                .any(|entry| entry.fen == puzzle.fen);
            assert!(known);
        }
    }

    #[test]
    fn every_pool_entry_parses_and_replays() {
        for difficulty in [
            ChessDifficulty::Easy,
            ChessDifficulty::Medium,
            ChessDifficulty::Hard,
        ] {
            for mode in [ChessMode::Mate, ChessMode::Capture] {
                for entry in pool_for(difficulty, mode) {
                    let position = parse_fen(entry.fen).unwrap();
                    let after = apply_move(position.clone(), entry.setup_move);
                    assert_ne!(
                        after.active, position.active,
                        "setup move of {:?} must apply",
                        entry.fen
                    );

                    // The advertised solution starts from a piece of the
                    // side to move.
                    let chars: Vec<char> = entry.solution.chars().collect();
                    assert!(chars.len() == 4 || chars.len() == 5);
                    let (col, row) = parse_square(chars[0], chars[1]).unwrap();
                    let piece = after.board[row][col].unwrap();
                    assert_eq!(piece.color, after.active, "{:?}", entry.fen);
                    assert!(!entry.description.is_empty());
                }
            }
        }
    }
}
