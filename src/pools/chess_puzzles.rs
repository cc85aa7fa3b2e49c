/*
chess_puzzles.rs

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

//! Curated chess positions.
//!
//! Each entry stores the position before the setup move, the setup move
//! itself, and the winning reply. The FEN active color is the side playing
//! the setup move; the solver plays the other side.

/// One pre-solved position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessPuzzleEntry {
    pub fen: &'static str,
    pub setup_move: &'static str,
    pub solution: &'static str,
    pub description: &'static str,
}

pub const MATE_EASY: [ChessPuzzleEntry; 4] = [
    ChessPuzzleEntry {
        fen: "7k/p4ppp/8/8/8/8/5PPP/1R4K1 b - - 0 1",
        setup_move: "a7a6",
        solution: "b1b8",
        description: "White mates on the back rank.",
    },
    ChessPuzzleEntry {
        fen: "6k1/3Q4/6K1/8/8/8/8/8 b - - 0 1",
        setup_move: "g8h8",
        solution: "d7h7",
        description: "The queen mates beside her king.",
    },
    ChessPuzzleEntry {
        fen: "3k4/1R5p/8/8/8/8/8/R5K1 b - - 0 1",
        setup_move: "h7h6",
        solution: "a1a8",
        description: "One rook cuts the seventh rank, the other mates.",
    },
    ChessPuzzleEntry {
        fen: "5r1k/6pp/8/4N3/8/8/P7/6K1 b - - 0 1",
        setup_move: "f8g8",
        solution: "e5f7",
        description: "The knight delivers a smothered mate.",
    },
];

pub const MATE_MEDIUM: [ChessPuzzleEntry; 4] = [
    ChessPuzzleEntry {
        fen: "2rkr3/p7/8/8/8/8/7Q/6K1 b - - 0 1",
        setup_move: "a7a5",
        solution: "h2d6",
        description: "The king's own rooks pen him in.",
    },
    ChessPuzzleEntry {
        fen: "r6k/p2R4/5N2/8/8/8/8/K7 b - - 0 1",
        setup_move: "a8b8",
        solution: "d7h7",
        description: "Rook and knight team up in the corner.",
    },
    ChessPuzzleEntry {
        fen: "7k/p3P1pp/8/8/2B5/8/8/6K1 b - - 0 1",
        setup_move: "a7a6",
        solution: "e7e8q",
        description: "The pawn promotes with mate.",
    },
    ChessPuzzleEntry {
        fen: "6k1/p4p1p/8/8/8/8/1B6/3R2K1 b - - 0 1",
        setup_move: "a7a6",
        solution: "d1d8",
        description: "The rook checks while the bishop seals the diagonal.",
    },
];

pub const MATE_HARD: [ChessPuzzleEntry; 4] = [
    ChessPuzzleEntry {
        fen: "5rk1/p5P1/6K1/2B5/8/8/8/8 b - - 0 1",
        setup_move: "a7a6",
        solution: "g7f8q",
        description: "The pawn captures, promotes, and mates.",
    },
    ChessPuzzleEntry {
        fen: "3rkb2/p4p2/8/8/4N3/8/8/4R1K1 b - - 0 1",
        setup_move: "a7a5",
        solution: "e4f6",
        description: "Moving the knight unveils the rook. Double check and mate.",
    },
    ChessPuzzleEntry {
        fen: "7k/p4P2/6K1/8/8/8/5B2/8 b - - 0 1",
        setup_move: "a7a5",
        solution: "f2d4",
        description: "The bishop swings onto the long diagonal.",
    },
    ChessPuzzleEntry {
        fen: "6k1/8/8/8/4n3/8/6PP/5R1K w - - 0 1",
        setup_move: "f1g1",
        solution: "e4f2",
        description: "Black lands a smothered mate.",
    },
];

pub const CAPTURE_EASY: [ChessPuzzleEntry; 4] = [
    ChessPuzzleEntry {
        fen: "6k1/5ppp/8/3q4/8/8/5PPP/3R2K1 b - - 0 1",
        setup_move: "g7g6",
        solution: "d1d5",
        description: "Take the undefended queen.",
    },
    ChessPuzzleEntry {
        fen: "6k1/5ppp/8/r7/8/8/3Q1PPP/6K1 b - - 0 1",
        setup_move: "h7h6",
        solution: "d2a5",
        description: "The queen scoops up the loose rook.",
    },
    ChessPuzzleEntry {
        fen: "6k1/5ppp/8/6n1/8/5P2/6PP/6K1 b - - 0 1",
        setup_move: "g5e4",
        solution: "f3e4",
        description: "The pawn wins the careless knight.",
    },
    ChessPuzzleEntry {
        fen: "5bk1/5ppp/8/8/8/8/5PPP/3R2K1 b - - 0 1",
        setup_move: "f8d6",
        solution: "d1d6",
        description: "An open file costs the bishop.",
    },
];

pub const CAPTURE_MEDIUM: [ChessPuzzleEntry; 4] = [
    ChessPuzzleEntry {
        fen: "6k1/5ppp/3p4/1q6/8/8/5PPP/4R1K1 b - - 0 1",
        setup_move: "b5e5",
        solution: "e1e5",
        description: "The rook trades itself for the queen.",
    },
    ChessPuzzleEntry {
        fen: "4k3/1p3ppp/2n5/1B1P4/8/8/6PP/6K1 b - - 0 1",
        setup_move: "h7h6",
        solution: "d5c6",
        description: "The pinned knight cannot run.",
    },
    ChessPuzzleEntry {
        fen: "6k1/5pp1/8/7q/8/6P1/5P1P/6K1 b - - 0 1",
        setup_move: "h5h4",
        solution: "g3h4",
        description: "The queen strays into the pawn's teeth.",
    },
    ChessPuzzleEntry {
        fen: "6k1/6pp/5p2/4b3/5P2/8/6PP/4R1K1 b - - 0 1",
        setup_move: "h7h6",
        solution: "f4e5",
        description: "Two attackers beat one defender.",
    },
];

pub const CAPTURE_HARD: [ChessPuzzleEntry; 4] = [
    ChessPuzzleEntry {
        fen: "6k1/p4ppp/5n2/3q2B1/8/8/5PPP/3R2K1 b - - 0 1",
        setup_move: "a7a6",
        solution: "g5f6",
        description: "Capture the queen's only guard.",
    },
    ChessPuzzleEntry {
        fen: "6k1/5ppp/2p2n2/3n4/4P3/1B6/5PPP/3R2K1 b - - 0 1",
        setup_move: "h7h6",
        solution: "e4d5",
        description: "Three attackers overwhelm the defense.",
    },
    ChessPuzzleEntry {
        fen: "r3r1k1/1B3ppp/8/8/8/8/5PPP/6K1 b - - 0 1",
        setup_move: "h7h6",
        solution: "b7a8",
        description: "Bishop takes rook and wins the exchange.",
    },
    ChessPuzzleEntry {
        fen: "3q2k1/5ppp/8/4b3/8/8/2N2PPP/6K1 b - - 0 1",
        setup_move: "d8d4",
        solution: "c2d4",
        description: "The knight happily trades into the queen.",
    },
];
