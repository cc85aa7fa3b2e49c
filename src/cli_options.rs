/*
cli_options.rs

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

//! Process command-line options.
//!
//! The `puzzlepress` binary generates puzzles from the command line so
//! that developers can inspect the data a page would receive, replay a
//! reported seed, or time the generators.
//!
//! # Examples
//!
//! List the puzzle kinds:
//!
//! ```text
//! $ puzzlepress --ls
//! maze
//! weaving-maze
//! arrow-maze
//! laser-maze
//! ...
//! ```
//!
//! Replay one maze from its seed:
//!
//! ```text
//! $ puzzlepress --puzzle maze --seed 42 --width 4 --height 4
//! seed = 42
//! {
//!   "kind": "maze",
//!   ...
//! }
//! ```
//!
//! Time three laser mazes with fresh seeds:
//!
//! ```text
//! $ puzzlepress --puzzle laser-maze --count 3 --summary
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use std::env;
use std::time::{Duration, Instant};

use crate::puzzle::{self, PuzzleConfig, PuzzleKind};
use crate::rng::SeededRandom;

/// Generate Puzzlepress puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the puzzle kinds
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Kind of puzzle to generate
    #[arg(value_enum, short, long, group = "generate")]
    puzzle: Option<PuzzleKind>,

    /// Seed to generate the puzzle from; random when not given
    #[arg(short, long, requires = "generate")]
    seed: Option<u64>,

    /// Width of the puzzle, in page slots
    #[arg(long, default_value_t = 4, requires = "generate")]
    width: usize,

    /// Height of the puzzle, in page slots
    #[arg(long, default_value_t = 4, requires = "generate")]
    height: usize,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the puzzle kinds
    //
    if args.ls {
        for kind in PuzzleKind::value_variants() {
            if let Some(value) = kind.to_possible_value() {
                println!("{}", value.get_name());
            }
        }
        return 0;
    }

    let Some(kind) = args.puzzle else {
        eprintln!(
            "Nothing to do. Use --ls to list the puzzle kinds, or --puzzle to generate one."
        );
        return 2;
    };
    let config: PuzzleConfig = PuzzleConfig::default_for(kind);

    // Consecutive seeds from the base keep a whole --count batch
    // reproducible from the first printed seed.
    let base_seed: u64 = args
        .seed
        .unwrap_or_else(|| SeededRandom::from_entropy().state());

    let mut total: Duration = Duration::ZERO;
    let mut max: Duration = Duration::ZERO;
    for i in 0..args.count {
        let seed: u64 = base_seed.wrapping_add(i as u64);
        debug!("generating {kind:?} from seed {seed}");

        let start = Instant::now();
        let data = puzzle::generate(seed, args.width, args.height, &config);
        let elapsed = start.elapsed();
        total += elapsed;
        if elapsed > max {
            max = elapsed;
        }

        // Verify that the dispatch matched the requested kind
        if data.kind() != kind {
            eprintln!("Generated {:?} for {:?}", data.kind(), kind);
            panic!("Bug: dispatch returned the wrong puzzle kind");
        }

        println!("seed = {seed}");
        println!(
            "{}",
            serde_json::to_string_pretty(&data).expect("Bug: puzzle data must serialize")
        );
    }

    // Print some stats
    if args.summary {
        println!(
            "
     puzzles = {}
  total time = {:?}
average time = {:?}
    max time = {:?}",
            args.count,
            total,
            total / args.count.max(1) as u32,
            max
        );
    }
    0
}
