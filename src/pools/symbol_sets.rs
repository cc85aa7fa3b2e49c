/*
symbol_sets.rs

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

//! Curated symbol sets for the Latin-square puzzles.

/// A themed set of display symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    pub name: &'static str,
    pub symbols: [&'static str; 4],
}

pub const SYMBOL_SETS: [SymbolSet; 6] = [
    SymbolSet {
        name: "fruits",
        symbols: ["🍎", "🍌", "🍇", "🍓"],
    },
    SymbolSet {
        name: "animals",
        symbols: ["🐶", "🐱", "🐭", "🐰"],
    },
    SymbolSet {
        name: "shapes",
        symbols: ["🔺", "🔵", "🟩", "⭐"],
    },
    SymbolSet {
        name: "weather",
        symbols: ["☀️", "🌧️", "⛄", "🌈"],
    },
    SymbolSet {
        name: "sea",
        symbols: ["🐟", "🐙", "🦀", "🐬"],
    },
    SymbolSet {
        name: "space",
        symbols: ["🚀", "🌙", "⭐", "🪐"],
    },
];

/// The set at `index`, wrapping around the table.
pub fn set(index: usize) -> &'static SymbolSet {
    &SYMBOL_SETS[index % SYMBOL_SETS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_wraps_around_the_table() {
        assert_eq!(set(0), &SYMBOL_SETS[0]);
        assert_eq!(set(SYMBOL_SETS.len()), &SYMBOL_SETS[0]);
        assert_eq!(set(SYMBOL_SETS.len() + 2), &SYMBOL_SETS[2]);
    }

    #[test]
    fn symbols_within_a_set_are_distinct() {
        for symbol_set in &SYMBOL_SETS {
            let mut symbols = symbol_set.symbols.to_vec();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), 4, "{}", symbol_set.name);
        }
    }
}
