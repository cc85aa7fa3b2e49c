/*
matching_pairs.rs

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

//! Pair categories for the matching puzzles.

/// A themed table of (left, right) matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingCategory {
    pub name: &'static str,
    pub pairs: [(&'static str, &'static str); 5],
}

pub const CATEGORIES: [MatchingCategory; 8] = [
    MatchingCategory {
        name: "Animal Favorites",
        pairs: [
            ("🐰", "🥕"),
            ("🐵", "🍌"),
            ("🐱", "🥛"),
            ("🐶", "🦴"),
            ("🐼", "🎋"),
        ],
    },
    MatchingCategory {
        name: "Weather Friends",
        pairs: [
            ("☀️", "🕶️"),
            ("🌧️", "☂️"),
            ("❄️", "⛄"),
            ("🌙", "🛏️"),
            ("🌈", "🦄"),
        ],
    },
    MatchingCategory {
        name: "Things That Go Together",
        pairs: [
            ("🧦", "👟"),
            ("🔒", "🔑"),
            ("✉️", "📮"),
            ("🖌️", "🎨"),
            ("🎂", "🕯️"),
        ],
    },
    MatchingCategory {
        name: "Tasty Pairs",
        pairs: [
            ("🍞", "🧈"),
            ("🍪", "🥛"),
            ("🍔", "🍟"),
            ("🥣", "🥄"),
            ("🫖", "🍵"),
        ],
    },
    MatchingCategory {
        name: "Colors in Nature",
        pairs: [
            ("🔴", "🍎"),
            ("🟡", "🍌"),
            ("🟣", "🍇"),
            ("🟠", "🍊"),
            ("🟢", "🍏"),
        ],
    },
    MatchingCategory {
        name: "Opposites",
        pairs: [
            ("🔥", "❄️"),
            ("☀️", "🌙"),
            ("😀", "😢"),
            ("⬆️", "⬇️"),
            ("🐘", "🐭"),
        ],
    },
    MatchingCategory {
        name: "Body Helpers",
        pairs: [
            ("🪥", "🦷"),
            ("🧼", "🙌"),
            ("🧦", "🦶"),
            ("👓", "👀"),
            ("🎧", "👂"),
        ],
    },
    MatchingCategory {
        name: "Growing Up",
        pairs: [
            ("🥚", "🐣"),
            ("🐛", "🦋"),
            ("🌰", "🌳"),
            ("🌱", "🌻"),
            ("🐤", "🐔"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn each_category_pairs_distinct_items() {
        for category in &CATEGORIES {
            let lefts: HashSet<&str> = category.pairs.iter().map(|&(left, _)| left).collect();
            let rights: HashSet<&str> = category.pairs.iter().map(|&(_, right)| right).collect();
            assert_eq!(lefts.len(), 5, "{}", category.name);
            assert_eq!(rights.len(), 5, "{}", category.name);
        }
    }
}
