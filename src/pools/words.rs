/*
words.rs

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

//! The word-search vocabulary.
//!
//! Short, concrete words an early reader can find, each paired with the
//! icon printed next to the clue. Lengths stay between three and six
//! letters so even the smallest grid keeps a deep pool after the
//! length filter.

/// A findable word and its clue icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub emoji: &'static str,
}

pub const WORD_LIST: [WordEntry; 60] = [
    WordEntry { word: "CAT", emoji: "🐱" },
    WordEntry { word: "DOG", emoji: "🐶" },
    WordEntry { word: "SUN", emoji: "☀️" },
    WordEntry { word: "BEE", emoji: "🐝" },
    WordEntry { word: "FOX", emoji: "🦊" },
    WordEntry { word: "OWL", emoji: "🦉" },
    WordEntry { word: "PIG", emoji: "🐷" },
    WordEntry { word: "COW", emoji: "🐮" },
    WordEntry { word: "STAR", emoji: "⭐" },
    WordEntry { word: "MOON", emoji: "🌙" },
    WordEntry { word: "FISH", emoji: "🐟" },
    WordEntry { word: "BIRD", emoji: "🐦" },
    WordEntry { word: "FROG", emoji: "🐸" },
    WordEntry { word: "BEAR", emoji: "🐻" },
    WordEntry { word: "LION", emoji: "🦁" },
    WordEntry { word: "DUCK", emoji: "🦆" },
    WordEntry { word: "CAKE", emoji: "🎂" },
    WordEntry { word: "MILK", emoji: "🥛" },
    WordEntry { word: "TREE", emoji: "🌳" },
    WordEntry { word: "ROSE", emoji: "🌹" },
    WordEntry { word: "SHIP", emoji: "🚢" },
    WordEntry { word: "BOAT", emoji: "⛵" },
    WordEntry { word: "KITE", emoji: "🪁" },
    WordEntry { word: "DRUM", emoji: "🥁" },
    WordEntry { word: "BELL", emoji: "🔔" },
    WordEntry { word: "RAIN", emoji: "🌧️" },
    WordEntry { word: "SNOW", emoji: "❄️" },
    WordEntry { word: "APPLE", emoji: "🍎" },
    WordEntry { word: "GRAPE", emoji: "🍇" },
    WordEntry { word: "LEMON", emoji: "🍋" },
    WordEntry { word: "MANGO", emoji: "🥭" },
    WordEntry { word: "PEACH", emoji: "🍑" },
    WordEntry { word: "BREAD", emoji: "🍞" },
    WordEntry { word: "PIZZA", emoji: "🍕" },
    WordEntry { word: "CANDY", emoji: "🍬" },
    WordEntry { word: "TIGER", emoji: "🐯" },
    WordEntry { word: "ZEBRA", emoji: "🦓" },
    WordEntry { word: "KOALA", emoji: "🐨" },
    WordEntry { word: "PANDA", emoji: "🐼" },
    WordEntry { word: "MOUSE", emoji: "🐭" },
    WordEntry { word: "HORSE", emoji: "🐴" },
    WordEntry { word: "SHEEP", emoji: "🐑" },
    WordEntry { word: "SNAKE", emoji: "🐍" },
    WordEntry { word: "WHALE", emoji: "🐳" },
    WordEntry { word: "SHARK", emoji: "🦈" },
    WordEntry { word: "ROBOT", emoji: "🤖" },
    WordEntry { word: "TRAIN", emoji: "🚂" },
    WordEntry { word: "PLANE", emoji: "✈️" },
    WordEntry { word: "CLOUD", emoji: "☁️" },
    WordEntry { word: "HEART", emoji: "❤️" },
    WordEntry { word: "HOUSE", emoji: "🏠" },
    WordEntry { word: "BANANA", emoji: "🍌" },
    WordEntry { word: "MONKEY", emoji: "🐵" },
    WordEntry { word: "ROCKET", emoji: "🚀" },
    WordEntry { word: "FLOWER", emoji: "🌸" },
    WordEntry { word: "TURTLE", emoji: "🐢" },
    WordEntry { word: "RABBIT", emoji: "🐰" },
    WordEntry { word: "DRAGON", emoji: "🐉" },
    WordEntry { word: "CHEESE", emoji: "🧀" },
    WordEntry { word: "CHERRY", emoji: "🍒" },
];
