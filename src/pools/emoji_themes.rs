/*
emoji_themes.rs

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

//! Emoji pools shared by the icon-based puzzles.
//!
//! Every list is curated for print: single glyphs that render at small
//! sizes, no skin-tone or ZWJ sequences.

/// Marker icons for the arrow maze in its uniform mode.
pub const CIRCLES: [&str; 9] = ["🔴", "🟠", "🟡", "🟢", "🔵", "🟣", "🟤", "⚫", "⚪"];

/// Small themed lists for the arrow maze in its random mode.
pub const MIXED: [&'static [&'static str]; 17] = [
    &["🍎", "🍌", "🍊", "🍇", "🍓", "🍉", "🍐", "🥝"],
    &["🐶", "🐱", "🐭", "🐰", "🦊", "🐻", "🐼", "🐨"],
    &["🐟", "🐠", "🐙", "🦀", "🐬", "🐳", "🦈", "🐚"],
    &["🚀", "🌙", "⭐", "☀️", "🪐", "🌍", "💫", "🌟"],
    &["⚽", "🏀", "🎾", "🏈", "⚾", "🏐", "🏓", "🎳"],
    &["🍕", "🍔", "🌭", "🍟", "🥨", "🧀", "🥪", "🌮"],
    &["😀", "😎", "🤠", "😍", "🤡", "😺", "🤖", "👻"],
    &["🚗", "🚕", "🚌", "🚓", "🚑", "🚒", "🚜", "🏎️"],
    &["☀️", "⛅", "🌧️", "⛈️", "🌈", "❄️", "⛄", "🌪️"],
    &["🎵", "🎶", "🎸", "🎺", "🥁", "🎻", "🎹", "🎷"],
    &["❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "🤍"],
    &["🌸", "🌼", "🌻", "🌹", "🌷", "🌺", "💐", "🍀"],
    &["🐝", "🐞", "🦋", "🐛", "🐜", "🦗", "🕷️", "🐌"],
    &["🐦", "🐧", "🦆", "🦉", "🦅", "🦜", "🐔", "🐤"],
    &["🔺", "🔻", "🔶", "🔷", "🟥", "🟦", "🟩", "🟨"],
    &["🥤", "🧃", "🍵", "☕", "🥛", "🍹", "🫖", "🧊"],
    &["🍪", "🧁", "🍩", "🍰", "🍭", "🍬", "🍫", "🍦"],
];

/// A named emoji list, large enough to fill an odd-one-out grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiTheme {
    pub name: &'static str,
    pub emojis: &'static [&'static str],
}

/// Themes for the odd-one-out grids. Every list holds at least 25
/// distinct entries so a 7x7 grid can draw its icons without repeats.
pub const ODD_ONE_OUT_THEMES: [EmojiTheme; 10] = [
    EmojiTheme {
        name: "Animals",
        emojis: &[
            "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷",
            "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦆", "🦉", "🐺", "🐗", "🐴", "🦄", "🐝",
        ],
    },
    EmojiTheme {
        name: "Food",
        emojis: &[
            "🍎", "🍌", "🍊", "🍇", "🍓", "🍉", "🍒", "🍑", "🥭", "🍍", "🥥", "🥑", "🍕",
            "🍔", "🌭", "🍟", "🌮", "🥪", "🧀", "🥨", "🍪", "🧁", "🍩", "🍰", "🍭", "🍬",
            "🍫", "🍦",
        ],
    },
    EmojiTheme {
        name: "Faces",
        emojis: &[
            "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🙂", "😉", "😊", "😇", "🥰", "😍",
            "🤩", "😘", "😋", "😛", "😜", "🤪", "😝", "🤑", "🤗", "🤭", "🤫", "🤔", "🤐",
            "🤨", "😐", "😑", "😶", "😏", "😒", "🙄", "😬", "😌", "😔", "😪", "🤤", "😴",
            "😷", "🤒", "🤕", "🤢", "🤧", "🥵", "🥶", "🤠",
        ],
    },
    EmojiTheme {
        name: "Water",
        emojis: &[
            "🐟", "🐠", "🐡", "🦈", "🐙", "🦑", "🦐", "🦞", "🦀", "🐚", "🐬", "🐳", "🐋",
            "🦭", "🐢", "🐸", "🌊", "⛵", "⚓", "🚤", "🛶", "🏄", "🤿", "🏊", "🐊",
        ],
    },
    EmojiTheme {
        name: "Plants",
        emojis: &[
            "🌸", "🌼", "🌻", "🌹", "🌷", "🌺", "💐", "🍀", "🌿", "🌱", "🌳", "🌲", "🌴",
            "🌵", "🍄", "🍁", "🍂", "🍃", "🌾", "🪴", "🌰", "🎋", "🎍", "🌽", "🥕",
        ],
    },
    EmojiTheme {
        name: "Vehicles",
        emojis: &[
            "🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚐", "🚚", "🚛", "🚜",
            "🛵", "🏍️", "🚲", "🛴", "🚂", "🚆", "🚇", "✈️", "🚁", "🚀", "⛵", "🚤", "🛸",
        ],
    },
    EmojiTheme {
        name: "Sports",
        emojis: &[
            "⚽", "🏀", "🏈", "⚾", "🥎", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸", "🥅", "🏒",
            "🏑", "🥍", "🏏", "⛳", "🏹", "🎣", "🥊", "🥋", "🎽", "⛸️", "🥌", "🛹",
        ],
    },
    EmojiTheme {
        name: "Sky",
        emojis: &[
            "☀️", "🌤️", "⛅", "🌥️", "☁️", "🌦️", "🌧️", "⛈️", "🌩️", "🌨️", "❄️", "⛄", "🌬️",
            "💨", "🌪️", "🌫️", "🌈", "⚡", "💧", "🌙", "⭐", "🌟", "💫", "☄️", "🪐",
        ],
    },
    EmojiTheme {
        name: "Playroom",
        emojis: &[
            "🎁", "🎈", "🎉", "🎊", "🧸", "🪁", "🎲", "🧩", "🎨", "🖍️", "✏️", "📚", "📦",
            "🔑", "🔔", "⏰", "🕯️", "💡", "🔦", "🧲", "🔭", "🔬", "🗝️", "🎯", "🪀", "🎪",
        ],
    },
    EmojiTheme {
        name: "Music",
        emojis: &[
            "🎵", "🎶", "🎼", "🎤", "🎧", "🎷", "🎺", "🎸", "🪕", "🎻", "🥁", "🎹", "🪗",
            "🪘", "📯", "🔔", "🎙️", "🎚️", "🎛️", "📻", "🎭", "🩰", "🎬", "💃", "🕺",
        ],
    },
];

/// Categories for the which-doesnt-belong rows. Four icons come from one
/// category and the fifth from another, so every list holds at least
/// five distinct entries.
pub const BELONGING_CATEGORIES: [EmojiTheme; 20] = [
    EmojiTheme {
        name: "Animals",
        emojis: &["🐶", "🐱", "🐭", "🐰", "🐼", "🐨", "🦊", "🐸", "🐷", "🐵"],
    },
    EmojiTheme {
        name: "Fruits",
        emojis: &["🍎", "🍌", "🍇", "🍊", "🍓", "🍉", "🍑", "🍒", "🍍", "🥝"],
    },
    EmojiTheme {
        name: "Vehicles",
        emojis: &["🚗", "🚕", "🚙", "🚌", "🚎", "🚓", "🚑", "🚒", "🚐", "🚚"],
    },
    EmojiTheme {
        name: "Sports",
        emojis: &["⚽", "🏀", "🎾", "⚾", "🏐", "🏈", "🎱", "🏓", "🏸", "🏒"],
    },
    EmojiTheme {
        name: "Flowers",
        emojis: &["🌸", "🌺", "🌻", "🌹", "🌷", "🌼", "💐", "🏵️"],
    },
    EmojiTheme {
        name: "Tools",
        emojis: &["🔨", "🔧", "🪛", "✂️", "🪚", "⚒️", "🔩", "⛏️"],
    },
    EmojiTheme {
        name: "Food",
        emojis: &["🍕", "🍔", "🌭", "🌮", "🍟", "🥪", "🌯", "🥗", "🍝", "🍜"],
    },
    EmojiTheme {
        name: "Ocean",
        emojis: &["🐠", "🐟", "🐡", "🦈", "🐙", "🦀", "🐚", "🦞", "🦑", "🐬"],
    },
    EmojiTheme {
        name: "Weather",
        emojis: &["☀️", "☁️", "⛅", "🌈", "❄️", "⚡", "🌧️", "🌩️", "🌪️"],
    },
    EmojiTheme {
        name: "Birds",
        emojis: &["🐦", "🦅", "🦆", "🦉", "🦚", "🦜", "🐧", "🦩", "🕊️", "🦢"],
    },
    EmojiTheme {
        name: "Insects",
        emojis: &["🐝", "🐛", "🦋", "🐞", "🐜", "🦗", "🕷️", "🐌"],
    },
    EmojiTheme {
        name: "Vegetables",
        emojis: &["🥕", "🥦", "🌽", "🥒", "🍅", "🥔", "🧅", "🧄", "🫑", "🥬"],
    },
    EmojiTheme {
        name: "Desserts",
        emojis: &["🍰", "🎂", "🧁", "🍪", "🍩", "🍦", "🍨", "🍧", "🧇", "🥧"],
    },
    EmojiTheme {
        name: "Drinks",
        emojis: &["🥤", "🧃", "🥛", "☕", "🍵", "🧉", "🍼"],
    },
    EmojiTheme {
        name: "Instruments",
        emojis: &["🎸", "🎹", "🎺", "🎷", "🥁", "🎻", "🪕", "🪗"],
    },
    EmojiTheme {
        name: "Clothing",
        emojis: &["👕", "👔", "👗", "👠", "👞", "👟", "🧦", "🧤", "🎩", "👒"],
    },
    EmojiTheme {
        name: "Buildings",
        emojis: &["🏠", "🏡", "🏢", "🏰", "🏛️", "⛪", "🕌", "🏗️", "🏭"],
    },
    EmojiTheme {
        name: "Farm Animals",
        emojis: &["🐄", "🐖", "🐓", "🐔", "🐏", "🐑", "🐴", "🦃", "🐐"],
    },
    EmojiTheme {
        name: "Household",
        emojis: &["🪑", "🛋️", "🛏️", "🚪", "🪟", "🚿", "🛁", "🚽", "💡", "🕯️"],
    },
    EmojiTheme {
        name: "Space",
        emojis: &["🌍", "🪐", "⭐", "✨", "💫", "🌟", "🚀", "🛸", "🌕"],
    },
];

/// Icons for the counting rows.
pub const COUNTING_EMOJIS: [&str; 34] = [
    "🍎", "🍌", "🍓", "🍊", "🍇", "🐶", "🐱", "🐰", "🐻", "🐸", "⭐", "🌙", "☀️", "🌈",
    "⚽", "🏀", "🎾", "🚗", "🚌", "🚀", "🎈", "🎁", "🧸", "🍪", "🧁", "🍭", "🐝", "🦋",
    "🐞", "🌸", "🌻", "🍀", "❤️", "😀",
];

/// Icons for the size-ordering rows.
pub const ORDERING_EMOJIS: [&str; 18] = [
    "🎈", "⭐", "❤️", "🌟", "🎁", "⚽", "🌸", "🍎", "🦋", "🐟", "🌙", "☀️", "🍦", "🧸",
    "🚀", "🌻", "🐞", "🍪",
];
