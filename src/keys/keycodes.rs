//! Keycode to display label conversion.
//!
//! Key codes are macOS virtual key codes (kVK_*). Labels are the short forms
//! shown in the shortcut field, so editing keys use their keycap glyphs.

use super::KeyCode;

/// Escape key code on macOS
pub const ESCAPE_KEY_CODE: KeyCode = 53;

/// Convert a key code to its display label.
///
/// Total over all codes: anything without a dedicated label renders as
/// `Key<code>`.
pub fn key_label(key_code: KeyCode) -> String {
    let label = match key_code {
        // Function keys
        122 => "F1",
        120 => "F2",
        99 => "F3",
        118 => "F4",
        96 => "F5",
        97 => "F6",
        98 => "F7",
        100 => "F8",
        101 => "F9",
        109 => "F10",
        103 => "F11",
        111 => "F12",

        // Arrow keys
        126 => "↑",
        125 => "↓",
        123 => "←",
        124 => "→",

        // Editing keys
        51 => "⌫",
        36 => "↩",
        76 => "↩", // Numpad enter
        48 => "⇥",
        ESCAPE_KEY_CODE => "⎋",
        49 => "Space",

        // Numbers (top row)
        29 => "0",
        18 => "1",
        19 => "2",
        20 => "3",
        21 => "4",
        23 => "5",
        22 => "6",
        26 => "7",
        28 => "8",
        25 => "9",

        // Letters (A-Z)
        0 => "A",
        11 => "B",
        8 => "C",
        2 => "D",
        14 => "E",
        3 => "F",
        5 => "G",
        4 => "H",
        34 => "I",
        38 => "J",
        40 => "K",
        37 => "L",
        46 => "M",
        45 => "N",
        31 => "O",
        35 => "P",
        12 => "Q",
        15 => "R",
        1 => "S",
        17 => "T",
        32 => "U",
        9 => "V",
        13 => "W",
        7 => "X",
        16 => "Y",
        6 => "Z",

        // Punctuation and symbols
        27 => "-",
        24 => "=",
        33 => "[",
        30 => "]",
        42 => "\\",
        41 => ";",
        39 => "'",
        50 => "`",
        43 => ",",
        47 => ".",
        44 => "/",
        10 => "§", // ISO keyboards, varies by layout

        _ => return format!("Key{}", key_code),
    };
    label.to_string()
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod tests;
