//! 5x7 digit font
//!
//! Column-major: each glyph is five column bytes, bit 0 is the top row.
//! Only the characters a counter needs are present.

/// Glyph width in columns
pub const FONT_WIDTH: usize = 5;

/// Glyph height in rows
pub const FONT_HEIGHT: usize = 7;

const DIGITS: [[u8; FONT_WIDTH]; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E], // 9
];

const SPACE: [u8; FONT_WIDTH] = [0x00; FONT_WIDTH];
const MINUS: [u8; FONT_WIDTH] = [0x08, 0x08, 0x08, 0x08, 0x08];
const COLON: [u8; FONT_WIDTH] = [0x00, 0x00, 0x14, 0x00, 0x00];

/// Column bytes for `ch`, or None if the font has no such glyph
pub fn glyph(ch: char) -> Option<&'static [u8; FONT_WIDTH]> {
    match ch {
        '0'..='9' => DIGITS.get((ch as u8 - b'0') as usize),
        ' ' => Some(&SPACE),
        '-' => Some(&MINUS),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Check if the font pixel at (`col`, `row`) is lit
pub fn is_lit(columns: &[u8; FONT_WIDTH], col: usize, row: usize) -> bool {
    col < FONT_WIDTH && row < FONT_HEIGHT && columns[col] & (1 << row) != 0
}
