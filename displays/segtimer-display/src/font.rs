//! Segment lookup tables
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---   . DP
//!      D
//! ```

/// Segment A (top)
pub const SEG_A: u8 = 0b_0000_0001;
/// Segment B (top right)
pub const SEG_B: u8 = 0b_0000_0010;
/// Segment C (bottom right)
pub const SEG_C: u8 = 0b_0000_0100;
/// Segment D (bottom)
pub const SEG_D: u8 = 0b_0000_1000;
/// Segment E (bottom left)
pub const SEG_E: u8 = 0b_0001_0000;
/// Segment F (top left)
pub const SEG_F: u8 = 0b_0010_0000;
/// Segment G (middle)
pub const SEG_G: u8 = 0b_0100_0000;
/// Decimal point
pub const DECIMAL_POINT: u8 = 0b_1000_0000;

/// All segments off
pub const BLANK: u8 = 0b_0000_0000;

/// Patterns for digits 0-9
pub const DIGITS: [u8; 10] = [
    0b_0011_1111, // 0
    0b_0000_0110, // 1
    0b_0101_1011, // 2
    0b_0100_1111, // 3
    0b_0110_0110, // 4
    0b_0110_1101, // 5
    0b_0111_1101, // 6
    0b_0000_0111, // 7
    0b_0111_1111, // 8
    0b_0110_1111, // 9
];

/// Patterns for letters A-Z
///
/// Letters a 7-segment panel cannot draw well (K, M, V, W, X) use the
/// usual approximations.
pub const LETTERS: [u8; 26] = [
    0b_0111_0111, // A
    0b_0111_1100, // b
    0b_0011_1001, // C
    0b_0101_1110, // d
    0b_0111_1001, // E
    0b_0111_0001, // F
    0b_0011_1101, // G
    0b_0111_0110, // H
    0b_0011_0000, // I
    0b_0001_1110, // J
    0b_0111_0101, // K
    0b_0011_1000, // L
    0b_0011_0111, // M
    0b_0101_0100, // n
    0b_0011_1111, // O
    0b_0111_0011, // P
    0b_0110_0111, // q
    0b_0101_0000, // r
    0b_0110_1101, // S
    0b_0111_1000, // t
    0b_0011_1110, // U
    0b_0001_1100, // v
    0b_0010_1010, // W
    0b_0111_0110, // X
    0b_0110_1110, // Y
    0b_0101_1011, // Z
];

/// Pattern for a decimal digit; values above 9 render blank
pub fn digit(value: u8) -> u8 {
    DIGITS.get(usize::from(value)).copied().unwrap_or(BLANK)
}

/// Pattern for a message character; anything outside A-Z renders blank
pub fn glyph(ch: char) -> u8 {
    if ch.is_ascii_uppercase() {
        LETTERS[(ch as u8 - b'A') as usize]
    } else {
        BLANK
    }
}
