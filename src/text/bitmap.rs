//! A tiny built-in font covering the characters a counter can contain.
//!
//! Each glyph is a 5x7 grid stored as 7 rows of 5 bits, most significant bit
//! first. The grid is scaled so that one cell is `size / 9` pixels.

const DIGITS: [[u8; 7]; 10] = [
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
    // 3
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b01110, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
];

const PLUS: [u8; 7] = [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000];

pub const GLYPH_WIDTH: u8 = 5;
pub const GLYPH_HEIGHT: u8 = 7;
/// Cells from one glyph's left edge to the next.
pub const ADVANCE: u8 = GLYPH_WIDTH + 1;
/// Cells per em.
pub const EM: f32 = 9.;

pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
    match c {
        '+' => Some(&PLUS),
        _ => c.to_digit(10).map(|digit| &DIGITS[digit as usize]),
    }
}

/// Returns whether the cell at `column`, `row` of `rows` is lit.
pub const fn is_lit(rows: &[u8; 7], column: u8, row: u8) -> bool {
    row < GLYPH_HEIGHT && column < GLYPH_WIDTH && rows[row as usize] & (1 << (GLYPH_WIDTH - 1 - column)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_characters() {
        for c in "0123456789+".chars() {
            assert!(glyph(c).is_some(), "{}", c);
        }
        assert!(glyph('a').is_none());
        assert!(glyph('-').is_none());
    }

    #[test]
    fn plus_is_a_cross() {
        let plus = glyph('+').unwrap();
        assert!(is_lit(plus, 2, 1));
        assert!(is_lit(plus, 0, 3));
        assert!(is_lit(plus, 4, 3));
        assert!(!is_lit(plus, 0, 0));
        assert!(!is_lit(plus, 5, 3));
        assert!(!is_lit(plus, 2, 7));
    }
}
