//! Fourteen-segment display alphabet.
//!
//! ```text
//!      A
//!  F H I J B
//!   G1   G2
//!  E K L M C
//!      D
//! ```

use crate::glyph_source::VectorSegment;
use crate::legacy::FULL_BLOCK;

const A: u16 = 1 << 0;
const B: u16 = 1 << 1;
const C: u16 = 1 << 2;
const D: u16 = 1 << 3;
const E: u16 = 1 << 4;
const F: u16 = 1 << 5;
const G1: u16 = 1 << 6;
const G2: u16 = 1 << 7;
const H: u16 = 1 << 8;
const I: u16 = 1 << 9;
const J: u16 = 1 << 10;
const K: u16 = 1 << 11;
const L: u16 = 1 << 12;
const M: u16 = 1 << 13;

const G: u16 = G1 | G2;
const ALL: u16 = 0x3FFF;

const LEFT: f32 = 0.2;
const RIGHT: f32 = 0.8;
const TOP: f32 = 0.1;
const BOTTOM: f32 = 0.9;
const MID: f32 = 0.5;

/// Segment geometry in bit order.
const GEOMETRY: [VectorSegment; 14] = [
    VectorSegment::new(LEFT, TOP, RIGHT, TOP),
    VectorSegment::new(RIGHT, TOP, RIGHT, MID),
    VectorSegment::new(RIGHT, MID, RIGHT, BOTTOM),
    VectorSegment::new(LEFT, BOTTOM, RIGHT, BOTTOM),
    VectorSegment::new(LEFT, MID, LEFT, BOTTOM),
    VectorSegment::new(LEFT, TOP, LEFT, MID),
    VectorSegment::new(LEFT, MID, MID, MID),
    VectorSegment::new(MID, MID, RIGHT, MID),
    VectorSegment::new(LEFT, TOP, MID, MID),
    VectorSegment::new(MID, TOP, MID, MID),
    VectorSegment::new(RIGHT, TOP, MID, MID),
    VectorSegment::new(LEFT, BOTTOM, MID, MID),
    VectorSegment::new(MID, BOTTOM, MID, MID),
    VectorSegment::new(RIGHT, BOTTOM, MID, MID),
];

pub(super) fn segments(index: u32) -> Vec<VectorSegment> {
    let mask = mask(index);
    GEOMETRY
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, seg)| *seg)
        .collect()
}

/// Lit segments for a legacy slot. Letters are case-folded.
fn mask(index: u32) -> u16 {
    if index == FULL_BLOCK {
        return ALL;
    }
    let Some(ch) = char::from_u32(index) else {
        return 0;
    };
    match ch.to_ascii_uppercase() {
        '0' => A | B | C | D | E | F | J | K,
        '1' => B | C,
        '2' => A | B | G | E | D,
        '3' => A | B | G | C | D,
        '4' => F | G | B | C,
        '5' => A | F | G | C | D,
        '6' => A | F | E | D | C | G,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | F | G,

        'A' => A | B | C | E | F | G,
        'B' => A | B | C | D | G2 | I | L,
        'C' => A | D | E | F,
        'D' => A | B | C | D | I | L,
        'E' => A | D | E | F | G,
        'F' => A | E | F | G,
        'G' => A | C | D | E | F | G2,
        'H' => B | C | E | F | G,
        'I' => A | D | I | L,
        'J' => B | C | D | E,
        'K' => E | F | G1 | J | M,
        'L' => D | E | F,
        'M' => B | C | E | F | H | J,
        'N' => B | C | E | F | H | M,
        'O' => A | B | C | D | E | F,
        'P' => A | B | E | F | G,
        'Q' => A | B | C | D | E | F | M,
        'R' => A | B | E | F | G | M,
        'S' => A | F | G | C | D,
        'T' => A | I | L,
        'U' => B | C | D | E | F,
        'V' => E | F | K | J,
        'W' => B | C | E | F | K | M,
        'X' => H | J | K | M,
        'Y' => H | J | L,
        'Z' => A | D | J | K,

        '-' => G,
        '+' => G | I | L,
        '=' => G | D,
        '*' => H | I | J | K | L | M | G,
        '/' => J | K,
        '\\' => H | M,
        '<' | '(' => J | M,
        '>' | ')' => H | K,
        '[' => A | D | E | F,
        ']' => A | B | C | D,
        '{' => E | F | G1,
        '}' => B | C | G2,
        '^' => H | J,
        ',' => K,
        '.' => L,
        '!' => I | L,
        '?' => A | B | G2 | L,
        '"' => I | B,
        '\'' => I,
        '`' => H,
        '~' => A | D,
        '|' => I | L,
        '_' => D,
        ':' => I | L,
        '$' => A | F | G | C | D | I | L,
        '#' => B | C | G | I | L,
        '%' => F | C | J | K,
        '&' => A | H | G1 | E | D | M,
        '@' => A | B | C | D | E | F | G2 | I,
        _ => 0,
    }
}
