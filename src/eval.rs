//! Positional scoring hooks: material magnitudes and per-variant
//! piece-square tables.
//!
//! Tables are authored from White's perspective with rank 8 as the first
//! row. A White piece on (x, y) reads row `7 - y`; a Black piece reads row
//! `y` and negates, so the same array serves both sides.

use crate::pieces::{Color, Piece, PieceType};

/// Material magnitude per table index (pawn through king), always positive;
/// the sign is applied at read time from the piece's color.
pub const MATERIAL: [i32; 6] = [1, 3, 3, 5, 9, 900];

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 15,  15,  25,  35,  35,  25,  15,  15],
    [  5,   5,  15,  30,  30,  15,   5,   5],
    [ -5,   0,  10,  25,  25,  10,   0,  -5],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,  -5, -10, -10,  -5,   5, -10],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   5,  20,  25,  25,  20,   5, -30],
    [-30,   5,  20,  25,  25,  20,   5, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-10,   0,  10,  15,  15,  10,   0, -10],
    [-10,   5,  10,  15,  15,  10,   5, -10],
    [-10,   0,  15,  15,  15,  15,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   5,   5,   0,   0,   0],
    [ 10,  15,  15,  15,  15,  15,  15,  10],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   5,  10,  10,   5,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

const TABLES: [[[i32; 8]; 8]; 6] = [
    PAWN_TABLE,
    KNIGHT_TABLE,
    BISHOP_TABLE,
    ROOK_TABLE,
    QUEEN_TABLE,
    KING_TABLE,
];

/// Unsigned material worth of a piece type. Zero for `None`.
pub fn material(piece_type: PieceType) -> i32 {
    match piece_type.index() {
        Some(idx) => MATERIAL[idx],
        None => 0,
    }
}

/// Positional bonus for `piece` occupying `(x, y)`.
///
/// Out-of-range coordinates are a caller bug, not a data condition:
/// this asserts rather than clamping, since clamping would silently
/// corrupt scores near the edges.
pub fn positional_score(piece: Piece, x: usize, y: usize) -> i32 {
    assert!(x < 8 && y < 8, "square ({x}, {y}) is outside the 8x8 board");
    let Some(idx) = piece.piece_type().index() else {
        return 0;
    };
    match piece.color() {
        Color::White => TABLES[idx][7 - y][x],
        Color::Black => -TABLES[idx][y][x],
        Color::None => 0,
    }
}
