use once_cell::sync::Lazy;

use crate::board::Board;
use crate::error::CoreError;
use crate::pieces::Color;

/// A destination square as (file, rank), both 0-7.
pub type Square = (usize, usize);

const DIRS_KNIGHT: &[(isize, isize)] = &[
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const DIRS_KING: &[(isize, isize)] = &[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const DIRS_BISHOP: &[(isize, isize)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
const DIRS_ROOK: &[(isize, isize)] = &[(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIRS_QUEEN: &[(isize, isize)] = &[
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

fn build_step_table(dirs: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|sq| {
        let x = (sq % 8) as isize;
        let y = (sq / 8) as isize;
        dirs.iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| Board::inside(nx, ny))
            .map(|(nx, ny)| (nx as usize, ny as usize))
            .collect()
    })
}

/// In-bounds knight targets per square, in `DIRS_KNIGHT` order.
pub static KNIGHT_TABLE: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build_step_table(DIRS_KNIGHT));

/// In-bounds king targets per square, in `DIRS_KING` order.
pub static KING_TABLE: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build_step_table(DIRS_KING));

/// Keeps a precomputed target only when it is empty or holds an opponent.
fn filter_steps(board: &Board, color: Color, targets: &[Square]) -> Vec<Square> {
    targets
        .iter()
        .copied()
        .filter(|&(nx, ny)| match board.get(nx, ny) {
            Some(tgt) => tgt.color() != color,
            None => true,
        })
        .collect()
}

/// Walks each ray outward: empty squares accumulate, an opposing piece is
/// included and ends the ray, an own piece ends it short.
fn slide(board: &Board, color: Color, x: usize, y: usize, dirs: &[(isize, isize)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dx, dy) in dirs {
        let mut nx = x as isize + dx;
        let mut ny = y as isize + dy;
        while Board::inside(nx, ny) {
            match board.get(nx as usize, ny as usize) {
                Some(tgt) => {
                    if tgt.color() != color {
                        moves.push((nx as usize, ny as usize));
                    }
                    break;
                }
                None => moves.push((nx as usize, ny as usize)),
            }
            nx += dx;
            ny += dy;
        }
    }
    moves
}

/// Pawn pushes and captures, in a fixed order: single push, double
/// push, right-diagonal capture, left-diagonal capture. The double push
/// requires both squares ahead to be empty. No en passant, no promotion.
pub fn pawn_moves(board: &Board, color: Color, x: usize, y: usize) -> Vec<Square> {
    let mut moves = Vec::new();
    let dir: isize = if color == Color::White { 1 } else { -1 };
    let start_rank: usize = if color == Color::White { 1 } else { 6 };

    let ny = y as isize + dir;
    if Board::inside(x as isize, ny) && board.get(x, ny as usize).is_none() {
        moves.push((x, ny as usize));
        if y == start_rank {
            let ny2 = y as isize + 2 * dir;
            if Board::inside(x as isize, ny2) && board.get(x, ny2 as usize).is_none() {
                moves.push((x, ny2 as usize));
            }
        }
    }
    for dx in [1isize, -1] {
        let nx = x as isize + dx;
        if Board::inside(nx, ny) {
            if let Some(tgt) = board.get(nx as usize, ny as usize) {
                if tgt.color() != color {
                    moves.push((nx as usize, ny as usize));
                }
            }
        }
    }
    moves
}

pub fn knight_moves(board: &Board, color: Color, x: usize, y: usize) -> Vec<Square> {
    filter_steps(board, color, &KNIGHT_TABLE[y * 8 + x])
}

pub fn bishop_moves(board: &Board, color: Color, x: usize, y: usize) -> Vec<Square> {
    slide(board, color, x, y, DIRS_BISHOP)
}

pub fn rook_moves(board: &Board, color: Color, x: usize, y: usize) -> Vec<Square> {
    slide(board, color, x, y, DIRS_ROOK)
}

pub fn queen_moves(board: &Board, color: Color, x: usize, y: usize) -> Vec<Square> {
    slide(board, color, x, y, DIRS_QUEEN)
}

pub fn king_moves(board: &Board, color: Color, x: usize, y: usize) -> Vec<Square> {
    filter_steps(board, color, &KING_TABLE[y * 8 + x])
}

/// Entry point for the presentation layer: resolves the piece on `(x, y)`
/// and delegates to its move list. An empty square is a normal outcome and
/// yields an empty list; only a bad coordinate is an error.
pub fn moves_from(board: &Board, x: usize, y: usize) -> Result<Vec<Square>, CoreError> {
    match board.piece_at(x, y)? {
        Some(piece) => Ok(piece.move_list(board, x, y)),
        None => Ok(Vec::new()),
    }
}
