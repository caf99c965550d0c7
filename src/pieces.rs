use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::CoreError;
use crate::{eval, movegen};

/// Side a piece belongs to. `None` exists for symbol/serialization purposes
/// only; `Piece::new` rejects it, so a placed piece always has a side.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Color {
    None,
    White,
    Black,
}

impl Color {
    /// +1 for White, -1 for Black. Used to sign material and positional
    /// sums so a whole-board total reads from White's perspective.
    #[inline(always)]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
            Color::None => 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PieceType {
    None,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Table index for material and piece-square lookups.
    /// Only concrete types have one.
    #[inline(always)]
    pub const fn index(self) -> Option<usize> {
        match self {
            PieceType::Pawn => Some(0),
            PieceType::Knight => Some(1),
            PieceType::Bishop => Some(2),
            PieceType::Rook => Some(3),
            PieceType::Queen => Some(4),
            PieceType::King => Some(5),
            PieceType::None => None,
        }
    }

    /// Lowercase glyph for the type, `' '` for `None`.
    pub const fn glyph(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
            PieceType::None => ' ',
        }
    }
}

/// One chess piece: a type tag plus a side. Both fields are fixed at
/// construction; captures are modelled by the board dropping the piece,
/// never by mutating it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Piece {
    piece_type: PieceType,
    color: Color,
}

impl Piece {
    /// Builds a piece, rejecting the `None` placeholders: a placed piece
    /// always has a concrete side and type.
    pub fn new(piece_type: PieceType, color: Color) -> Result<Piece, CoreError> {
        if color == Color::None {
            return Err(CoreError::MissingColor);
        }
        if piece_type == PieceType::None {
            return Err(CoreError::MissingType);
        }
        Ok(Piece { piece_type, color })
    }

    #[inline(always)]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline(always)]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// FEN-style glyph: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let g = self.piece_type.glyph();
        match self.color {
            Color::White => g.to_ascii_uppercase(),
            _ => g,
        }
    }

    /// Signed material worth: magnitude per type, positive for White and
    /// negative for Black, so summing over a board yields a net balance.
    pub fn value(self) -> i32 {
        eval::material(self.piece_type) * self.color.sign()
    }

    /// Positional bonus for occupying `(x, y)`, mirrored and negated for
    /// Black. Panics on out-of-range coordinates; see `eval::positional_score`.
    pub fn positional_score(self, x: usize, y: usize) -> i32 {
        eval::positional_score(self, x, y)
    }

    /// Pseudo-legal destinations from `(x, y)` on `board`, in the fixed
    /// per-variant direction order. Builds a fresh list on every call and
    /// never mutates the board.
    pub fn move_list(self, board: &Board, x: usize, y: usize) -> Vec<(usize, usize)> {
        match self.piece_type {
            PieceType::Pawn => movegen::pawn_moves(board, self.color, x, y),
            PieceType::Knight => movegen::knight_moves(board, self.color, x, y),
            PieceType::Bishop => movegen::bishop_moves(board, self.color, x, y),
            PieceType::Rook => movegen::rook_moves(board, self.color, x, y),
            PieceType::Queen => movegen::queen_moves(board, self.color, x, y),
            PieceType::King => movegen::king_moves(board, self.color, x, y),
            PieceType::None => Vec::new(),
        }
    }
}
