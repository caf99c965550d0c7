use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pieces::{Color, Piece, PieceType};

/// The 8x8 board: an owning grid of optional pieces, indexed by
/// (file x, rank y) with (0, 0) = a1. The grid is the sole source of
/// occupancy truth; pieces hold no back-reference to it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn setup_standard(&mut self) {
        self.squares = [[None; 8]; 8];
        let back = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (x, &pt) in back.iter().enumerate() {
            self.squares[0][x] = Piece::new(pt, Color::White).ok();
            self.squares[7][x] = Piece::new(pt, Color::Black).ok();
            self.squares[1][x] = Piece::new(PieceType::Pawn, Color::White).ok();
            self.squares[6][x] = Piece::new(PieceType::Pawn, Color::Black).ok();
        }
    }

    fn check_bounds(x: usize, y: usize) -> Result<(), CoreError> {
        if x < 8 && y < 8 {
            Ok(())
        } else {
            Err(CoreError::OutOfBounds { x, y })
        }
    }

    /// Occupant of `(x, y)`, or `Ok(None)` for an empty square. Coordinates
    /// outside 0-7 are a caller error, surfaced rather than clamped.
    pub fn piece_at(&self, x: usize, y: usize) -> Result<Option<Piece>, CoreError> {
        Self::check_bounds(x, y)?;
        Ok(self.squares[y][x])
    }

    /// Puts `piece` on `(x, y)`, returning the previous occupant (the
    /// captured piece) if the square was taken.
    pub fn place(&mut self, piece: Piece, x: usize, y: usize) -> Result<Option<Piece>, CoreError> {
        Self::check_bounds(x, y)?;
        Ok(self.squares[y][x].replace(piece))
    }

    /// Clears `(x, y)`, returning whatever was there. `Ok(None)` when the
    /// square was already empty.
    pub fn remove(&mut self, x: usize, y: usize) -> Result<Option<Piece>, CoreError> {
        Self::check_bounds(x, y)?;
        Ok(self.squares[y][x].take())
    }

    /// Grid read for move generation, which only steps to coordinates it has
    /// already bounds-checked.
    #[inline(always)]
    pub(crate) fn get(&self, x: usize, y: usize) -> Option<Piece> {
        self.squares[y][x]
    }

    pub(crate) fn inside(x: isize, y: isize) -> bool {
        x >= 0 && x < 8 && y >= 0 && y < 8
    }

    /// "e2" -> (4, 1).
    pub fn algebraic_to_index(pos: &str) -> Option<(usize, usize)> {
        if pos.len() != 2 {
            return None;
        }
        let bytes = pos.as_bytes();
        let x = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return None,
        };
        let y = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return None,
        };
        Some((x, y))
    }

    /// (4, 1) -> "e2".
    pub fn index_to_algebraic(x: usize, y: usize) -> Option<String> {
        if x < 8 && y < 8 {
            let file = (b'a' + x as u8) as char;
            let rank = (b'1' + y as u8) as char;
            Some(format!("{}{}", file, rank))
        } else {
            None
        }
    }

    /// Signed material sum over every occupied square, White-positive.
    pub fn material_balance(&self) -> i32 {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .map(|p| p.value())
            .sum()
    }

    /// Signed positional sum over every occupied square, White-positive.
    pub fn positional_balance(&self) -> i32 {
        let mut total = 0;
        for y in 0..8 {
            for x in 0..8 {
                if let Some(p) = self.squares[y][x] {
                    total += p.positional_score(x, y);
                }
            }
        }
        total
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..8 {
                let c = match self.squares[y][x] {
                    Some(p) => p.symbol(),
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(pt: PieceType, color: Color) -> Piece {
        Piece::new(pt, color).unwrap()
    }

    #[test]
    fn place_then_lookup_then_remove() {
        let mut board = Board::new();
        let rook = piece(PieceType::Rook, Color::White);
        assert_eq!(board.place(rook, 3, 4), Ok(None));
        assert_eq!(board.piece_at(3, 4), Ok(Some(rook)));
        assert_eq!(board.remove(3, 4), Ok(Some(rook)));
        assert_eq!(board.piece_at(3, 4), Ok(None));
        // removing an empty square is a no-op
        assert_eq!(board.remove(3, 4), Ok(None));
    }

    #[test]
    fn place_reports_the_captured_piece() {
        let mut board = Board::new();
        let victim = piece(PieceType::Knight, Color::Black);
        let attacker = piece(PieceType::Queen, Color::White);
        board.place(victim, 2, 2).unwrap();
        assert_eq!(board.place(attacker, 2, 2), Ok(Some(victim)));
        assert_eq!(board.piece_at(2, 2), Ok(Some(attacker)));
    }

    #[test]
    fn out_of_bounds_is_an_error_not_a_clamp() {
        let mut board = Board::new();
        assert_eq!(
            board.piece_at(8, 0),
            Err(CoreError::OutOfBounds { x: 8, y: 0 })
        );
        assert_eq!(
            board.piece_at(0, 9),
            Err(CoreError::OutOfBounds { x: 0, y: 9 })
        );
        assert_eq!(
            board.remove(12, 12),
            Err(CoreError::OutOfBounds { x: 12, y: 12 })
        );
        let p = piece(PieceType::Pawn, Color::White);
        assert!(board.place(p, 0, 8).is_err());
    }

    #[test]
    fn standard_setup_is_balanced() {
        let mut board = Board::new();
        board.setup_standard();
        let occupied = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| board.piece_at(x, y).unwrap().is_some())
            .count();
        assert_eq!(occupied, 32);
        assert_eq!(board.material_balance(), 0);
        assert_eq!(board.positional_balance(), 0);
        assert_eq!(
            board.piece_at(4, 0).unwrap().map(|p| p.symbol()),
            Some('K')
        );
        assert_eq!(
            board.piece_at(3, 7).unwrap().map(|p| p.symbol()),
            Some('q')
        );
    }

    #[test]
    fn material_balance_sums_signed_values() {
        let mut board = Board::new();
        board.place(piece(PieceType::Rook, Color::White), 0, 0).unwrap();
        board.place(piece(PieceType::Knight, Color::Black), 5, 5).unwrap();
        board.place(piece(PieceType::Pawn, Color::White), 4, 1).unwrap();
        assert_eq!(board.material_balance(), 5 - 3 + 1);
    }

    #[test]
    fn algebraic_round_trip() {
        assert_eq!(Board::algebraic_to_index("a1"), Some((0, 0)));
        assert_eq!(Board::algebraic_to_index("e2"), Some((4, 1)));
        assert_eq!(Board::algebraic_to_index("h8"), Some((7, 7)));
        assert_eq!(Board::algebraic_to_index("i1"), None);
        assert_eq!(Board::algebraic_to_index("a9"), None);
        assert_eq!(Board::algebraic_to_index("e22"), None);
        assert_eq!(Board::index_to_algebraic(4, 1).as_deref(), Some("e2"));
        assert_eq!(Board::index_to_algebraic(8, 0), None);
        for y in 0..8 {
            for x in 0..8 {
                let s = Board::index_to_algebraic(x, y).unwrap();
                assert_eq!(Board::algebraic_to_index(&s), Some((x, y)));
            }
        }
    }

    #[test]
    fn serde_round_trip_preserves_the_grid() {
        let mut board = Board::new();
        board.setup_standard();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert!(back == board);
    }

    #[test]
    fn display_renders_ranks_top_down() {
        let mut board = Board::new();
        board.setup_standard();
        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("8 r n b q k b n r"));
        assert!(text.lines().last().unwrap().contains("a b c d e f g h"));
    }
}
