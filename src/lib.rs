pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod pieces;

pub use board::Board;
pub use error::CoreError;
pub use movegen::{Square, moves_from};
pub use pieces::{Color, Piece, PieceType};
