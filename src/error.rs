use thiserror::Error;

/// Errors raised by the board core.
///
/// All three variants are caller contract violations rather than data
/// conditions: a coordinate outside the 8x8 grid, or an attempt to build a
/// piece without a concrete side or type. Callers are expected to propagate
/// or fail fast, not to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("square ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds { x: usize, y: usize },

    #[error("a placed piece must have a side")]
    MissingColor,

    #[error("a placed piece must have a concrete piece type")]
    MissingType,
}
