//! Error types for the eight-puzzle crate

use thiserror::Error;

/// Errors raised while building a [`State`](crate::puzzle::State).
///
/// Search exhaustion is a normal outcome and is never reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("expected 9 tiles, got {got}")]
    InvalidLength { got: usize },

    #[error("tile {value} at position {position} is out of range (must be 0-8)")]
    TileOutOfRange { value: u8, position: usize },

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
