//! Error types for board validation and search.

use thiserror::Error;

/// A board that cannot be searched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),

    #[error("tile {0} is out of range (allowed 0-8)")]
    TileOutOfRange(u32),

    #[error("expected one or two blanks, found {0}")]
    BlankCount(usize),

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    #[error("tile {0} is missing from the target board")]
    TileMismatch(u8),

    #[error("could not parse board: {0}")]
    Parse(String),
}

/// Why a solve produced no path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid board: {0}")]
    InvalidState(#[from] StateError),

    #[error("goal unreachable after expanding {expanded} states (max queue length {max_frontier})")]
    Unsolvable { expanded: usize, max_frontier: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
