//! Error types for the life engine.

use thiserror::Error;

/// Errors returned by grid and simulation operations.
///
/// Every check runs before the grid is touched, so an error never leaves a
/// board half-written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A value list does not match the number of cells it is meant to cover.
    #[error("size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Static noise probability outside `[0, 1]`.
    #[error("static noise probability {0} is outside [0, 1]")]
    OutOfRange(f32),

    /// The simulation has no board yet.
    #[error("simulation is not initialized")]
    NotInitialized,

    /// `initialize` was called on a simulation that already has a board.
    #[error("simulation is already initialized")]
    AlreadyInitialized,

    /// Board side length outside `2..=max`.
    #[error("board size {size} is outside 2..={max}")]
    InvalidBoardSize { size: usize, max: usize },

    /// An override range reaches past the end of the board.
    #[error("range {start}..{end} is outside a board of {cell_count} cells")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        cell_count: usize,
    },

    /// An ASCII pattern could not be parsed into a square board.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl EngineError {
    pub(crate) fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    pub(crate) fn pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
