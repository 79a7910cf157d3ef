//! Error types for game module
//!
//! Only precondition violations surface as errors. Illegal taps, stale moves
//! and engine rejections are normal game flow and never reach this type.

use crate::game::types::Position;

/// Errors that can occur in board and coordinator operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Position lies outside the configured board
    #[error("Position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: u8 },

    /// Attempted to place a piece on an occupied cell
    #[error("Cell {position} is already occupied")]
    OccupiedCell { position: Position },

    /// Board dimension the board cannot be built with
    #[error("Invalid board size {size}: {message}")]
    InvalidBoardSize { size: u8, message: String },

    /// Text layout that does not describe a square board
    #[error("Invalid layout: {message}")]
    InvalidLayout { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
