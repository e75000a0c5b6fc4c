//! Error types for game module
//!
//! Provides custom error types for board layout loading, promotion
//! configuration and the explicit move API.

use chess_rules::{PieceKind, RulesError};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Rejected by the rules engine (off-board square, illegal move, unknown kind)
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Layout could not be turned into a starting position
    #[error("Invalid board layout: {message}")]
    InvalidLayout { message: String },

    /// Layout file could not be read
    #[error("Layout I/O error: {0}")]
    LayoutIo(#[from] std::io::Error),

    /// Layout file is not valid layout JSON
    #[error("Layout parse error: {0}")]
    LayoutParse(#[from] serde_json::Error),

    /// Move requested while no game is running
    #[error("No game in progress")]
    GameNotInProgress,

    /// Pawns can only promote to Knight, Bishop, Rook or Queen
    #[error("Cannot promote to {kind}")]
    InvalidPromotion { kind: PieceKind },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
