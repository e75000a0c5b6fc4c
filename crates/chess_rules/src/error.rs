//! Error types for the rules engine
//!
//! None of these are used for ordinary control flow. Reads off the board
//! return `None`, and the selection path ignores illegal targets silently;
//! the variants exist for callers that want the reason spelled out.

use thiserror::Error;

use crate::types::Square;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinate outside the 8x8 grid
    #[error("Square ({file}, {rank}) is outside the board")]
    OutOfBounds { file: i32, rank: i32 },

    /// Target square is not in the piece's current legal-move list
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// Layout or promotion names a piece kind without a registered generator
    #[error("Unknown piece kind: {name:?}")]
    UnknownPieceKind { name: String },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
