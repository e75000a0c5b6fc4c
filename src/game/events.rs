//! Notifications from the game core to its collaborators
//!
//! The controller never talks to rendering, animation or UI directly. Every
//! observable change is pushed as a [`GameEvent`] into an outbox that the
//! presentation layer drains after each call. Pieces are correlated with their
//! visual objects through [`PieceId`].

use chess_rules::{PieceId, PieceRef, Square, Team};

use crate::game::resources::GameOutcome;

/// Why a piece left the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    Captured,
    Promoted,
    Restart,
}

/// How a destination should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Empty square
    Free,
    /// Square holding an opponent piece
    Capture,
}

/// One highlighted destination of the selected piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveMarker {
    pub square: Square,
    pub kind: MarkerKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Initial position is set up and White is to move
    GameStarted,
    PieceCreated {
        piece: PieceRef,
        square: Square,
    },
    PieceRemoved {
        piece: PieceRef,
        square: Square,
        cause: RemovalCause,
    },
    PieceMoved {
        piece: PieceRef,
        from: Square,
        to: Square,
        captured: Option<PieceRef>,
    },
    /// `pawn` was replaced by `promoted` on `square`
    PiecePromoted {
        pawn: PieceRef,
        promoted: PieceRef,
        square: Square,
    },
    /// Show markers for the selected piece's legal destinations
    SelectionShown {
        piece: PieceRef,
        markers: Vec<MoveMarker>,
    },
    /// Remove every marker
    SelectionCleared,
    TurnChanged {
        active: Team,
    },
    /// `team`'s king is attacked but the game goes on
    KingInCheck {
        team: Team,
    },
    GameFinished {
        outcome: GameOutcome,
    },
    GameRestarted,
}
