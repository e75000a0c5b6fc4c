//! Game session lifecycle and result
//!
//! ```text
//! Initializing → InProgress → Finished(outcome)
//!       ↑                          │
//!       └──────── restart ─────────┘
//! ```
//!
//! Restart is allowed from any state and always passes through
//! `Initializing` again.

use std::fmt;

use chess_rules::Team;
use tracing::{debug, error};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The loser's king is attacked and nothing can save it
    Checkmate { winner: Team },
    /// The side to move is not in check but has no legal move
    Stalemate,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Team> {
        match self {
            GameOutcome::Checkmate { winner } => Some(*winner),
            GameOutcome::Stalemate => None,
        }
    }

    /// Result line for display
    pub fn message(&self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
            GameOutcome::Stalemate => "Stalemate - Draw!".to_string(),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Board and players are being built from the layout
    #[default]
    Initializing,
    /// Exactly one team is active and input is accepted
    InProgress,
    /// Terminal until restart
    Finished(GameOutcome),
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameState::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Move to `next`, logging transitions the lifecycle does not allow
    ///
    /// Invalid transitions are still applied so a logic error never leaves the
    /// session stuck; they show up as errors in the log.
    pub fn transition_to(&mut self, next: GameState) {
        let valid = matches!(
            (*self, next),
            (_, GameState::Initializing)
                | (GameState::Initializing, GameState::InProgress)
                | (GameState::InProgress, GameState::Finished(_))
        );

        if valid {
            debug!("[GAME_STATE] {:?} -> {:?}", self, next);
        } else {
            error!(
                "[GAME_STATE] Invalid game state transition: {:?} -> {:?}",
                self, next
            );
        }

        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner_and_message() {
        let mate = GameOutcome::Checkmate {
            winner: Team::Black,
        };
        assert_eq!(mate.winner(), Some(Team::Black));
        assert_eq!(mate.message(), "Checkmate! Black wins!");
        assert_eq!(GameOutcome::Stalemate.winner(), None);
    }

    #[test]
    fn test_valid_transitions() {
        let mut state = GameState::default();
        assert_eq!(state, GameState::Initializing);

        state.transition_to(GameState::InProgress);
        assert!(state.is_in_progress());

        state.transition_to(GameState::Finished(GameOutcome::Stalemate));
        assert_eq!(state.outcome(), Some(GameOutcome::Stalemate));

        state.transition_to(GameState::Initializing);
        assert_eq!(state, GameState::Initializing);
    }
}
