//! Turn tracking
//!
//! Records whose turn it is and the full-move number. White moves first and
//! the move number increments after each Black move, as in standard notation.

use chess_rules::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// Whose turn is it?
    pub active: Team,

    /// Move number (increments after both players move)
    pub move_number: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            active: Team::White,
            move_number: 1,
        }
    }
}

impl TurnState {
    /// Hand the turn to the other team
    pub fn switch_turn(&mut self) {
        self.active = match self.active {
            Team::White => Team::Black,
            Team::Black => {
                self.move_number += 1;
                Team::White
            }
        };
    }

    pub fn is_active(&self, team: Team) -> bool {
        self.active == team
    }
}
