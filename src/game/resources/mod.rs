//! State held by the game controller between calls
//!
//! - `game_state` - Session lifecycle and final outcome
//! - `turn` - Active team and move counter
//! - `selection` - Currently selected piece and its legal destinations

pub mod game_state;
pub mod selection;
pub mod turn;

pub use game_state::{GameOutcome, GameState};
pub use selection::Selection;
pub use turn::TurnState;
