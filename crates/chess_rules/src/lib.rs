//! Chess rules engine for the 3D chess game
//!
//! Pure game logic with no rendering, timing or I/O. The game crate drives it
//! turn by turn and turns its results into presentation events.
//!
//! ## Module Organization
//!
//! - `types` - Squares, teams, piece kinds and the non-owning [`PieceRef`]
//! - `board` - The 8x8 occupancy grid
//! - `piece` - Authoritative piece records with their cached move lists
//! - `move_gen` - One pure generator per piece kind, dispatched by table
//! - `safety` - Removes candidate moves that would expose the own king
//! - `player` - One team's alive pieces and the aggregate queries over them
//! - `error` - [`RulesError`] and the [`RulesResult`] alias

pub mod board;
pub mod error;
pub mod move_gen;
pub mod piece;
pub mod player;
pub mod safety;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use error::{RulesError, RulesResult};
pub use piece::Piece;
pub use player::Player;
pub use types::{PieceId, PieceKind, PieceRef, Square, Team};
