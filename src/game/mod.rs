//! Chess game module - turn state machine on top of the rules engine
//!
//! Drives `chess_rules` through a full game: builds the starting position from
//! a layout, turns clicks into selections and moves, detects check, checkmate
//! and stalemate, and reports every change as an event for the presentation
//! layer.
//!
//! # Module Organization
//!
//! - `controller` - [`ChessGameController`], the only owner of board and players
//! - `resources` - Session state, turn tracking and the current selection
//! - `events` - [`GameEvent`] notifications drained by collaborators
//! - `layout` - Starting positions, built-in or loaded from JSON
//! - `input` - Board-plane points to squares
//! - `error` - [`GameError`] and the [`GameResult`] alias
//!
//! # Turn Flow
//!
//! 1. A click selects an own piece; its moves are filtered for king safety and
//!    shown as markers
//! 2. A click on a marker applies the move (capture, promotion)
//! 3. Both sides regenerate; the mover checks the defender's king
//! 4. The game finishes or the turn passes to the other team

pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod layout;
pub mod resources;


pub use controller::ChessGameController;
pub use error::{GameError, GameResult};
pub use events::{GameEvent, MarkerKind, MoveMarker, RemovalCause};
pub use input::{BoardGeometry, BoardPoint};
pub use layout::{BoardLayout, Placement, SquareSetup};
pub use resources::{GameOutcome, GameState, Selection, TurnState};
