//! Bishop move generation
//!
//! Bishops slide along the four diagonals until blocked.

use crate::board::Board;
use crate::move_gen::sliding::{generate_sliding_moves, BISHOP_DIRS};
use crate::move_gen::MoveOrigin;
use crate::types::Square;

/// Generate bishop moves from the origin square
pub fn generate_bishop_moves(board: &Board, origin: &MoveOrigin, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, origin, &BISHOP_DIRS, moves);
}
