//! Rook move generation
//!
//! Rooks slide along files and ranks until blocked.

use crate::board::Board;
use crate::move_gen::sliding::{generate_sliding_moves, ROOK_DIRS};
use crate::move_gen::MoveOrigin;
use crate::types::Square;

/// Generate rook moves from the origin square
pub fn generate_rook_moves(board: &Board, origin: &MoveOrigin, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, origin, &ROOK_DIRS, moves);
}
