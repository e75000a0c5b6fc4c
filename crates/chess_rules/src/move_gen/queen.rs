//! Queen move generation
//!
//! Queens combine rook and bishop movement (orthogonal + diagonal).

use crate::board::Board;
use crate::move_gen::sliding::{generate_sliding_moves, BISHOP_DIRS, ROOK_DIRS};
use crate::move_gen::MoveOrigin;
use crate::types::Square;

/// Generate queen moves from the origin square
///
/// Orthogonal rays come first, then diagonal ones.
pub fn generate_queen_moves(board: &Board, origin: &MoveOrigin, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, origin, &ROOK_DIRS, moves);
    generate_sliding_moves(board, origin, &BISHOP_DIRS, moves);
}
