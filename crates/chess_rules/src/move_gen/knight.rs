//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::Board;
use crate::move_gen::{is_free_or_enemy, MoveOrigin};
use crate::types::Square;

/// The eight L-shaped jumps as (file delta, rank delta)
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generate knight moves from the origin square
///
/// # Arguments
///
/// * `board` - The current board
/// * `origin` - Square and team of the knight
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&board, &origin, &mut moves);
/// // Moves now contains all valid knight moves from b1
/// ```
pub fn generate_knight_moves(board: &Board, origin: &MoveOrigin, moves: &mut Vec<Square>) {
    for (df, dr) in KNIGHT_OFFSETS {
        let target = origin.from.offset(df, dr);
        if is_free_or_enemy(board, target, origin.team) {
            moves.push(target);
        }
    }
}
