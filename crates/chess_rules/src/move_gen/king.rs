//! King move generation
//!
//! The king steps one square in any of the eight directions. Castling is not
//! part of this ruleset.
//!
//! The generator does not check whether the destination is attacked; moves
//! into check are removed by [`crate::safety`] like any other exposing move.

use crate::board::Board;
use crate::move_gen::{is_free_or_enemy, MoveOrigin};
use crate::types::Square;

/// The eight neighbouring squares as (file delta, rank delta)
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generate king moves from the origin square
pub fn generate_king_moves(board: &Board, origin: &MoveOrigin, moves: &mut Vec<Square>) {
    moves.extend(
        KING_OFFSETS
            .iter()
            .map(|&(df, dr)| origin.from.offset(df, dr))
            .filter(|&target| is_free_or_enemy(board, target, origin.team)),
    );
}
