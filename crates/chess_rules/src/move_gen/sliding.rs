//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector the walk steps one square at a time and:
//! 1. Stops at the board edge
//! 2. Stops before a square holding an own piece
//! 3. Includes a square holding an opponent piece (capture), then stops
//!
//! Every square strictly between the origin and a returned destination is
//! therefore empty: sliding pieces never jump.

use crate::board::Board;
use crate::move_gen::MoveOrigin;
use crate::types::Square;

/// Orthogonal directions as (file delta, rank delta)
pub const ROOK_DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal directions as (file delta, rank delta)
pub const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Walk every direction in `dirs` from the origin, appending reachable squares
///
/// # Examples
///
/// ```rust
/// use chess_rules::move_gen::sliding::{generate_sliding_moves, ROOK_DIRS};
/// use chess_rules::move_gen::MoveOrigin;
/// use chess_rules::{Board, Square, Team};
///
/// let board = Board::new();
/// let origin = MoveOrigin { from: Square::new(0, 0), team: Team::White, has_moved: false };
/// let mut moves = Vec::new();
/// generate_sliding_moves(&board, &origin, &ROOK_DIRS, &mut moves);
/// assert_eq!(moves.len(), 14);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    origin: &MoveOrigin,
    dirs: &[(i32, i32)],
    moves: &mut Vec<Square>,
) {
    for &(df, dr) in dirs {
        let mut current = origin.from.offset(df, dr);

        while current.is_on_board() {
            match board.occupant_at(current) {
                None => moves.push(current),
                Some(occupant) => {
                    if occupant.team != origin.team {
                        moves.push(current);
                    }
                    break;
                }
            }
            current = current.offset(df, dr);
        }
    }
}
