//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - Single push: one square forward onto an empty square
//! - Double push: two squares forward if the pawn has never moved and both
//!   squares are empty
//! - Captures: one square diagonally forward, only onto an opponent piece
//!
//! "Forward" is +1 rank for White and -1 for Black. En passant is not part of
//! this ruleset. Promotion is handled by the game controller once the move is
//! applied.

use crate::board::Board;
use crate::move_gen::MoveOrigin;
use crate::types::Square;

/// Generate pawn moves from the origin square
///
/// # Arguments
///
/// * `board` - The current board
/// * `origin` - Square, team and moved flag of the pawn
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&board, &origin, &mut moves);
/// // An unmoved white pawn on a2 yields a3 and a4 on an empty file
/// ```
pub fn generate_pawn_moves(board: &Board, origin: &MoveOrigin, moves: &mut Vec<Square>) {
    let forward = origin.team.forward();

    let single = origin.from.offset(0, forward);
    if single.is_on_board() && board.is_empty(single) {
        moves.push(single);

        let double = single.offset(0, forward);
        if !origin.has_moved && double.is_on_board() && board.is_empty(double) {
            moves.push(double);
        }
    }

    for df in [-1, 1] {
        let target = origin.from.offset(df, forward);
        if board
            .occupant_at(target)
            .is_some_and(|occupant| occupant.team != origin.team)
        {
            moves.push(target);
        }
    }
}
