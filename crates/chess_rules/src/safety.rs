//! King safety filtering
//!
//! A candidate move is kept only if, after playing it on a scratch copy of the
//! board, no surviving opponent piece can reach a square holding one of the
//! mover's protected pieces (normally the king). Opponent attacks are measured
//! with the same raw generators used for candidates, so pawns threaten their
//! diagonals only when something stands there, and the protected piece is on
//! the board in the scratch position whenever it matters.
//!
//! The live board is never touched: every simulation runs on a clone.

use tracing::trace;

use crate::board::Board;
use crate::move_gen::candidate_moves;
use crate::piece::Piece;
use crate::player::Player;
use crate::types::{PieceKind, Square};

/// Whether moving `mover` to `to` would leave a piece of `protected` attacked
///
/// `own` must be the player owning `mover`. A player without any piece of
/// `protected` kind can never be exposed.
///
/// # Examples
///
/// ```rust,ignore
/// // Pinned bishop: stepping off the file uncovers the king
/// assert!(would_expose(&board, &bishop, Square::new(5, 2), &white, &black, PieceKind::King));
/// ```
pub fn would_expose(
    board: &Board,
    mover: &Piece,
    to: Square,
    own: &Player,
    opponent: &Player,
    protected: PieceKind,
) -> bool {
    let mut scratch = board.clone();
    if scratch
        .move_occupant(to, mover.square(), Some(mover.piece_ref()), None)
        .is_err()
    {
        // Unplayable destination; never offer it
        return true;
    }

    let targets: Vec<Square> = own
        .pieces_of_kind(protected)
        .map(|piece| {
            if piece.id() == mover.id() {
                to
            } else {
                piece.square()
            }
        })
        .collect();
    if targets.is_empty() {
        return false;
    }

    let exposed = targets
        .iter()
        .any(|&target| is_attacked_by(&scratch, target, opponent));
    if exposed {
        trace!(
            "[SAFETY] {} {} -> {} rejected: {} would be attacked",
            mover.kind(),
            mover.square(),
            to,
            protected
        );
    }
    exposed
}

/// Whether any of `attacker`'s pieces still on `board` can reach `square`
///
/// Pieces whose square no longer holds them (captured during a simulation)
/// are skipped.
pub fn is_attacked_by(board: &Board, square: Square, attacker: &Player) -> bool {
    attacker
        .pieces()
        .iter()
        .filter(|piece| board.occupant_at(piece.square()).map(|o| o.id) == Some(piece.id()))
        .any(|piece| candidate_moves(piece, board).contains(&square))
}

/// The subset of `mover`'s cached moves that keep `protected` safe
///
/// Order is preserved.
pub fn safe_moves(
    board: &Board,
    mover: &Piece,
    own: &Player,
    opponent: &Player,
    protected: PieceKind,
) -> Vec<Square> {
    mover
        .available_moves()
        .iter()
        .copied()
        .filter(|&to| !would_expose(board, mover, to, own, opponent, protected))
        .collect()
}
