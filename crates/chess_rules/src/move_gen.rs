//! Candidate move generation
//!
//! One pure generator per piece kind, each in its own file, dispatched through
//! [`GENERATORS`], a table keyed by [`PieceKind`]. Generators read the board
//! and never write it, so calling one twice on the same board gives the same
//! ordered list.
//!
//! Candidates follow the raw movement rules only. Whether a move would leave
//! the own king attacked is decided afterwards by [`crate::safety`].

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


use crate::board::Board;
use crate::piece::Piece;
use crate::types::{PieceKind, Square, Team};

/// The moving piece as seen by a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOrigin {
    pub from: Square,
    pub team: Team,
    pub has_moved: bool,
}

impl MoveOrigin {
    pub fn of(piece: &Piece) -> Self {
        Self {
            from: piece.square(),
            team: piece.team(),
            has_moved: piece.has_moved(),
        }
    }
}

/// Signature shared by every per-kind generator
pub type MoveGenerator = fn(&Board, &MoveOrigin, &mut Vec<Square>);

/// Generator registry, indexed by [`PieceKind::index`]
pub const GENERATORS: [(PieceKind, MoveGenerator); 6] = [
    (PieceKind::Pawn, pawn::generate_pawn_moves),
    (PieceKind::Knight, knight::generate_knight_moves),
    (PieceKind::Bishop, bishop::generate_bishop_moves),
    (PieceKind::Rook, rook::generate_rook_moves),
    (PieceKind::Queen, queen::generate_queen_moves),
    (PieceKind::King, king::generate_king_moves),
];

/// Look up the generator registered for `kind`
pub fn generator_for(kind: PieceKind) -> Option<MoveGenerator> {
    GENERATORS
        .get(kind.index())
        .filter(|(registered, _)| *registered == kind)
        .map(|(_, generator)| *generator)
}

/// Candidate destinations of `piece` on `board`, in generation order
pub fn candidate_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();
    if let Some(generate) = generator_for(piece.kind()) {
        generate(board, &MoveOrigin::of(piece), &mut moves);
    }
    moves
}

/// Whether `square` is empty or holds an opponent of `team`
///
/// Off-board squares are rejected here; everything else about the target is
/// up to the individual generator.
#[inline]
pub(crate) fn is_free_or_enemy(board: &Board, square: Square, team: Team) -> bool {
    square.is_on_board()
        && board
            .occupant_at(square)
            .map_or(true, |occupant| occupant.team != team)
}
