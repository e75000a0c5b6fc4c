//! Authoritative piece records
//!
//! A [`Piece`] is data only: id, kind, team, square, moved flag and the move
//! list computed at the last generation pass. Presentation objects correlate
//! with it through [`PieceId`].

use crate::board::Board;
use crate::move_gen;
use crate::types::{PieceId, PieceKind, PieceRef, Square, Team};

/// One piece owned by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    team: Team,
    square: Square,
    has_moved: bool,
    /// Destinations found at the last generation pass. Stale as soon as the
    /// board changes; the controller regenerates every turn.
    available_moves: Vec<Square>,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, team: Team, square: Square) -> Self {
        Self {
            id,
            kind,
            team,
            square,
            has_moved: false,
            available_moves: Vec::new(),
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// The reference stored in board cells for this piece
    pub fn piece_ref(&self) -> PieceRef {
        PieceRef {
            id: self.id,
            kind: self.kind,
            team: self.team,
        }
    }

    pub fn is_from_same_team(&self, other: &PieceRef) -> bool {
        self.team == other.team
    }

    pub fn available_moves(&self) -> &[Square] {
        &self.available_moves
    }

    pub fn can_move_to(&self, square: Square) -> bool {
        self.available_moves.contains(&square)
    }

    /// Recompute the candidate list from the current board
    pub fn generate_moves(&mut self, board: &Board) {
        self.available_moves = move_gen::candidate_moves(self, board);
    }

    /// Keep only the destinations for which `keep` returns true
    pub fn retain_moves(&mut self, mut keep: impl FnMut(Square) -> bool) {
        self.available_moves.retain(|&square| keep(square));
    }

    /// Record a completed move; the cached list is dropped since it is stale
    pub fn move_to(&mut self, square: Square) {
        self.square = square;
        self.has_moved = true;
        self.available_moves.clear();
    }

    /// Whether any current destination holds an opponent piece of `kind`
    pub fn is_attacking_piece_of_kind(&self, kind: PieceKind, board: &Board) -> bool {
        self.available_moves.iter().any(|&square| {
            board
                .occupant_at(square)
                .is_some_and(|target| target.kind == kind && target.team != self.team)
        })
    }
}
