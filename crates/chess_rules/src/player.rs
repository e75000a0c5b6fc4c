//! Per-team piece ownership
//!
//! A [`Player`] owns the alive pieces of one team and answers the aggregate
//! questions the turn loop asks: who attacks the king, which moves are left
//! after safety filtering, whether any move at all remains.

use tracing::debug;

use crate::board::Board;
use crate::piece::Piece;
use crate::safety;
use crate::types::{PieceId, PieceKind, Square, Team};

/// One side of the game and the pieces it still has
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    team: Team,
    active_pieces: Vec<Piece>,
}

impl Player {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            active_pieces: Vec::new(),
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn add_piece(&mut self, piece: Piece) {
        self.active_pieces.push(piece);
    }

    /// Take a piece out of play, returning its record
    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let index = self.active_pieces.iter().position(|p| p.id() == id)?;
        Some(self.active_pieces.remove(index))
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.active_pieces.iter().find(|p| p.id() == id)
    }

    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.active_pieces.iter_mut().find(|p| p.id() == id)
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.active_pieces.iter().find(|p| p.square() == square)
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.active_pieces
    }

    pub fn pieces_of_kind(&self, kind: PieceKind) -> impl Iterator<Item = &Piece> + '_ {
        self.active_pieces.iter().filter(move |p| p.kind() == kind)
    }

    /// Regenerate every piece's candidate list from `board`
    pub fn generate_all_possible_moves(&mut self, board: &Board) {
        for piece in &mut self.active_pieces {
            piece.generate_moves(board);
        }
    }

    /// Ids of pieces whose current move list reaches an opponent `kind`
    pub fn pieces_attacking_kind(&self, kind: PieceKind, board: &Board) -> Vec<PieceId> {
        self.active_pieces
            .iter()
            .filter(|p| p.is_attacking_piece_of_kind(kind, board))
            .map(Piece::id)
            .collect()
    }

    /// Every (piece, destination) pair currently available
    pub fn all_moves(&self) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        self.active_pieces
            .iter()
            .flat_map(|p| p.available_moves().iter().map(move |&to| (p.id(), to)))
    }

    pub fn has_any_move(&self) -> bool {
        self.active_pieces
            .iter()
            .any(|p| !p.available_moves().is_empty())
    }

    /// Drop every cached move that would leave a piece of `kind` attacked
    pub fn remove_moves_enabling_attack_on(
        &mut self,
        kind: PieceKind,
        opponent: &Player,
        board: &Board,
    ) {
        let safe: Vec<Vec<Square>> = self
            .active_pieces
            .iter()
            .map(|piece| safety::safe_moves(board, piece, self, opponent, kind))
            .collect();

        let mut removed = 0;
        for (piece, keep) in self.active_pieces.iter_mut().zip(safe) {
            let before = piece.available_moves().len();
            piece.retain_moves(|square| keep.contains(&square));
            removed += before - piece.available_moves().len();
        }

        if removed > 0 {
            debug!(
                "[RULES] {}: {} move(s) removed to keep the {} safe",
                self.team, removed, kind
            );
        }
    }

    /// Same as [`Self::remove_moves_enabling_attack_on`] for a single piece
    pub fn remove_moves_enabling_attack_on_piece(
        &mut self,
        id: PieceId,
        kind: PieceKind,
        opponent: &Player,
        board: &Board,
    ) {
        let Some(piece) = self.piece(id) else {
            return;
        };
        let keep = safety::safe_moves(board, piece, self, opponent, kind);
        if let Some(piece) = self.piece_mut(id) {
            piece.retain_moves(|square| keep.contains(&square));
        }
    }

    /// Whether any move exists that leaves every piece of `kind` unattacked
    ///
    /// Computes fresh candidates on a throwaway copy, so the cached move lists
    /// of this player are left as they are.
    pub fn can_block_check_against(&self, kind: PieceKind, opponent: &Player, board: &Board) -> bool {
        let mut scratch = self.clone();
        scratch.generate_all_possible_moves(board);
        scratch.remove_moves_enabling_attack_on(kind, opponent, board);
        scratch.has_any_move()
    }

    /// Forget every piece; the controller recreates them from the layout
    pub fn on_game_restarted(&mut self) {
        debug!(
            "[RULES] {}: clearing {} piece(s) for restart",
            self.team,
            self.active_pieces.len()
        );
        self.active_pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, player: &mut Player, id: u32, kind: PieceKind, at: (i32, i32)) {
        let piece = Piece::new(PieceId(id), kind, player.team(), Square::from(at));
        board.place_or_clear(piece.square(), Some(piece.piece_ref())).unwrap();
        player.add_piece(piece);
    }

    #[test]
    fn test_add_and_remove_piece() {
        let mut board = Board::new();
        let mut white = Player::new(Team::White);
        place(&mut board, &mut white, 1, PieceKind::Pawn, (0, 1));
        place(&mut board, &mut white, 2, PieceKind::King, (4, 0));

        assert_eq!(white.pieces().len(), 2);
        assert_eq!(white.piece_at(Square::new(4, 0)).map(Piece::id), Some(PieceId(2)));

        let removed = white.remove_piece(PieceId(1)).unwrap();
        assert_eq!(removed.kind(), PieceKind::Pawn);
        assert!(white.piece(PieceId(1)).is_none());
        assert!(white.remove_piece(PieceId(1)).is_none());
    }

    #[test]
    fn test_pieces_attacking_kind() {
        let mut board = Board::new();
        let mut white = Player::new(Team::White);
        let mut black = Player::new(Team::Black);
        place(&mut board, &mut white, 1, PieceKind::Rook, (4, 3));
        place(&mut board, &mut white, 2, PieceKind::Knight, (0, 0));
        place(&mut board, &mut black, 3, PieceKind::King, (4, 7));

        white.generate_all_possible_moves(&board);

        assert_eq!(white.pieces_attacking_kind(PieceKind::King, &board), vec![PieceId(1)]);
    }

    #[test]
    fn test_remove_moves_enabling_attack_on_king() {
        let mut board = Board::new();
        let mut white = Player::new(Team::White);
        let mut black = Player::new(Team::Black);
        place(&mut board, &mut white, 1, PieceKind::King, (4, 0));
        place(&mut board, &mut white, 2, PieceKind::Knight, (4, 1));
        place(&mut board, &mut white, 3, PieceKind::Pawn, (0, 1));
        place(&mut board, &mut black, 4, PieceKind::Queen, (4, 6));
        white.generate_all_possible_moves(&board);
        black.generate_all_possible_moves(&board);

        white.remove_moves_enabling_attack_on(PieceKind::King, &black, &board);

        // Knight is pinned; the far pawn is unaffected
        assert!(white.piece(PieceId(2)).unwrap().available_moves().is_empty());
        assert_eq!(white.piece(PieceId(3)).unwrap().available_moves().len(), 2);
        assert!(white.has_any_move());
    }

    #[test]
    fn test_can_block_check_against() {
        let mut board = Board::new();
        let mut white = Player::new(Team::White);
        let mut black = Player::new(Team::Black);
        // Back-rank mate: king boxed in by its own pawns
        place(&mut board, &mut white, 1, PieceKind::King, (6, 0));
        place(&mut board, &mut white, 2, PieceKind::Pawn, (5, 1));
        place(&mut board, &mut white, 3, PieceKind::Pawn, (6, 1));
        place(&mut board, &mut white, 4, PieceKind::Pawn, (7, 1));
        place(&mut board, &mut black, 5, PieceKind::Rook, (0, 0));

        assert!(!white.can_block_check_against(PieceKind::King, &black, &board));

        place(&mut board, &mut white, 6, PieceKind::Rook, (3, 4));
        assert!(white.can_block_check_against(PieceKind::King, &black, &board));
        // Cached lists are untouched by the query
        assert!(white.piece(PieceId(6)).unwrap().available_moves().is_empty());
    }

    #[test]
    fn test_on_game_restarted_clears_pieces() {
        let mut board = Board::new();
        let mut black = Player::new(Team::Black);
        place(&mut board, &mut black, 1, PieceKind::Queen, (3, 7));

        black.on_game_restarted();

        assert!(black.pieces().is_empty());
        assert_eq!(black.team(), Team::Black);
    }
}
