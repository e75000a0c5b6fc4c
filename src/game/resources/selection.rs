//! Selection resource for tracking the selected piece

use chess_rules::{PieceId, Square};

/// Currently selected piece, if any
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_piece: Option<PieceId>,
    pub selected_square: Option<Square>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, piece: PieceId, square: Square, moves: Vec<Square>) {
        self.selected_piece = Some(piece);
        self.selected_square = Some(square);
        self.possible_moves = moves;
    }

    pub fn clear(&mut self) {
        self.selected_piece = None;
        self.selected_square = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_piece.is_some()
    }

    pub fn is_selected_piece(&self, id: PieceId) -> bool {
        self.selected_piece == Some(id)
    }

    pub fn allows(&self, square: Square) -> bool {
        self.possible_moves.contains(&square)
    }
}
