//! Board grid
//!
//! Fixed 8x8 occupancy grid holding non-owning [`PieceRef`]s. Pieces are owned
//! by their [`crate::Player`]; the grid only records who stands where.
//!
//! Every index into the grid goes through [`Board::cell_index`], so an
//! off-board square can never reach the array.

use crate::error::{RulesError, RulesResult};
use crate::types::{PieceId, PieceRef, Square};

/// Number of files and ranks
pub const BOARD_SIZE: usize = 8;

/// The 8x8 occupancy grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<PieceRef>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid indices for an on-board square
    fn cell_index(square: Square) -> Option<(usize, usize)> {
        square
            .is_on_board()
            .then_some((square.file as usize, square.rank as usize))
    }

    fn out_of_bounds(square: Square) -> RulesError {
        RulesError::OutOfBounds {
            file: square.file,
            rank: square.rank,
        }
    }

    /// Piece standing on `square`
    ///
    /// Off-board squares read as empty, which lets move generators probe
    /// neighbours without bounds checks of their own.
    pub fn occupant_at(&self, square: Square) -> Option<PieceRef> {
        Self::cell_index(square).and_then(|(file, rank)| self.grid[file][rank])
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant_at(square).is_none()
    }

    /// Set or clear one cell
    ///
    /// # Errors
    ///
    /// [`RulesError::OutOfBounds`] if `square` is off the board; the grid is
    /// left untouched.
    pub fn place_or_clear(&mut self, square: Square, piece: Option<PieceRef>) -> RulesResult<()> {
        let (file, rank) = Self::cell_index(square).ok_or_else(|| Self::out_of_bounds(square))?;
        self.grid[file][rank] = piece;
        Ok(())
    }

    /// Update both cells of a move in one step
    ///
    /// `old` receives `old_piece` (normally `None`) and `new` receives
    /// `new_piece`. Both squares are validated before either cell changes.
    ///
    /// # Errors
    ///
    /// [`RulesError::OutOfBounds`] if either square is off the board.
    pub fn move_occupant(
        &mut self,
        new: Square,
        old: Square,
        new_piece: Option<PieceRef>,
        old_piece: Option<PieceRef>,
    ) -> RulesResult<()> {
        let (new_file, new_rank) = Self::cell_index(new).ok_or_else(|| Self::out_of_bounds(new))?;
        let (old_file, old_rank) = Self::cell_index(old).ok_or_else(|| Self::out_of_bounds(old))?;
        self.grid[old_file][old_rank] = old_piece;
        self.grid[new_file][new_rank] = new_piece;
        Ok(())
    }

    /// Clear the entire grid
    pub fn reset(&mut self) {
        self.grid = Default::default();
    }

    /// Whether the piece with `id` stands anywhere on the grid
    pub fn has_piece(&self, id: PieceId) -> bool {
        self.occupied().any(|(_, piece)| piece.id == id)
    }

    /// Square currently holding the piece with `id`
    pub fn square_of(&self, id: PieceId) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.id == id)
            .map(|(square, _)| square)
    }

    /// All occupied cells, file-major
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceRef)> + '_ {
        self.grid.iter().enumerate().flat_map(|(file, column)| {
            column.iter().enumerate().filter_map(move |(rank, cell)| {
                cell.map(|piece| (Square::new(file as i32, rank as i32), piece))
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }
}
