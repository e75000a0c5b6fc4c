//! Starting position configuration
//!
//! A [`BoardLayout`] is an ordered list of `(square, kind, team)` entries
//! consumed once per game start. The built-in [`BoardLayout::standard`] gives
//! the usual 32-piece setup; custom layouts load from JSON:
//!
//! ```json
//! { "squares": [ { "position": [4, 0], "piece": "King", "team": "White" } ] }
//! ```
//!
//! Positions are zero-based `[file, rank]`. Piece names go through the
//! [`PieceKind`] registry and an unknown name is a load-time error, never a
//! silently skipped entry.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chess_rules::{PieceKind, RulesError, Square, Team};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game::error::{GameError, GameResult};

/// One configured piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareSetup {
    pub position: [i32; 2],
    /// Kind name as accepted by `PieceKind::from_str`
    pub piece: String,
    pub team: Team,
}

/// A resolved layout entry, ready for piece creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub kind: PieceKind,
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub squares: Vec<SquareSetup>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl BoardLayout {
    /// Standard chess starting position, White on ranks 0 and 1
    ///
    /// Entries are ordered White back rank, White pawns, Black pawns, Black
    /// back rank, each from file 0 to 7.
    pub fn standard() -> Self {
        let mut squares = Vec::with_capacity(32);
        let mut push = |file: usize, rank: i32, kind: PieceKind, team: Team| {
            squares.push(SquareSetup {
                position: [file as i32, rank],
                piece: kind.name().to_string(),
                team,
            });
        };

        for (file, kind) in BACK_RANK.iter().enumerate() {
            push(file, 0, *kind, Team::White);
        }
        for file in 0..8 {
            push(file, 1, PieceKind::Pawn, Team::White);
        }
        for file in 0..8 {
            push(file, 6, PieceKind::Pawn, Team::Black);
        }
        for (file, kind) in BACK_RANK.iter().enumerate() {
            push(file, 7, *kind, Team::Black);
        }

        Self { squares }
    }

    /// Build a layout from resolved placements
    pub fn from_placements(placements: &[Placement]) -> Self {
        Self {
            squares: placements
                .iter()
                .map(|p| SquareSetup {
                    position: [p.square.file, p.square.rank],
                    piece: p.kind.name().to_string(),
                    team: p.team,
                })
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a layout file; the result is validated with [`Self::resolve`]
    pub fn load(path: &Path) -> GameResult<Self> {
        let contents = fs::read_to_string(path)?;
        let layout = Self::from_json_str(&contents)?;
        layout.resolve()?;
        info!(
            "[LAYOUT] Loaded {} piece(s) from {:?}",
            layout.squares.len(),
            path
        );
        Ok(layout)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Validate every entry and return placements in layout order
    ///
    /// # Errors
    ///
    /// - [`RulesError::UnknownPieceKind`] for a name with no generator
    /// - [`RulesError::OutOfBounds`] for a square off the board
    /// - [`GameError::InvalidLayout`] when two entries share a square
    pub fn resolve(&self) -> GameResult<Vec<Placement>> {
        let mut seen = HashSet::with_capacity(self.squares.len());
        let mut placements = Vec::with_capacity(self.squares.len());

        for setup in &self.squares {
            let kind: PieceKind = setup.piece.parse()?;
            let square = Square::new(setup.position[0], setup.position[1]);
            if !square.is_on_board() {
                return Err(RulesError::OutOfBounds {
                    file: square.file,
                    rank: square.rank,
                }
                .into());
            }
            if !seen.insert(square) {
                return Err(GameError::InvalidLayout {
                    message: format!("more than one piece on {square}"),
                });
            }
            placements.push(Placement {
                square,
                kind,
                team: setup.team,
            });
        }

        Ok(placements)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}
