//! Core value types shared by every part of the rules engine
//!
//! Squares are plain integer pairs so that neighbour arithmetic and imprecise
//! external input can produce off-board values without overflow; the board
//! treats every off-board square as empty.

use std::fmt;
use std::str::FromStr;

use crate::board::BOARD_SIZE;
use crate::error::RulesError;

/// Board coordinate as (file, rank)
///
/// File 0 is the `a` file and rank 0 is White's back rank. Only
/// `0..8 x 0..8` is on the board, but any pair is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub file: i32,
    pub rank: i32,
}

impl Square {
    pub const fn new(file: i32, rank: i32) -> Self {
        Square { file, rank }
    }

    /// Whether the square lies inside the 8x8 grid
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE as i32).contains(&self.file) && (0..BOARD_SIZE as i32).contains(&self.rank)
    }

    /// The square `df` files and `dr` ranks away, on or off the board
    pub fn offset(self, df: i32, dr: i32) -> Self {
        Square {
            file: self.file.saturating_add(df),
            rank: self.rank.saturating_add(dr),
        }
    }

    /// Parse algebraic notation (`"e4"`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::Square;
    /// assert_eq!(Square::from_algebraic("e4"), Some(Square::new(4, 3)));
    /// assert_eq!(Square::from_algebraic("z9"), None);
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file_char) {
            return None;
        }
        let rank = rank_char.to_digit(10)? as i32;
        if !(1..=8).contains(&rank) {
            return None;
        }
        Some(Square::new(file_char as i32 - 'a' as i32, rank - 1))
    }

    /// Algebraic notation, or `None` for off-board squares
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        Some(format!(
            "{}{}",
            (b'a' + self.file as u8) as char,
            self.rank + 1
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => f.write_str(&name),
            None => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((file, rank): (i32, i32)) -> Self {
        Square::new(file, rank)
    }
}

/// Side a piece plays for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank delta of a pawn step
    pub fn forward(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank on which this team's pawns promote
    pub fn promotion_rank(self) -> i32 {
        match self {
            Team::White => BOARD_SIZE as i32 - 1,
            Team::Black => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::White => "White",
            Team::Black => "Black",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind, independent of team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Position of this kind in [`PieceKind::ALL`] and the generator table
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Upper-case letter for White, lower-case for Black
    pub fn to_char(self, team: Team) -> char {
        let c = match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match team {
            Team::White => c,
            Team::Black => c.to_ascii_lowercase(),
        }
    }

    /// Sliding pieces move any distance along a ray until blocked
    pub fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = RulesError;

    /// Case-insensitive kind name (`"queen"`, `"Knight"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RulesError::UnknownPieceKind {
                name: s.to_string(),
            })
    }
}

/// Stable identifier correlating a piece record with its presentation object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Non-owning reference to a piece, as stored in board cells
///
/// A piece never changes kind or team; promotion replaces the pawn with a new
/// piece under a new id, so a `PieceRef` stays accurate for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceRef {
    pub id: PieceId,
    pub kind: PieceKind,
    pub team: Team,
}

impl PieceRef {
    pub fn is_from_same_team(&self, other: &PieceRef) -> bool {
        self.team == other.team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(-1, 0).is_on_board());
        assert!(!Square::new(0, 8).is_on_board());
        assert!(!Square::new(8, 3).is_on_board());
    }

    #[test]
    fn test_square_algebraic() {
        let square = Square::from_algebraic("e4").unwrap();
        assert_eq!(square, Square::new(4, 3));
        assert_eq!(square.to_algebraic().as_deref(), Some("e4"));
        assert_eq!(Square::from_algebraic("a1"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("a10"), None);
        assert_eq!(Square::new(-1, 2).to_algebraic(), None);
    }

    #[test]
    fn test_square_offset_saturates() {
        let far = Square::new(i32::MAX, 0).offset(1, 0);
        assert_eq!(far.file, i32::MAX);
        assert!(!far.is_on_board());
    }

    #[test]
    fn test_team_helpers() {
        assert_eq!(Team::White.opponent(), Team::Black);
        assert_eq!(Team::Black.opponent(), Team::White);
        assert_eq!(Team::White.forward(), 1);
        assert_eq!(Team::Black.forward(), -1);
        assert_eq!(Team::White.promotion_rank(), 7);
        assert_eq!(Team::Black.promotion_rank(), 0);
    }

    #[test]
    fn test_piece_kind_from_str() {
        assert_eq!("Queen".parse::<PieceKind>(), Ok(PieceKind::Queen));
        assert_eq!("knight".parse::<PieceKind>(), Ok(PieceKind::Knight));
        assert_eq!(
            "Archbishop".parse::<PieceKind>(),
            Err(RulesError::UnknownPieceKind {
                name: "Archbishop".to_string()
            })
        );
    }

    #[test]
    fn test_piece_kind_index_matches_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
