//! Board-point to square translation
//!
//! Pointer input arrives as a point on the board plane, already in the board's
//! local frame with the origin at the board centre. The geometry divides by the
//! square size and shifts by half the board, so the centre sits on the corner
//! shared by squares (3, 3) and (4, 4).

use chess_rules::{Square, BOARD_SIZE};

/// A point on the board plane in board-local units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPoint {
    pub x: f32,
    pub z: f32,
}

impl BoardPoint {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

/// Size of one board square in local units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub square_size: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self { square_size: 1.0 }
    }
}

impl BoardGeometry {
    pub fn new(square_size: f32) -> Self {
        Self { square_size }
    }

    /// Square under `point`; may be off the board
    ///
    /// Non-finite input maps to a square far off the board rather than
    /// wrapping onto it.
    pub fn square_at(&self, point: BoardPoint) -> Square {
        let half = (BOARD_SIZE / 2) as i32;
        Square::new(
            Self::cell(point.x, self.square_size).saturating_add(half),
            Self::cell(point.z, self.square_size).saturating_add(half),
        )
    }

    /// Centre of `square` in board-local units
    pub fn point_of(&self, square: Square) -> BoardPoint {
        let half = (BOARD_SIZE / 2) as f32;
        BoardPoint {
            x: (square.file as f32 - half + 0.5) * self.square_size,
            z: (square.rank as f32 - half + 0.5) * self.square_size,
        }
    }

    fn cell(coord: f32, square_size: f32) -> i32 {
        let cell = (coord / square_size).floor();
        if cell.is_nan() {
            i32::MIN
        } else {
            // `as` saturates on overflow
            cell as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_corners() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.square_at(BoardPoint::new(0.1, 0.1)), Square::new(4, 4));
        assert_eq!(geometry.square_at(BoardPoint::new(-0.1, -0.1)), Square::new(3, 3));
        assert_eq!(geometry.square_at(BoardPoint::new(-3.9, -3.9)), Square::new(0, 0));
        assert_eq!(geometry.square_at(BoardPoint::new(3.9, 3.9)), Square::new(7, 7));
    }

    #[test]
    fn test_scaled_squares() {
        let geometry = BoardGeometry::new(2.5);
        assert_eq!(geometry.square_at(BoardPoint::new(-10.0, 9.9)), Square::new(0, 7));
        assert_eq!(geometry.square_at(BoardPoint::new(2.4, -2.6)), Square::new(4, 2));
    }

    #[test]
    fn test_off_board_and_non_finite_points() {
        let geometry = BoardGeometry::default();
        assert!(!geometry.square_at(BoardPoint::new(4.0, 0.0)).is_on_board());
        assert!(!geometry.square_at(BoardPoint::new(-4.1, 0.0)).is_on_board());
        assert!(!geometry.square_at(BoardPoint::new(f32::NAN, 0.0)).is_on_board());
        assert!(!geometry.square_at(BoardPoint::new(f32::INFINITY, 0.0)).is_on_board());
    }

    #[test]
    fn test_point_of_round_trips_to_square() {
        let geometry = BoardGeometry::new(1.5);
        let square = Square::new(2, 5);
        assert_eq!(geometry.square_at(geometry.point_of(square)), square);
    }
}
