//! The falling piece.

use serde::{Deserialize, Serialize};

use crate::pieces::{get_shape, piece_color, PieceShape};
use crate::types::{Color, Direction, Path, PieceKind, Point, Rotation};

/// A piece: kind, orientation and offset of its pivot on the board.
///
/// Values are immutable in spirit: every operation returns a new piece, and the
/// occupied cells are always recomputed from the three stored fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub translation: Point,
}

impl Tetromino {
    /// Create a new tetromino in its authored orientation at the origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            translation: Point::ZERO,
        }
    }

    /// Cell offsets for the current rotation, already translated
    pub fn cells(&self) -> PieceShape {
        get_shape(self.kind, self.rotation).map(|p| p + self.translation)
    }

    /// Occupied board cells
    pub fn path(&self) -> Path {
        self.cells().into_iter().collect()
    }

    pub fn color(&self) -> Color {
        piece_color(self.kind)
    }

    /// Index of the pivot cell within [`Tetromino::path`]
    pub fn center(&self) -> Option<usize> {
        self.cells().iter().position(|&p| p == self.translation)
    }

    pub fn translate(&self, delta: Point) -> Self {
        Self {
            translation: self.translation + delta,
            ..*self
        }
    }

    /// Quarter turn counter-clockwise
    pub fn turn_left(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }

    /// Quarter turn clockwise
    pub fn turn_right(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    pub fn turn(&self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.turn_left(),
            Direction::Right => self.turn_right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(i32, i32)]) -> Path {
        points.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn s_piece_path_is_authored_shape() {
        assert_eq!(
            Tetromino::new(PieceKind::S).path(),
            path(&[(-1, 0), (0, 0), (0, -1), (1, -1)])
        );
    }

    #[test]
    fn s_piece_turn_left() {
        assert_eq!(
            Tetromino::new(PieceKind::S).turn_left().path(),
            path(&[(0, 1), (0, 0), (-1, 0), (-1, -1)])
        );
    }

    #[test]
    fn translate_keeps_kind_and_rotation() {
        let piece = Tetromino::new(PieceKind::T).turn_right();
        let moved = piece.translate(Point::new(3, 4));
        assert_eq!(moved.kind, PieceKind::T);
        assert_eq!(moved.rotation, Rotation::East);
        assert_eq!(moved.translation, Point::new(3, 4));
        assert_eq!(moved.path(), piece.path().translate(Point::new(3, 4)));
    }

    #[test]
    fn center_points_at_pivot() {
        let piece = Tetromino::new(PieceKind::L).translate(Point::new(5, 5));
        let center = piece.center().unwrap();
        assert_eq!(piece.path().points()[center], Point::new(5, 5));
    }

    #[test]
    fn four_turns_return_home() {
        for kind in PieceKind::ALL {
            let piece = Tetromino::new(kind).translate(Point::new(2, 7));
            let back = piece.turn_right().turn_right().turn_right().turn_right();
            assert_eq!(back, piece);
            assert_eq!(back.path(), piece.path());
        }
    }
}
