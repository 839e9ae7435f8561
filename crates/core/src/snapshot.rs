//! Read-only views of game state for renderers and replay logs.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, PieceKind, Point, Rect, Rotation, Status};
use crate::Tetromino;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    /// Occupied board cells
    pub cells: Vec<Point>,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.translation.x,
            y: value.translation.y,
            cells: value.path().points().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TetrisSnapshot {
    pub width: usize,
    pub height: usize,
    /// Visible rows, top to bottom
    pub board: Vec<Vec<Cell>>,
    pub active: ActiveSnapshot,
    /// Cells of the active piece at its landing position
    pub ghost: Vec<Point>,
    /// Upcoming piece kinds, next first
    pub preview: Vec<PieceKind>,
    pub score: u64,
    pub lines: u64,
    pub status: Status,
}

impl TetrisSnapshot {
    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    /// Body cells, head first
    pub snake: Vec<Point>,
    pub apple: Point,
    pub bounds: Rect,
    pub velocity: Point,
    pub head_offset: (f32, f32),
    pub scale: f32,
    pub score: usize,
    pub crashed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, TetrisGame};

    #[test]
    fn tetris_snapshot_serializes_lowercase_names() {
        let snap = TetrisGame::new(6, 5, Deck::seeded(3)).toggle().snapshot();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["status"], "paused");
        assert_eq!(json["active"]["rotation"], "north");
        assert_eq!(json["board"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["active"]["x"], 3);
    }

    #[test]
    fn active_snapshot_lists_translated_cells() {
        let piece = Tetromino::new(PieceKind::I).translate(Point::new(2, 4));
        let snap = ActiveSnapshot::from(piece);
        assert_eq!((snap.x, snap.y), (2, 4));
        assert_eq!(
            snap.cells,
            vec![Point::new(1, 4), Point::new(2, 4), Point::new(3, 4), Point::new(4, 4)]
        );
    }
}
