//! Core types module - shared data structures and constants
//!
//! This crate defines the value types used throughout the workspace.
//! All types are plain data with no game rules attached, so they can be
//! shared between the game cores, the event pump and the renderers.
//!
//! # Board Dimensions
//!
//! The Tetris playfield defaults to:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 21 rows (indexed 0-20), plus one sentinel floor row at y = 21
//! - **Spawn column**: `width / 2`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the event pump (~60 FPS) |
//! | `GRAVITY_TICKS` | 60 | Tetris falls one row every 60 frames |
//! | `SNAKE_UPDATE_RATE` | 6 | Snake advances one cell every 6 frames |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Direction::from_str("L"), Some(Direction::Left));
//! assert_eq!(Status::Active.as_str(), "active");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 21);
//! ```

pub mod color;
pub mod event;
pub mod geometry;

use serde::{Deserialize, Serialize};

pub use color::{Color, BLACK, WHITE};
pub use event::{keys, BuiltinEvent, GameTick, KeyPress, SnakeEvent};
pub use geometry::{Path, Point, Rect};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (21 rows, not counting the sentinel floor)
pub const BOARD_HEIGHT: usize = 21;

/// Frame interval of the event pump in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Number of frames between two gravity steps in Tetris
pub const GRAVITY_TICKS: u64 = 60;

/// Number of frames between two snake moves
pub const SNAKE_UPDATE_RATE: u64 = 6;

/// Half-width of the snake arena; the head dies once `|x|` or `|y|` reaches it
pub const SNAKE_EXTENT: i32 = 10;

/// Rendering scale of one snake cell
pub const SNAKE_SCALE: f32 = 1.0;

/// Cleared lines are shown multiplied by this factor on the scoreboard
pub const SCORE_MULTIPLIER: u64 = 1000;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    L,
    J,
    T,
}

impl PieceKind {
    /// Canonical deck order. Shuffles break ties by position in this array.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::S => 0,
            PieceKind::Z => 1,
            PieceKind::I => 2,
            PieceKind::O => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::T => 6,
        }
    }
}

/// Rotation states of a piece, counted in clockwise quarter turns
///
/// - **North**: Authored orientation (0)
/// - **East**: Rotated 90° clockwise (1)
/// - **South**: Rotated 180° (2)
/// - **West**: Rotated 270° clockwise (3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Number of clockwise quarter turns from North (0..4)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from a quarter-turn count, taken mod 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked cell, painted with the color of the piece that filled it
pub type Cell = Option<Color>;

/// Horizontal direction for moves and spins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    /// Parse "L"/"R" (or "left"/"right"), case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" | "left" => Some(Direction::Left),
            "r" | "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Column delta of a one-cell move in this direction
    pub fn dx(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Run state of a Tetris game
///
/// - **Active**: pieces fall and accept input
/// - **Paused**: frozen until toggled back
/// - **Over**: terminal; only a restart leaves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Paused,
    Over,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Paused => "paused",
            Status::Over => "over",
        }
    }
}
