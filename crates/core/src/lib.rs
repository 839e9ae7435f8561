//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of both games. It has **no dependencies** on
//! terminals, clocks or global randomness, which makes it:
//!
//! - **Deterministic**: the same seed and the same event log give the same game
//! - **Testable**: every transition is a plain function from state to state
//! - **Portable**: the terminal binary is just one possible front end
//!
//! # Module Structure
//!
//! - [`board`]: playfield grid with a sentinel floor, collision and line clearing
//! - [`pieces`]: the seven tetromino shapes and their rotation tables
//! - [`tetromino`]: a piece with a rotation and a board offset
//! - [`deck`]: the shuffled queue of upcoming pieces
//! - [`game_state`]: the Tetris state machine
//! - [`snake`]: the snake state machine
//! - [`rng`]: injectable random sources
//! - [`publish`]: sink for events a core sends to its own future
//! - [`snapshot`]: read-only views for renderers
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{Deck, TetrisGame};
//! use tui_arcade_types::{Direction, Status};
//!
//! let game = TetrisGame::new(10, 20, Deck::seeded(12345));
//! let spawned = game.active();
//!
//! let game = game.move_piece(Direction::Left).spin(Direction::Right).hard_drop();
//!
//! assert_eq!(game.status(), Status::Active);
//! assert_ne!(game.active(), spawned);
//! assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 10 + 4);
//! ```

pub mod board;
pub mod deck;
pub mod game_state;
pub mod pieces;
pub mod publish;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod tetromino;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use deck::{shuffled_deck, Deck};
pub use game_state::TetrisGame;
pub use pieces::{get_shape, piece_color, rotations};
pub use publish::Publisher;
pub use rng::{RandomSource, SimpleRng};
pub use snake::SnakeModel;
pub use snapshot::{ActiveSnapshot, SnakeSnapshot, TetrisSnapshot};
pub use tetromino::Tetromino;
