//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Views draw a
//! read-only snapshot into a plain framebuffer of styled characters, and the
//! [`TerminalRenderer`] flushes that framebuffer to the terminal.
//!
//! - Views are pure and unit-testable; only the renderer does I/O
//! - Board cells are 2 columns wide by default to offset the glyph aspect ratio

pub mod fb;
pub mod layout;
pub mod renderer;
pub mod snake_view;
pub mod tetris_view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{AnchorY, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tetris_view::TetrisView;
