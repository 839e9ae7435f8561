//! Terminal input module (engine-facing).
//!
//! Translates `crossterm` key events into the DOM-style key records the game
//! reducers consume ([`crate::types::KeyPress`]), so the cores never see a
//! terminal type.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{key_event, key_press, should_quit};
