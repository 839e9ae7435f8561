//! Events delivered by the event pump to the game reducers.
//!
//! Key events carry DOM-style `code`/`key` strings (e.g. `"ArrowLeft"`), so a
//! recorded event log reads the same regardless of the terminal backend.
//! All events serialize with a `tag` field:
//!
//! ```
//! use tui_arcade_types::{BuiltinEvent, GameTick};
//!
//! let event = BuiltinEvent::Tick(GameTick { now_ms: 32, elapsed_ms: 16, tick: 2 });
//! let json = serde_json::to_string(&event).unwrap();
//! assert_eq!(json, r#"{"tag":"tick","now_ms":32,"elapsed_ms":16,"tick":2}"#);
//! ```

use serde::{Deserialize, Serialize};

/// Key codes understood by the games.
pub mod keys {
    pub const ARROW_LEFT: &str = "ArrowLeft";
    pub const ARROW_RIGHT: &str = "ArrowRight";
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
    pub const SPACE: &str = "Space";
    pub const KEY_P: &str = "KeyP";
    pub const KEY_X: &str = "KeyX";
    pub const KEY_Z: &str = "KeyZ";
}

/// One animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameTick {
    /// Milliseconds since the pump started
    pub now_ms: u64,
    /// Milliseconds since the previous frame
    pub elapsed_ms: u64,
    /// Monotonic frame counter, starting at 1
    pub tick: u64,
}

/// A key transition, named by physical `code` and produced `key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPress {
    pub code: String,
    pub key: String,
}

impl KeyPress {
    pub fn new(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
        }
    }

    /// Key whose `key` equals its `code` (arrows, named keys).
    pub fn named(code: &str) -> Self {
        Self::new(code, code)
    }
}

/// Events every game receives from the pump.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum BuiltinEvent {
    Tick(GameTick),
    KeyDown(KeyPress),
    KeyUp(KeyPress),
}

impl BuiltinEvent {
    pub fn key_down(code: &str) -> Self {
        BuiltinEvent::KeyDown(KeyPress::named(code))
    }
}

impl From<GameTick> for BuiltinEvent {
    fn from(tick: GameTick) -> Self {
        BuiltinEvent::Tick(tick)
    }
}

/// Snake events: the builtin set plus the synthetic apple-eaten event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum SnakeEvent {
    Tick(GameTick),
    KeyDown(KeyPress),
    KeyUp(KeyPress),
    /// Published by the snake core when the head reaches the apple
    Eats,
}

impl SnakeEvent {
    pub fn key_down(code: &str) -> Self {
        SnakeEvent::KeyDown(KeyPress::named(code))
    }
}

impl From<GameTick> for SnakeEvent {
    fn from(tick: GameTick) -> Self {
        SnakeEvent::Tick(tick)
    }
}

impl From<BuiltinEvent> for SnakeEvent {
    fn from(event: BuiltinEvent) -> Self {
        match event {
            BuiltinEvent::Tick(t) => SnakeEvent::Tick(t),
            BuiltinEvent::KeyDown(k) => SnakeEvent::KeyDown(k),
            BuiltinEvent::KeyUp(k) => SnakeEvent::KeyUp(k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eats_serializes_as_bare_tag() {
        let json = serde_json::to_string(&SnakeEvent::Eats).unwrap();
        assert_eq!(json, r#"{"tag":"eats"}"#);
    }

    #[test]
    fn keydown_roundtrips_through_json() {
        let event = BuiltinEvent::key_down(keys::ARROW_LEFT);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"tag":"keydown","code":"ArrowLeft","key":"ArrowLeft"}"#
        );
        let back: BuiltinEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
