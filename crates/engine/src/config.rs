//! Runtime configuration for both games.
//!
//! Defaults come from the constants in `tui-arcade-types`. A config is checked
//! once with `validate()` before any game is built from it; game cores assume
//! valid dimensions and rates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Deck, SimpleRng, SnakeModel, TetrisGame};
use crate::types::{
    Rect, BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_TICKS, SNAKE_EXTENT, SNAKE_SCALE, SNAKE_UPDATE_RATE,
};

/// Narrowest board on which a horizontal I piece spawns fully inside
pub const MIN_BOARD_WIDTH: usize = 5;

/// Shortest board that still fits a vertical I piece
pub const MIN_BOARD_HEIGHT: usize = 4;

/// Widest or tallest board; a view of it still fits a terminal framebuffer
pub const MAX_BOARD_SIDE: usize = 1000;

/// Largest snake arena half-width
pub const MAX_SNAKE_EXTENT: i32 = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "board {width}x{height} is too small (minimum {}x{})",
        MIN_BOARD_WIDTH,
        MIN_BOARD_HEIGHT
    )]
    BoardTooSmall { width: usize, height: usize },
    #[error(
        "board {width}x{height} is too large (maximum {}x{})",
        MAX_BOARD_SIDE,
        MAX_BOARD_SIDE
    )]
    BoardTooLarge { width: usize, height: usize },
    #[error("gravity interval must be at least one frame")]
    ZeroGravity,
    #[error("snake update rate must be at least one frame")]
    ZeroUpdateRate,
    #[error("snake arena extent must be in 1..={}, got {0}", MAX_SNAKE_EXTENT)]
    BadExtent(i32),
    #[error("snake scale must be a positive number, got {0}")]
    BadScale(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TetrisConfig {
    pub width: usize,
    pub height: usize,
    /// Frames between two gravity steps
    pub gravity_ticks: u64,
    pub seed: u32,
}

impl Default for TetrisConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity_ticks: GRAVITY_TICKS,
            seed: 1,
        }
    }
}

impl TetrisConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.width < MIN_BOARD_WIDTH || self.height < MIN_BOARD_HEIGHT {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_BOARD_SIDE || self.height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.gravity_ticks == 0 {
            return Err(ConfigError::ZeroGravity);
        }
        Ok(self)
    }

    /// Fresh game on a deck seeded from this config
    pub fn new_game(&self) -> TetrisGame<SimpleRng> {
        TetrisGame::new(self.width, self.height, Deck::seeded(self.seed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Half-width of the square arena
    pub extent: i32,
    /// Frames between two snake moves
    pub update_rate: u64,
    pub scale: f32,
    pub seed: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            extent: SNAKE_EXTENT,
            update_rate: SNAKE_UPDATE_RATE,
            scale: SNAKE_SCALE,
            seed: 1,
        }
    }
}

impl SnakeConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_SNAKE_EXTENT).contains(&self.extent) {
            return Err(ConfigError::BadExtent(self.extent));
        }
        if self.update_rate == 0 {
            return Err(ConfigError::ZeroUpdateRate);
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::BadScale(self.scale));
        }
        Ok(self)
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.extent)
    }

    pub fn new_model(&self) -> SnakeModel<SimpleRng> {
        SnakeModel::new(
            self.bounds(),
            self.update_rate,
            self.scale,
            SimpleRng::new(self.seed),
        )
    }
}
