//! Event plumbing between the outside world and the game cores.
//!
//! - [`Engine`]: frame clock owning the [`EventQueue`]
//! - [`update_tetris`] / [`update_snake`]: `(state, batch) -> state` folds
//! - [`TetrisConfig`] / [`SnakeConfig`]: validated runtime settings
//!
//! A frame looks like this:
//!
//! ```
//! use tui_arcade_engine::{update_snake, Engine, SnakeConfig};
//! use tui_arcade_types::{keys, SnakeEvent};
//!
//! let config = SnakeConfig::default().validate().unwrap();
//! let mut model = config.new_model();
//! let mut engine: Engine<SnakeEvent> = Engine::default();
//!
//! engine.publish(SnakeEvent::key_down(keys::ARROW_UP));
//! for frame in 1..=6 {
//!     let batch = engine.frame(frame * 16);
//!     model = update_snake(model, batch, engine.publisher());
//! }
//! assert_eq!(model.head().y, -1);
//! ```

pub mod clock;
pub mod config;
pub mod queue;
pub mod snake;
pub mod tetris;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use clock::Engine;
pub use config::{ConfigError, SnakeConfig, TetrisConfig};
pub use queue::EventQueue;
pub use snake::update_snake;
pub use tetris::update_tetris;
