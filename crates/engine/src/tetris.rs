//! Tetris reducer: folds one frame's events over the game.

use tracing::{debug, info};

use crate::config::TetrisConfig;
use crate::core::{RandomSource, TetrisGame};
use crate::types::{keys, BuiltinEvent, Direction, GameTick};

/// Apply a batch of events in arrival order
pub fn update_tetris<R, I>(game: TetrisGame<R>, batch: I, config: &TetrisConfig) -> TetrisGame<R>
where
    R: RandomSource,
    I: IntoIterator<Item = BuiltinEvent>,
{
    batch
        .into_iter()
        .fold(game, |game, event| reduce(game, &event, config))
}

fn reduce<R: RandomSource>(
    game: TetrisGame<R>,
    event: &BuiltinEvent,
    config: &TetrisConfig,
) -> TetrisGame<R> {
    match event {
        BuiltinEvent::Tick(tick) => on_tick(game, tick, config),
        BuiltinEvent::KeyDown(key) => on_key_down(game, &key.code, config),
        BuiltinEvent::KeyUp(_) => game,
    }
}

fn on_tick<R: RandomSource>(
    game: TetrisGame<R>,
    tick: &GameTick,
    config: &TetrisConfig,
) -> TetrisGame<R> {
    if tick.tick % config.gravity_ticks.max(1) == 0 {
        game.tick()
    } else {
        game
    }
}

fn on_key_down<R: RandomSource>(
    game: TetrisGame<R>,
    code: &str,
    config: &TetrisConfig,
) -> TetrisGame<R> {
    match code {
        keys::SPACE if game.is_over() => restart(game, config),
        keys::SPACE | keys::KEY_Z => game.spin(Direction::Left),
        keys::KEY_X => game.spin(Direction::Right),
        keys::ARROW_LEFT => game.move_piece(Direction::Left),
        keys::ARROW_RIGHT => game.move_piece(Direction::Right),
        keys::ARROW_DOWN => game.tick(),
        keys::ARROW_UP => game.hard_drop(),
        keys::KEY_P => {
            let game = game.toggle();
            debug!(status = game.status().as_str(), "pause toggled");
            game
        }
        _ => game,
    }
}

/// New game on the same deck, so the piece stream continues
fn restart<R: RandomSource>(game: TetrisGame<R>, config: &TetrisConfig) -> TetrisGame<R> {
    info!(score = game.score(), lines = game.lines(), "restarting");
    TetrisGame::new(config.width, config.height, game.into_bullpen())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Status};

    fn tick(n: u64) -> BuiltinEvent {
        BuiltinEvent::Tick(GameTick {
            now_ms: n * 16,
            elapsed_ms: 16,
            tick: n,
        })
    }

    fn config() -> TetrisConfig {
        TetrisConfig {
            width: 10,
            height: 20,
            gravity_ticks: 4,
            seed: 7,
        }
    }

    #[test]
    fn gravity_only_on_multiples() {
        let config = config();
        let game = config.new_game();
        let start = game.active().translation;

        let game = update_tetris(game, [tick(1), tick(2), tick(3)], &config);
        assert_eq!(game.active().translation, start);

        let game = update_tetris(game, [tick(4)], &config);
        assert_eq!(game.active().translation, start + Point::new(0, 1));
    }

    #[test]
    fn arrows_move_and_drop() {
        let config = config();
        let game = config.new_game();
        let start = game.active().translation;

        let game = update_tetris(
            game,
            [
                BuiltinEvent::key_down(keys::ARROW_LEFT),
                BuiltinEvent::key_down(keys::ARROW_DOWN),
            ],
            &config,
        );
        assert_eq!(game.active().translation, start + Point::new(-1, 1));
    }

    #[test]
    fn hard_drop_locks_piece() {
        let config = config();
        let game = update_tetris(
            config.new_game(),
            [BuiltinEvent::key_down(keys::ARROW_UP)],
            &config,
        );
        let locked = game
            .board()
            .rows()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();
        assert_eq!(locked, 4);
    }

    #[test]
    fn key_p_pauses_gravity() {
        let config = config();
        let game = config.new_game();
        let start = game.active();

        let game = update_tetris(
            game,
            [BuiltinEvent::key_down(keys::KEY_P), tick(4), tick(8)],
            &config,
        );
        assert_eq!(game.status(), Status::Paused);
        assert_eq!(game.active(), start);

        let game = update_tetris(game, [BuiltinEvent::key_down(keys::KEY_P)], &config);
        assert_eq!(game.status(), Status::Active);
    }

    #[test]
    fn spin_keys_rotate_both_ways() {
        let config = config();
        let game = config.new_game();
        let start = game.active().rotation;

        let left = update_tetris(game.clone(), [BuiltinEvent::key_down(keys::KEY_Z)], &config);
        let space = update_tetris(game.clone(), [BuiltinEvent::key_down(keys::SPACE)], &config);
        let right = update_tetris(game, [BuiltinEvent::key_down(keys::KEY_X)], &config);

        assert_eq!(left.active().rotation, start.rotate_ccw());
        assert_eq!(space.active(), left.active());
        assert_eq!(right.active().rotation, start.rotate_cw());
    }

    #[test]
    fn key_up_and_unknown_keys_are_ignored() {
        let config = config();
        let game = config.new_game();
        let after = update_tetris(
            game.clone(),
            [
                BuiltinEvent::KeyUp(crate::types::KeyPress::named(keys::ARROW_LEFT)),
                BuiltinEvent::key_down("KeyQ"),
            ],
            &config,
        );
        assert_eq!(after, game);
    }

    #[test]
    fn space_restarts_when_over() {
        // Spawned pieces never reach column 0 and hard drops keep them in
        // place, so no line clears and the stack tops out after a few drops.
        let config = TetrisConfig {
            width: 5,
            height: 4,
            gravity_ticks: 1,
            seed: 3,
        };
        let mut game = config.new_game();
        for _ in 0..20 {
            if game.is_over() {
                break;
            }
            game = update_tetris(game, [BuiltinEvent::key_down(keys::ARROW_UP)], &config);
        }
        assert!(game.is_over());

        let next_kind = game.bullpen().preview().next().map(|t| t.kind);
        let restarted = update_tetris(game, [BuiltinEvent::key_down(keys::SPACE)], &config);
        assert_eq!(restarted.status(), Status::Active);
        assert_eq!(restarted.score(), 0);
        assert_eq!(restarted.active().translation, Point::new(2, 1));
        if let Some(kind) = next_kind {
            assert_eq!(restarted.active().kind, kind);
        }
    }
}
