//! Snake reducer: folds one frame's events over the model.

use crate::core::{Publisher, RandomSource, SnakeModel};
use crate::types::SnakeEvent;

/// Apply a batch of events in arrival order
///
/// `Eats` events raised while folding go to `publisher`, not back into this
/// batch; they arrive with a later frame.
pub fn update_snake<R, I, P>(model: SnakeModel<R>, batch: I, publisher: &mut P) -> SnakeModel<R>
where
    R: RandomSource,
    I: IntoIterator<Item = SnakeEvent>,
    P: Publisher<SnakeEvent> + ?Sized,
{
    batch.into_iter().fold(model, |model, event| match event {
        SnakeEvent::Tick(tick) => model.on_tick(&tick, &mut *publisher),
        SnakeEvent::KeyDown(key) => model.on_key_down(&key.code),
        SnakeEvent::KeyUp(_) => model,
        SnakeEvent::Eats => model.on_eats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Engine;
    use crate::config::SnakeConfig;
    use crate::types::{keys, GameTick, Point};

    fn tick(n: u64) -> SnakeEvent {
        SnakeEvent::Tick(GameTick {
            now_ms: n * 16,
            elapsed_ms: 16,
            tick: n,
        })
    }

    #[test]
    fn key_then_tick_moves_head() {
        let model = SnakeConfig::default().new_model().with_apple(Point::new(5, 5));
        let mut published = Vec::new();
        let model = update_snake(
            model,
            [SnakeEvent::key_down(keys::ARROW_LEFT), tick(6)],
            &mut published,
        );
        assert_eq!(model.head(), Point::new(-1, 0));
        assert!(published.is_empty());
    }

    #[test]
    fn eats_is_redelivered_next_frame() {
        let config = SnakeConfig {
            update_rate: 1,
            ..SnakeConfig::default()
        };
        let model = config
            .new_model()
            .with_apple(Point::new(0, 1))
            .with_velocity(Point::new(0, 1));
        let mut engine: Engine<SnakeEvent> = Engine::default();

        let batch = engine.frame(16);
        let model = update_snake(model, batch, engine.publisher());
        assert_eq!(model.head(), Point::new(0, 1));
        assert_eq!(model.score(), 1);
        assert_eq!(engine.pending(), 1);

        let batch = engine.frame(32);
        assert_eq!(batch[0], SnakeEvent::Eats);
        let model = update_snake(model, batch, engine.publisher());
        assert_eq!(model.score(), 2);
        assert_eq!(model.head(), Point::new(0, 2));
        assert_eq!(model.snake()[1], Point::new(0, 1));
    }
}
