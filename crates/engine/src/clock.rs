//! Frame clock - turns wall-clock frames into tick events
//!
//! The [`Engine`] owns the event queue. Keyboard events and events published by
//! a game core are queued as they arrive; each call to [`Engine::frame`]
//! appends one tick and hands the whole queue back as that frame's batch.
//!
//! The clock never reads the time itself. Callers pass a monotonic millisecond
//! reading, so a recorded run can be replayed with the same timestamps.

use tracing::trace;

use crate::queue::EventQueue;
use crate::types::GameTick;

#[derive(Debug, Clone)]
pub struct Engine<E> {
    queue: EventQueue<E>,
    tick: u64,
    last_ms: u64,
}

impl<E: From<GameTick>> Engine<E> {
    /// Clock starting at `start_ms` with no frames elapsed
    pub fn new(start_ms: u64) -> Self {
        Self {
            queue: EventQueue::new(),
            tick: 0,
            last_ms: start_ms,
        }
    }

    /// Queue an event for the next frame
    pub fn publish(&mut self, event: E) {
        self.queue.publish(event);
    }

    /// Sink handed to a reducer so it can publish for a later frame
    pub fn publisher(&mut self) -> &mut EventQueue<E> {
        &mut self.queue
    }

    /// Advance one frame and return its batch, tick event last
    pub fn frame(&mut self, now_ms: u64) -> Vec<E> {
        let tick = self.next_tick(now_ms);
        self.queue.publish(E::from(tick));
        self.queue.take_all()
    }

    fn next_tick(&mut self, now_ms: u64) -> GameTick {
        self.tick += 1;
        let tick = GameTick {
            now_ms,
            elapsed_ms: now_ms.saturating_sub(self.last_ms),
            tick: self.tick,
        };
        self.last_ms = now_ms;
        trace!(tick = tick.tick, elapsed_ms = tick.elapsed_ms, "frame");
        tick
    }

    /// Frames produced so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl<E: From<GameTick>> Default for Engine<E> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{keys, BuiltinEvent, SnakeEvent};

    #[test]
    fn ticks_count_up_with_elapsed_time() {
        let mut engine: Engine<BuiltinEvent> = Engine::new(100);
        assert_eq!(
            engine.frame(116),
            vec![BuiltinEvent::Tick(GameTick {
                now_ms: 116,
                elapsed_ms: 16,
                tick: 1
            })]
        );
        assert_eq!(
            engine.frame(140),
            vec![BuiltinEvent::Tick(GameTick {
                now_ms: 140,
                elapsed_ms: 24,
                tick: 2
            })]
        );
        assert_eq!(engine.ticks(), 2);
    }

    #[test]
    fn queued_events_come_before_the_tick() {
        let mut engine: Engine<SnakeEvent> = Engine::default();
        engine.publish(SnakeEvent::key_down(keys::ARROW_UP));
        engine.publisher().publish(SnakeEvent::Eats);
        assert_eq!(engine.pending(), 2);

        let batch = engine.frame(16);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], SnakeEvent::key_down(keys::ARROW_UP));
        assert_eq!(batch[1], SnakeEvent::Eats);
        assert!(matches!(batch[2], SnakeEvent::Tick(GameTick { tick: 1, .. })));
        assert_eq!(engine.pending(), 0);
    }

    #[test]
    fn clock_going_backwards_reports_zero_elapsed() {
        let mut engine: Engine<BuiltinEvent> = Engine::new(50);
        let batch = engine.frame(40);
        assert!(matches!(
            batch[0],
            BuiltinEvent::Tick(GameTick { elapsed_ms: 0, .. })
        ));
    }
}
