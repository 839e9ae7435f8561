//! Snake module - the snake state machine
//!
//! The arena is centered on the origin. The snake is a non-empty list of cells,
//! head first. It moves one cell every `update_rate` frames along its velocity;
//! the velocity starts at zero, so nothing happens until the first arrow key.
//!
//! Eating is a two-step affair: a movement tick that lands the head on the
//! apple publishes [`SnakeEvent::Eats`], and the growth happens when that event
//! comes back in a later batch.
//!
//! Like the Tetris game, every transition consumes the model and returns its
//! successor.

use tracing::{debug, info};

use crate::publish::Publisher;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::SnakeSnapshot;
use crate::types::{
    keys, GameTick, Point, Rect, SnakeEvent, SNAKE_EXTENT, SNAKE_SCALE, SNAKE_UPDATE_RATE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SnakeModel<R = SimpleRng> {
    snake: Vec<Point>,
    velocity: Point,
    apple: Point,
    bounds: Rect,
    scale: f32,
    ticks: u64,
    update_rate: u64,
    rng: R,
}

/// Velocity requested by an arrow key
///
/// Keys on the axis the snake already travels keep the current velocity, so a
/// running snake can only turn, never reverse.
fn velocity_from_key(code: &str, current: Point) -> Point {
    match code {
        keys::ARROW_LEFT if current.x == 0 => Point::new(-1, 0),
        keys::ARROW_RIGHT if current.x == 0 => Point::new(1, 0),
        keys::ARROW_UP if current.y == 0 => Point::new(0, -1),
        keys::ARROW_DOWN if current.y == 0 => Point::new(0, 1),
        _ => current,
    }
}

impl<R: RandomSource> SnakeModel<R> {
    /// A one-cell snake at rest on the origin with a freshly placed apple
    pub fn new(bounds: Rect, update_rate: u64, scale: f32, mut rng: R) -> Self {
        let apple = sample_apple(&bounds, &mut rng);
        debug!(?apple, ?bounds, update_rate, "snake created");
        Self {
            snake: vec![Point::ZERO],
            velocity: Point::ZERO,
            apple,
            bounds,
            scale,
            ticks: 0,
            update_rate: update_rate.max(1),
            rng,
        }
    }

    /// Replace the body; an empty body is ignored
    pub fn with_snake(self, snake: Vec<Point>) -> Self {
        if snake.is_empty() {
            return self;
        }
        Self { snake, ..self }
    }

    pub fn with_velocity(self, velocity: Point) -> Self {
        Self { velocity, ..self }
    }

    pub fn with_apple(self, apple: Point) -> Self {
        Self { apple, ..self }
    }

    pub fn snake(&self) -> &[Point] {
        &self.snake
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn apple(&self) -> Point {
        self.apple
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn update_rate(&self) -> u64 {
        self.update_rate
    }

    /// Body length
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Stopped snakes stay stopped until an arrow key revives them
    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }

    pub fn on_tick<P>(self, tick: &GameTick, publisher: &mut P) -> Self
    where
        P: Publisher<SnakeEvent> + ?Sized,
    {
        let mut next = Self {
            ticks: tick.tick,
            ..self
        };

        if next.velocity.is_zero() || tick.tick % next.update_rate != 0 {
            return next;
        }

        let head = next.head() + next.velocity;
        next.snake.pop();
        next.snake.insert(0, head);

        if head == next.apple {
            debug!(?head, length = next.snake.len(), "apple reached");
            publisher.publish(SnakeEvent::Eats);
        }

        if next.collides() {
            info!(?head, score = next.score(), "snake crashed");
            next.velocity = Point::ZERO;
        }

        next
    }

    /// Steer; a turn that would put the head onto the neck is dropped
    pub fn on_key_down(self, code: &str) -> Self {
        let candidate = velocity_from_key(code, self.velocity);
        let whiplash = self
            .snake
            .get(1)
            .is_some_and(|&neck| self.head() + candidate == neck);

        if whiplash {
            debug!(code, "whiplash turn rejected");
            return self;
        }
        Self {
            velocity: candidate,
            ..self
        }
    }

    /// Grow by one segment at the tail and move the apple
    pub fn on_eats(mut self) -> Self {
        let tail = self.snake[self.snake.len() - 1];
        self.snake.push(tail);
        self.apple = sample_apple(&self.bounds, &mut self.rng);
        debug!(length = self.snake.len(), apple = ?self.apple, "snake grew");
        self
    }

    /// Head on its own body (past the neck) or at the arena edge
    pub fn collides(&self) -> bool {
        let head = self.head();
        self.snake.iter().skip(2).any(|&segment| segment == head)
            || head.x.abs() >= self.bounds.width
            || head.y.abs() >= self.bounds.height
    }

    /// Fraction of the next step already covered, for smooth drawing
    pub fn head_offset(&self) -> (f32, f32) {
        let progress = (self.ticks % self.update_rate) as f32 / self.update_rate as f32;
        (
            progress * self.velocity.x as f32,
            progress * self.velocity.y as f32,
        )
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            snake: self.snake.clone(),
            apple: self.apple,
            bounds: self.bounds,
            velocity: self.velocity,
            head_offset: self.head_offset(),
            scale: self.scale,
            score: self.score(),
            crashed: self.collides(),
        }
    }
}

impl Default for SnakeModel<SimpleRng> {
    fn default() -> Self {
        Self::new(
            Rect::centered(SNAKE_EXTENT),
            SNAKE_UPDATE_RATE,
            SNAKE_SCALE,
            SimpleRng::default(),
        )
    }
}

/// Apple position strictly inside the collision bounds
fn sample_apple<R: RandomSource + ?Sized>(bounds: &Rect, rng: &mut R) -> Point {
    let x = rng.next_int_between(1 - bounds.width, bounds.width);
    let y = rng.next_int_between(1 - bounds.height, bounds.height);
    Point::new(x, y)
}
