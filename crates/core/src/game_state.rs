//! Game state module - the Tetris state machine
//!
//! This module ties together the board, the active piece and the deck. It
//! handles gravity, piece movement, rotation with kicks, locking, line clears
//! and the Active/Paused/Over lifecycle.
//!
//! Every transition takes the game by value and returns its successor. Illegal
//! actions are not errors: they hand back the state unchanged.

use tracing::{debug, info};

use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, TetrisSnapshot};
use crate::types::{Direction, Point, Status};
use crate::{Board, Deck, Tetromino};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrisGame<R = SimpleRng> {
    score: u64,
    lines: u64,
    board: Board,
    active: Tetromino,
    bullpen: Deck<R>,
    status: Status,
}

impl<R: RandomSource> TetrisGame<R> {
    /// Start a game on an empty `width x height` board
    ///
    /// The first piece is centered horizontally one row down, so its authored
    /// shape is fully visible.
    pub fn new(width: usize, height: usize, mut bullpen: Deck<R>) -> Self {
        let active = bullpen.next().translate(Point::new((width / 2) as i32, 1));
        debug!(kind = active.kind.as_str(), width, height, "game created");
        Self {
            score: 0,
            lines: 0,
            board: Board::empty(width, height),
            active,
            bullpen,
            status: Status::Active,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Total number of cleared lines
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn bullpen(&self) -> &Deck<R> {
        &self.bullpen
    }

    /// Give up the deck, e.g. to start a new game on the same random stream
    pub fn into_bullpen(self) -> Deck<R> {
        self.bullpen
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    /// Where the active piece would land if dropped now
    pub fn projected(&self) -> Tetromino {
        self.active
            .translate(self.board.project(&self.active.path()))
    }

    /// Switch between Active and Paused; Over stays Over
    pub fn toggle(self) -> Self {
        let status = match self.status {
            Status::Active => Status::Paused,
            Status::Paused => Status::Active,
            Status::Over => Status::Over,
        };
        Self { status, ..self }
    }

    /// Gravity step: fall one row, or lock if something is directly below
    pub fn tick(self) -> Self {
        if self.status != Status::Active {
            return self;
        }

        let next = self.active.translate(Point::new(0, 1));
        if !self.board.touches(&next.path()) {
            return Self {
                active: next,
                ..self
            };
        }

        self.lock_active()
    }

    /// One-column move; ignored if the target overlaps or leaves the board sideways
    pub fn move_piece(self, direction: Direction) -> Self {
        if self.status != Status::Active {
            return self;
        }

        let moved = self.active.translate(Point::new(direction.dx(), 0));
        if self.board.is_legal(&moved.path()) {
            Self {
                active: moved,
                ..self
            }
        } else {
            self
        }
    }

    /// Quarter turn with wall and floor kicks; ignored if still illegal
    pub fn spin(self, direction: Direction) -> Self {
        if self.status != Status::Active {
            return self;
        }

        let kicked = self.kick(self.active.turn(direction));
        if self.board.is_legal(&kicked.path()) {
            Self {
                active: kicked,
                ..self
            }
        } else {
            debug!(kind = kicked.kind.as_str(), ?direction, "spin rejected");
            self
        }
    }

    /// Drop the active piece to its projected position and lock it there
    pub fn hard_drop(self) -> Self {
        if self.status != Status::Active {
            return self;
        }

        let landed = self.projected();
        Self {
            active: landed,
            ..self
        }
        .lock_active()
    }

    /// Shift a rotated piece back inside the side walls and above the floor
    ///
    /// The horizontal kick is a single column. The floor kick lifts the piece
    /// until its lowest cell sits on the last visible row.
    fn kick(&self, piece: Tetromino) -> Tetromino {
        let path = piece.path();
        let width = self.board.width() as i32;
        let height = self.board.height() as i32;

        let dx = if path.iter().any(|p| p.x < 0) {
            1
        } else if path.iter().any(|p| p.x >= width) {
            -1
        } else {
            0
        };

        let dy = match path.max_y() {
            Some(max_y) if max_y >= height => height - 1 - max_y,
            _ => 0,
        };

        piece.translate(Point::new(dx, dy))
    }

    /// Lock the active piece, clear rows, score them and bring in the next piece
    fn lock_active(mut self) -> Self {
        let locked = self.active.path();
        let (cleared, board) = self.board.lock(&locked, self.active.color()).clear();

        let spawn_x = (board.width() / 2) as i32;
        let next = self.bullpen.next().translate(Point::new(spawn_x, 0));

        let locked_in_spawn_row = locked.iter().any(|p| p.y <= 0);
        let spawn_blocked = board.touches(&next.path());
        let status = if locked_in_spawn_row || spawn_blocked {
            info!(
                score = self.score + cleared as u64,
                lines = self.lines + cleared as u64,
                spawn_blocked,
                "game over"
            );
            Status::Over
        } else {
            Status::Active
        };

        debug!(
            kind = self.active.kind.as_str(),
            cleared,
            next = next.kind.as_str(),
            "piece locked"
        );

        Self {
            score: self.score + cleared as u64,
            lines: self.lines + cleared as u64,
            board,
            active: next,
            bullpen: self.bullpen,
            status,
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> TetrisSnapshot {
        let projected = self.projected();
        TetrisSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.rows().map(|row| row.to_vec()).collect(),
            active: ActiveSnapshot::from(self.active),
            ghost: projected.path().points().to_vec(),
            preview: self.bullpen.preview().map(|t| t.kind).collect(),
            score: self.score,
            lines: self.lines,
            status: self.status,
        }
    }
}

impl Default for TetrisGame<SimpleRng> {
    fn default() -> Self {
        let board = Board::default();
        Self::new(board.width(), board.height(), Deck::default())
    }
}
