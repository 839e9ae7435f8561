//! Deck module - the bullpen of upcoming pieces
//!
//! The deck is a FIFO of piece kinds. Whenever it runs dry, a fresh set of all
//! seven kinds is shuffled in before the next draw, so every kind shows up once
//! per batch.
//!
//! Shuffling draws one random `u32` per piece, zips the draws with the canonical
//! order and sorts by `(draw, canonical index)`. Sorting by independent random
//! keys yields a uniform permutation, and the index tie-break keeps it
//! deterministic when two draws collide.
//!
//! The deck owns its random source. It is the one mutable part of a game
//! state and moves along with it; cloning a deck clones the random stream too.

use std::collections::VecDeque;

use tracing::debug;

use crate::rng::{RandomSource, SimpleRng};
use crate::tetromino::Tetromino;
use crate::types::PieceKind;

/// A freshly shuffled set of the seven piece kinds
pub fn shuffled_deck<R: RandomSource + ?Sized>(rng: &mut R) -> [PieceKind; 7] {
    let mut keyed = PieceKind::ALL.map(|kind| (rng.next_u32(), kind.index(), kind));
    keyed.sort_unstable_by_key(|&(draw, index, _)| (draw, index));
    keyed.map(|(_, _, kind)| kind)
}

/// Queue of upcoming pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<R = SimpleRng> {
    queue: VecDeque<PieceKind>,
    rng: R,
}

impl Deck<SimpleRng> {
    /// Deck driven by a [`SimpleRng`] with the given seed
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Deck<R> {
    /// Create an empty deck; the first draw triggers the first shuffle
    pub fn new(rng: R) -> Self {
        Self {
            queue: VecDeque::with_capacity(PieceKind::ALL.len()),
            rng,
        }
    }

    /// Append a freshly shuffled set of seven
    pub fn refill(&mut self) {
        self.queue.extend(shuffled_deck(&mut self.rng));
        debug!(queued = self.queue.len(), "deck refilled");
    }

    /// Pop the next piece, refilling first if the queue is empty
    pub fn next(&mut self) -> Tetromino {
        if self.queue.is_empty() {
            self.refill();
        }
        // The fallback is unreachable after a refill.
        let kind = self.queue.pop_front().unwrap_or(PieceKind::I);
        Tetromino::new(kind)
    }

    /// Upcoming pieces in draw order, without consuming them
    pub fn preview(&self) -> impl Iterator<Item = Tetromino> + '_ {
        self.queue.iter().map(|&kind| Tetromino::new(kind))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl Default for Deck<SimpleRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, then repeats the last one
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0[0]
            }
        }
    }

    fn sorted(mut kinds: Vec<PieceKind>) -> Vec<PieceKind> {
        kinds.sort();
        kinds
    }

    #[test]
    fn test_shuffle_sorts_by_draw() {
        let mut rng = Scripted(vec![60, 50, 40, 30, 20, 10, 0]);
        assert_eq!(
            shuffled_deck(&mut rng),
            [
                PieceKind::T,
                PieceKind::J,
                PieceKind::L,
                PieceKind::O,
                PieceKind::I,
                PieceKind::Z,
                PieceKind::S,
            ]
        );
    }

    #[test]
    fn test_shuffle_ties_keep_canonical_order() {
        let mut rng = Scripted(vec![7]);
        assert_eq!(shuffled_deck(&mut rng), PieceKind::ALL);
    }

    #[test]
    fn test_new_deck_is_empty_until_drawn() {
        let mut deck = Deck::seeded(1);
        assert!(deck.is_empty());
        assert_eq!(deck.preview().count(), 0);

        deck.next();
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn test_draws_all_seven_per_batch() {
        let mut deck = Deck::seeded(3);
        for _ in 0..3 {
            let batch: Vec<PieceKind> = (0..7).map(|_| deck.next().kind).collect();
            assert_eq!(sorted(batch), sorted(PieceKind::ALL.to_vec()));
        }
    }

    #[test]
    fn test_preview_matches_next_draws() {
        let mut deck = Deck::seeded(11);
        deck.next();
        let preview: Vec<PieceKind> = deck.preview().map(|t| t.kind).collect();
        let drawn: Vec<PieceKind> = (0..preview.len()).map(|_| deck.next().kind).collect();
        assert_eq!(preview, drawn);
    }

    #[test]
    fn test_preview_does_not_consume() {
        let mut deck = Deck::seeded(5);
        deck.refill();
        let before = deck.clone();
        let _ = deck.preview().count();
        assert_eq!(deck, before);
    }

    #[test]
    fn test_refill_only_when_drained() {
        let mut deck = Deck::seeded(9);
        for expected in (0..7).rev() {
            deck.next();
            assert_eq!(deck.len(), expected);
        }
        deck.next();
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn test_drawn_pieces_start_at_origin() {
        let mut deck = Deck::seeded(2);
        let piece = deck.next();
        assert_eq!(piece.translation, crate::types::Point::ZERO);
        assert_eq!(piece.rotation, crate::types::Rotation::North);
    }
}
