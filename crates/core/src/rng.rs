//! RNG module - injectable random sources
//!
//! Game cores never reach for a global generator. Everything random (deck
//! shuffles, apple placement) goes through [`RandomSource`], so a game built
//! from a seed replays identically.
//!
//! [`SimpleRng`] is the default implementation: a small LCG that is cheap to
//! clone, which lets a game state be copied together with its random stream.

/// Uniform random number source.
pub trait RandomSource {
    /// Next uniformly distributed `u32`.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in the half-open range `[min, max)`.
    ///
    /// Returns `min` when the range is empty.
    fn next_int_between(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (i64::from(max) - i64::from(min)) as u64;
        // Multiply-shift keeps the high bits, which are the good ones for an LCG.
        let offset = (u64::from(self.next_u32()) * span) >> 32;
        (i64::from(min) + offset as i64) as i32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; a new `SimpleRng` built from it continues the same sequence
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_int_between_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_int_between(-9, 10);
            assert!((-9..10).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_int_between_empty_range() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_int_between(3, 3), 3);
        assert_eq!(rng.next_int_between(5, 2), 5);
    }

    #[test]
    fn test_int_between_hits_both_ends() {
        let mut rng = SimpleRng::new(99);
        let values: Vec<i32> = (0..500).map(|_| rng.next_int_between(0, 3)).collect();
        assert!(values.contains(&0));
        assert!(values.contains(&2));
    }

    #[test]
    fn test_seed_continues_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.seed());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
