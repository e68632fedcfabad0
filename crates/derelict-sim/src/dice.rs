//! Injectable dice, so panic rolls can be replayed in tests.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform integer draws.
pub trait Dice {
    /// Draw an integer in `[low, high]`, both ends inclusive. Callers
    /// must pass `low <= high`.
    fn roll(&mut self, low: i32, high: i32) -> i32;
}

impl Dice for StdRng {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }
}
