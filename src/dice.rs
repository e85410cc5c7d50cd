//! Dice.
//!
//! A `Die` produces uniformly distributed rolls within fixed inclusive
//! bounds. Each die owns its own [`GameRng`] stream, so two dice forked
//! from one session seed roll independent, reproducible sequences.

use crate::rng::GameRng;

/// A die with fixed inclusive bounds (default 1..=6).
///
/// Rolling never fails; the only state that changes is the internal RNG.
#[derive(Clone, Debug)]
pub struct Die {
    low: u32,
    high: u32,
    rng: GameRng,
}

impl Die {
    /// Create a standard six-sided die.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_range(1, 6, rng)
    }

    /// Create a die with custom inclusive bounds.
    ///
    /// A degenerate range such as `with_range(5, 5, ..)` yields a loaded
    /// die that always rolls the same value, which tests rely on.
    ///
    /// Panics if `low` is zero or the bounds are not ascending.
    #[must_use]
    pub fn with_range(low: u32, high: u32, rng: GameRng) -> Self {
        assert!(low >= 1, "a die face must be at least 1");
        assert!(low <= high, "die bounds must be ascending");
        Self { low, high, rng }
    }

    /// Roll the die: a uniform value within the inclusive bounds.
    pub fn roll(&mut self) -> u32 {
        self.rng.gen_range(self.low..self.high + 1)
    }

    /// Smallest face value.
    #[must_use]
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Largest face value.
    #[must_use]
    pub fn high(&self) -> u32 {
        self.high
    }
}
