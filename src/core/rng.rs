//! Deterministic random number generation for grid seeding.
//!
//! The same seed always produces the same sequence, which makes a seeded
//! simulation reproducible across `reset`.
//!
//! ```
//! use rust_life::core::LifeRng;
//!
//! let mut a = LifeRng::new(42);
//! let mut b = LifeRng::new(42);
//!
//! for _ in 0..16 {
//!     assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct LifeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LifeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a seed drawn from OS entropy.
    ///
    /// The drawn seed is kept so the run can be replayed with [`LifeRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` must lie in `[0, 1]`; callers validate it up front.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut LifeRng, n: usize) -> Vec<bool> {
        (0..n).map(|_| rng.gen_bool(0.5)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = LifeRng::new(42);
        let mut rng2 = LifeRng::new(42);

        assert_eq!(draw(&mut rng1, 200), draw(&mut rng2, 200));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = LifeRng::new(1);
        let mut rng2 = LifeRng::new(2);

        assert_ne!(draw(&mut rng1, 64), draw(&mut rng2, 64));
    }

    #[test]
    fn test_extreme_probabilities() {
        let mut rng = LifeRng::new(7);

        assert!(draw_with(&mut rng, 1.0).iter().all(|&b| b));
        assert!(draw_with(&mut rng, 0.0).iter().all(|&b| !b));
    }

    fn draw_with(rng: &mut LifeRng, p: f64) -> Vec<bool> {
        (0..50).map(|_| rng.gen_bool(p)).collect()
    }

    #[test]
    fn test_entropy_seed_is_replayable() {
        let mut original = LifeRng::from_entropy();
        let mut replay = LifeRng::new(original.seed());

        assert_eq!(draw(&mut original, 32), draw(&mut replay, 32));
    }
}
