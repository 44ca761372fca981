//! A single canonical PRNG stream (spec §9 "PRNG determinism across language
//! runtimes"). Every stochastic draw in the pipeline routes through this
//! type, seeded once per request from the caller's `seed` field, so that two
//! calls with the same seed are bit-identical (spec §8 "Determinism").

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Prng {
    rng: StdRng,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[0, 1)`, matching the role of Python's
    /// `random.random()` in the reference renderers.
    pub fn random(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Uniform `[0, 1)` sampled from a separate axis, used where the
    /// reference draws from `np.random` in the same step as `random()` —
    /// both still come from this one stream, in call order.
    pub fn random_f32(&mut self) -> f32 {
        self.rng.gen_range(0.0f32..1.0)
    }

    /// Inclusive integer range, matching `random.randint(lo, hi)`.
    pub fn randint(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.random() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        for _ in 0..32 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn different_seed_different_sequence() {
        let mut a = Prng::new(1);
        let mut b = Prng::new(2);
        let seq_a: Vec<f64> = (0..16).map(|_| a.random()).collect();
        let seq_b: Vec<f64> = (0..16).map(|_| b.random()).collect();
        assert_ne!(seq_a, seq_b);
    }
}
