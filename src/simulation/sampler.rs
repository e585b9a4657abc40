use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of jitter multipliers.
pub trait Sampler {
    /// Draws one value uniformly from `[lo, hi]`.
    fn sample(&mut self, lo: f64, hi: f64) -> f64;
}

pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for SeededSampler {
    fn sample(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.gen_range(lo..=hi)
    }
}

#[cfg(test)]
pub mod testing {
    use super::Sampler;

    /// Always returns the same value, ignoring the bounds.
    pub struct FixedSampler(pub f64);

    impl Sampler for FixedSampler {
        fn sample(&mut self, _lo: f64, _hi: f64) -> f64 {
            self.0
        }
    }

    /// Replays a fixed sequence, cycling when exhausted.
    pub struct SequenceSampler {
        values: Vec<f64>,
        next: usize,
    }

    impl SequenceSampler {
        pub fn new(values: Vec<f64>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl Sampler for SequenceSampler {
        fn sample(&mut self, _lo: f64, _hi: f64) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }
}
