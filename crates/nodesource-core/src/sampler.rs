//! Random value sources
//!
//! Every placeholder number served by nodesource is drawn through a
//! [`ValueSampler`]. The default draws from the thread-local generator; a
//! [`SeededSampler`] replays the same sequence for a given seed.

use crate::ValueRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Source of placeholder values
pub trait ValueSampler: Send + Sync {
    /// Draw one value in `[range.low(), range.high())`
    fn sample(&self, range: &ValueRange) -> f64;

    fn name(&self) -> &'static str;
}

/// Arc-wrapped sampler for sharing across handlers
pub type SharedSampler = Arc<dyn ValueSampler>;

/// Draws from `rand::thread_rng`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl ValueSampler for ThreadRngSampler {
    fn sample(&self, range: &ValueRange) -> f64 {
        rand::thread_rng().gen_range(range.low()..range.high())
    }

    fn name(&self) -> &'static str {
        "thread_rng"
    }
}

/// Deterministic sampler seeded once at construction
#[derive(Debug)]
pub struct SeededSampler {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ValueSampler for SeededSampler {
    fn sample(&self, range: &ValueRange) -> f64 {
        // A panic while holding the lock cannot leave the generator invalid.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(range.low()..range.high())
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Pick the sampler for an optional seed
pub fn sampler_for_seed(seed: Option<u64>) -> SharedSampler {
    match seed {
        Some(seed) => Arc::new(SeededSampler::new(seed)),
        None => Arc::new(ThreadRngSampler),
    }
}
