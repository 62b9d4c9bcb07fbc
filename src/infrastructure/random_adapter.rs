//! Random number generation adapters.
//!
//! Implement `RandomPort` with `rand`.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::application::ports::outbound::RandomPort;

/// Production random number generator using thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded generator: the same seed replays the same rolls
#[derive(Debug)]
pub struct SeededRngAdapter {
    rng: Mutex<StdRng>,
}

impl SeededRngAdapter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomPort for SeededRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(min..=max)
    }
}
