//! Random number generation port
//!
//! Every random draw the roller makes goes through this port, so tests can
//! feed a fixed sequence and callers can seed a reproducible session.

/// Random number generation abstraction.
///
/// # Implementations
///
/// - `ThreadRngAdapter` in infrastructure (production, uses `rand::thread_rng()`)
/// - `SeededRngAdapter` in infrastructure (reproducible rolls)
/// - `FixedRandomPort` for deterministic testing
pub trait RandomPort: Send + Sync {
    /// Generate a random i32 in range [min, max] (inclusive on both ends)
    fn random_range(&self, min: i32, max: i32) -> i32;

    /// Pick an index into a collection of `len` elements
    fn choose_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let max = i32::try_from(len - 1).unwrap_or(i32::MAX);
        Some(self.random_range(0, max) as usize)
    }
}

/// Fixed random port for deterministic testing.
///
/// Returns values from a provided sequence, cycling if needed, clamped to the
/// requested range.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedRandomPort {
    values: Vec<i32>,
    index: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl FixedRandomPort {
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomPort for FixedRandomPort {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let value = self.values[idx % self.values.len()];
        value.clamp(min, max)
    }
}
