//! Bounds for the attack, speed and defense abilities

use serde::{Deserialize, Serialize};

pub const DEFAULT_ABILITY_MIN: i32 = 1;
pub const DEFAULT_ABILITY_MAX: i32 = 9;

/// Inclusive range for a rolled or slider-set ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRange {
    pub min: i32,
    pub max: i32,
}

impl Default for AbilityRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_ABILITY_MIN,
            max: DEFAULT_ABILITY_MAX,
        }
    }
}

impl AbilityRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Convert a slider position to an ability value.
    ///
    /// Halfway positions round to even, then the result is clamped.
    /// NaN reads as the minimum.
    pub fn from_slider(&self, position: f64) -> i32 {
        if position.is_nan() {
            return self.min;
        }
        let rounded = position.round_ties_even();
        if rounded <= self.min as f64 {
            self.min
        } else if rounded >= self.max as f64 {
            self.max
        } else {
            rounded as i32
        }
    }
}
