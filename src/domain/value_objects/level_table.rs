//! Level progression table
//!
//! Max health is looked up from this table rather than rolled, so two
//! characters at the same level always share the same max health.

pub const DEFAULT_MAX_LEVEL: u32 = 20;

/// Largest table that can be built; bigger requests are capped here
pub const LEVEL_CAP: u32 = 1_000;

const HEALTH_PER_LEVEL: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    /// Max health per level, index 0 is level 1
    max_health: Vec<i32>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL)
    }
}

impl LevelTable {
    /// Build a table for levels `1..=max_level`, with `max_level` kept
    /// within `1..=LEVEL_CAP`.
    pub fn new(max_level: u32) -> Self {
        let max_level = max_level.clamp(1, LEVEL_CAP) as i32;
        let max_health = (1..=max_level)
            .map(|level| level.saturating_mul(HEALTH_PER_LEVEL))
            .collect();
        Self { max_health }
    }

    pub fn max_level(&self) -> u32 {
        self.max_health.len() as u32
    }

    pub fn contains(&self, level: u32) -> bool {
        (1..=self.max_level()).contains(&level)
    }

    /// Clamp an arbitrary level into the table's range
    pub fn clamp(&self, level: u32) -> u32 {
        level.clamp(1, self.max_level())
    }

    /// Max health for a level; out-of-range levels use the nearest row
    pub fn health_for(&self, level: u32) -> i32 {
        let index = self.clamp(level) as usize - 1;
        self.max_health.get(index).copied().unwrap_or(HEALTH_PER_LEVEL)
    }

    /// Level choices for a picker, lowest first
    pub fn levels(&self) -> impl Iterator<Item = u32> {
        1..=self.max_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_is_deterministic_for_every_level() {
        let table = LevelTable::default();
        for level in 1..=table.max_level() {
            assert_eq!(table.health_for(level), table.health_for(level));
            assert_eq!(table.health_for(level), LevelTable::default().health_for(level));
        }
    }

    #[test]
    fn test_health_grows_with_level() {
        let table = LevelTable::default();
        let healths: Vec<i32> = table.levels().map(|l| table.health_for(l)).collect();
        assert_eq!(healths.len(), 20);
        assert!(healths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.health_for(1), 10);
        assert_eq!(table.health_for(20), 200);
    }

    #[test]
    fn test_bounds() {
        let table = LevelTable::default();
        assert_eq!(table.max_level(), DEFAULT_MAX_LEVEL);
        assert!(!table.contains(0));
        assert!(table.contains(1));
        assert!(table.contains(20));
        assert!(!table.contains(21));
        assert_eq!(table.health_for(0), table.health_for(1));
        assert_eq!(table.health_for(99), table.health_for(20));
    }

    #[test]
    fn test_zero_max_level_is_raised() {
        assert_eq!(LevelTable::new(0).max_level(), 1);
    }

    #[test]
    fn test_huge_max_level_is_capped() {
        let table = LevelTable::new(90_000);
        assert_eq!(table.max_level(), LEVEL_CAP);
        assert_eq!(table.health_for(u32::MAX), LEVEL_CAP as i32 * 10);

        let table = LevelTable::new(u32::MAX);
        assert_eq!(table.max_level(), LEVEL_CAP);
    }
}
