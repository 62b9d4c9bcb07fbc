//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::domain::value_objects::{
    AbilityRange, DEFAULT_ABILITY_MAX, DEFAULT_ABILITY_MIN, DEFAULT_MAX_LEVEL, LEVEL_CAP,
};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Highest level offered in the level picker
    pub max_level: u32,
    /// Bounds for rolled and slider-set abilities
    pub abilities: AbilityRange,

    /// Portrait used when a character is saved without one
    pub default_character_image: String,
    /// Image used when an item is saved without one
    pub default_item_image: String,

    /// Optional JSON file replacing the built-in item catalog
    pub item_catalog_path: Option<PathBuf>,
    /// Optional JSON file replacing the built-in name and image pools
    pub identity_pools_path: Option<PathBuf>,

    /// Seed for reproducible rolls; thread RNG when unset
    pub rng_seed: Option<u64>,
    /// How many characters the demo session rolls
    pub party_size: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            max_level: parse_or(&lookup, "PARTY_MAX_LEVEL", DEFAULT_MAX_LEVEL)?,
            abilities: AbilityRange::new(
                parse_or(&lookup, "PARTY_ABILITY_MIN", DEFAULT_ABILITY_MIN)?,
                parse_or(&lookup, "PARTY_ABILITY_MAX", DEFAULT_ABILITY_MAX)?,
            ),

            default_character_image: lookup("PARTY_DEFAULT_CHARACTER_IMAGE")
                .unwrap_or_else(|| "knight.png".to_string()),
            default_item_image: lookup("PARTY_DEFAULT_ITEM_IMAGE")
                .unwrap_or_else(|| "item.png".to_string()),

            item_catalog_path: lookup("PARTY_ITEM_CATALOG").map(PathBuf::from),
            identity_pools_path: lookup("PARTY_IDENTITY_POOLS").map(PathBuf::from),

            rng_seed: lookup("PARTY_RNG_SEED")
                .map(|raw| raw.parse())
                .transpose()
                .context("PARTY_RNG_SEED must be an unsigned integer")?,
            party_size: parse_or(&lookup, "PARTY_SIZE", 6)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=LEVEL_CAP).contains(&self.max_level) {
            bail!(
                "PARTY_MAX_LEVEL must be between 1 and {LEVEL_CAP}, got {}",
                self.max_level
            );
        }
        if self.abilities.min > self.abilities.max {
            bail!(
                "PARTY_ABILITY_MIN ({}) cannot exceed PARTY_ABILITY_MAX ({})",
                self.abilities.min,
                self.abilities.max
            );
        }
        Ok(())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).expect("defaults are valid");
        assert_eq!(config.max_level, 20);
        assert_eq!(config.abilities, AbilityRange::new(1, 9));
        assert_eq!(config.default_character_image, "knight.png");
        assert_eq!(config.default_item_image, "item.png");
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.item_catalog_path, None);
        assert_eq!(config.party_size, 6);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PARTY_MAX_LEVEL", "30"),
            ("PARTY_ABILITY_MIN", "2"),
            ("PARTY_ABILITY_MAX", " 12 "),
            ("PARTY_RNG_SEED", "42"),
            ("PARTY_ITEM_CATALOG", "items.json"),
        ])
        .expect("valid overrides");
        assert_eq!(config.max_level, 30);
        assert_eq!(config.abilities, AbilityRange::new(2, 12));
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.item_catalog_path, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn test_max_level_at_cap_builds_table() {
        let config = load(&[("PARTY_MAX_LEVEL", "1000")]).expect("cap is allowed");
        let table = crate::domain::value_objects::LevelTable::new(config.max_level);
        assert_eq!(table.max_level(), 1000);
        assert_eq!(table.health_for(1000), 10_000);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("PARTY_MAX_LEVEL", "lots")]).is_err());
        assert!(load(&[("PARTY_MAX_LEVEL", "0")]).is_err());
        assert!(load(&[("PARTY_MAX_LEVEL", "90000")]).is_err());
        assert!(load(&[("PARTY_RNG_SEED", "-1")]).is_err());
        assert!(load(&[("PARTY_ABILITY_MIN", "8"), ("PARTY_ABILITY_MAX", "3")]).is_err());
    }
}
