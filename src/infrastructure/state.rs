//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::{RandomPort, SaveNotifierPort};
use crate::application::services::{
    AttributeRoller, EditorContext, EquipmentSlotResolver, RosterService,
};
use crate::domain::value_objects::{IdentityPools, LevelTable};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::item_catalog::InMemoryItemCatalog;
use crate::infrastructure::random_adapter::{SeededRngAdapter, ThreadRngAdapter};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<InMemoryItemCatalog>,
    /// Session-scoped coordinator handed to every screen
    pub roster: RosterService,
}

impl AppState {
    pub fn new(config: AppConfig, notifier: Arc<dyn SaveNotifierPort>) -> Result<Self> {
        let catalog = Arc::new(match &config.item_catalog_path {
            Some(path) => InMemoryItemCatalog::load(path)
                .with_context(|| format!("Loading item catalog from {}", path.display()))?,
            None => InMemoryItemCatalog::standard(),
        });

        let pools = match &config.identity_pools_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Reading identity pools from {}", path.display()))?;
                serde_json::from_str(&json).context("Identity pools file is not valid JSON")?
            }
            None => IdentityPools::default(),
        };

        let rng: Arc<dyn RandomPort> = match config.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded rolls");
                Arc::new(SeededRngAdapter::new(seed))
            }
            None => Arc::new(ThreadRngAdapter::new()),
        };

        let levels = Arc::new(LevelTable::new(config.max_level));
        let roller = Arc::new(AttributeRoller::new(
            rng,
            catalog.clone(),
            pools,
            levels.clone(),
            config.abilities,
        ));
        let ctx = EditorContext {
            levels,
            abilities: config.abilities,
            roller,
            resolver: Arc::new(EquipmentSlotResolver::new(catalog.clone())),
            notifier,
            default_character_image: config.default_character_image.clone(),
            default_item_image: config.default_item_image.clone(),
        };
        let roster = RosterService::new(ctx, catalog.clone());

        Ok(Self {
            config,
            catalog,
            roster,
        })
    }
}
