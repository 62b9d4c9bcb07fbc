//! In-memory item catalog
//!
//! Seeded with a built-in set of items, or loaded from a JSON array of items.
//! Items in the JSON may omit their id; one is assigned on load.

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};

use crate::application::ports::outbound::ItemCatalogPort;
use crate::domain::entities::Item;
use crate::domain::value_objects::{ItemAttribute, ItemId, ItemLocation};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read item catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse item catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct InMemoryItemCatalog {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        let items = items
            .into_iter()
            .map(|mut item| {
                item.id.get_or_insert_with(ItemId::new);
                item
            })
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), items = catalog.len(), "Loaded item catalog");
        Ok(catalog)
    }

    /// The built-in starter items, at least one per location
    pub fn standard() -> Self {
        Self::new(vec![
            Item::new("Iron Helm", ItemLocation::Head)
                .with_description("Dented but dependable")
                .with_image("helm.png")
                .with_attribute(ItemAttribute::Defense, 2),
            Item::new("Night Visor", ItemLocation::Head)
                .with_description("Sees through smoke")
                .with_image("visor.png")
                .with_attribute(ItemAttribute::Speed, 1),
            Item::new("Amulet of Mending", ItemLocation::Necklace)
                .with_description("Warm to the touch")
                .with_image("amulet.png")
                .with_attribute(ItemAttribute::MaxHealth, 5),
            Item::new("Longsword", ItemLocation::PrimaryHand)
                .with_description("Balanced steel")
                .with_image("sword.png")
                .with_attribute(ItemAttribute::Attack, 3)
                .with_combat(1, 6),
            Item::new("Crossbow", ItemLocation::PrimaryHand)
                .with_description("Slow to load, hard to ignore")
                .with_image("crossbow.png")
                .with_attribute(ItemAttribute::Attack, 2)
                .with_combat(5, 4),
            Item::new("Tower Shield", ItemLocation::OffHand)
                .with_description("A wall with a handle")
                .with_image("shield.png")
                .with_attribute(ItemAttribute::Defense, 3),
            Item::new("Ring of Haste", ItemLocation::Finger)
                .with_description("Hums faintly")
                .with_image("ring_blue.png")
                .with_attribute(ItemAttribute::Speed, 2),
            Item::new("Signet Ring", ItemLocation::Finger)
                .with_description("Opens certain doors")
                .with_image("ring_gold.png")
                .with_attribute(ItemAttribute::Defense, 1),
            Item::new("Soft Boots", ItemLocation::Feet)
                .with_description("Quiet on stone floors")
                .with_image("boots.png")
                .with_attribute(ItemAttribute::Speed, 1),
        ])
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemCatalogPort for InMemoryItemCatalog {
    fn items_for_location(&self, location: ItemLocation) -> Vec<Item> {
        self.read()
            .iter()
            .filter(|item| item.location == location)
            .cloned()
            .collect()
    }

    fn get(&self, id: ItemId) -> Option<Item> {
        self.read().iter().find(|item| item.id == Some(id)).cloned()
    }

    fn insert(&self, mut item: Item) -> ItemId {
        let id = *item.id.get_or_insert_with(ItemId::new);
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        match items.iter_mut().find(|existing| existing.id == Some(id)) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        debug!(item_id = %id, total = items.len(), "Catalog item stored");
        id
    }
}
