//! Item catalog port - where the editors look up equippable items

use crate::domain::entities::Item;
use crate::domain::value_objects::{ItemId, ItemLocation};

pub trait ItemCatalogPort: Send + Sync {
    /// Every catalog item wearable at a location, in catalog order
    fn items_for_location(&self, location: ItemLocation) -> Vec<Item>;

    /// Look up a single item
    fn get(&self, id: ItemId) -> Option<Item>;

    /// Add a newly created item. Items without an id are given one.
    fn insert(&self, item: Item) -> ItemId;
}
