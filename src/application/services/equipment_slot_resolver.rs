//! Equipment Slot Resolver - Maps a character's slots to displayable items
//!
//! A slot that holds nothing (or an id the catalog no longer knows) resolves
//! to a placeholder item so every slot always has something to show.

use std::sync::Arc;

use crate::application::ports::outbound::ItemCatalogPort;
use crate::domain::entities::{Character, Item};
use crate::domain::value_objects::{EquipmentSlot, ItemId};

/// Image for a slot with nothing in it
pub const EMPTY_SLOT_IMAGE: &str = "icon_add.png";

/// Image for the pick-list choice that clears a slot
pub const NONE_CHOICE_IMAGE: &str = "icon_cancel.png";

pub struct EquipmentSlotResolver {
    catalog: Arc<dyn ItemCatalogPort>,
}

impl EquipmentSlotResolver {
    pub fn new(catalog: Arc<dyn ItemCatalogPort>) -> Self {
        Self { catalog }
    }

    /// The item in `slot`, or the empty-slot sentinel
    pub fn resolve(&self, character: &Character, slot: EquipmentSlot) -> Item {
        character
            .item_in(slot)
            .and_then(|id| self.catalog.get(id))
            .unwrap_or_else(|| Item::empty_slot(slot.location(), EMPTY_SLOT_IMAGE))
    }

    /// Every slot, in display order
    pub fn resolve_all(&self, character: &Character) -> Vec<(EquipmentSlot, Item)> {
        EquipmentSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.resolve(character, slot)))
            .collect()
    }

    /// Choices offered when assigning `slot`: "None" first, then every
    /// catalog item for the slot's location
    pub fn pick_list(&self, slot: EquipmentSlot) -> Vec<Item> {
        let location = slot.location();
        let mut choices = vec![Item::none_choice(location, NONE_CHOICE_IMAGE)];
        choices.extend(self.catalog.items_for_location(location));
        choices
    }

    /// Whether `item_id` names a catalog item that fits `slot`
    pub fn is_assignable(&self, slot: EquipmentSlot, item_id: ItemId) -> bool {
        slot != EquipmentSlot::Unknown
            && self
                .catalog
                .get(item_id)
                .is_some_and(|item| item.location == slot.location())
    }
}
