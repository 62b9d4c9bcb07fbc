//! Character entity - a player character on the roster

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CharacterId, CharacterJob, EquipmentSlot, ItemId, LevelTable,
};

/// A player character with stats and one optional item per equipment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub code_name: String,
    pub job: CharacterJob,
    /// Always within `1..=LevelTable::max_level()`; change through [`Character::set_level`]
    pub level: u32,
    pub attack: i32,
    pub speed: i32,
    pub defense: i32,
    /// Derived from `level`
    pub max_health: i32,
    /// Path to portrait image asset
    pub image_uri: String,

    // Equipment
    pub head: Option<ItemId>,
    pub necklace: Option<ItemId>,
    pub primary_hand: Option<ItemId>,
    pub off_hand: Option<ItemId>,
    pub right_finger: Option<ItemId>,
    pub left_finger: Option<ItemId>,
    pub feet: Option<ItemId>,
}

impl Character {
    /// A blank level 1 character with health taken from the table
    pub fn blank(levels: &LevelTable) -> Self {
        Self {
            id: CharacterId::new(),
            name: String::new(),
            description: String::new(),
            code_name: String::new(),
            job: CharacterJob::Unknown,
            level: 1,
            attack: 1,
            speed: 1,
            defense: 1,
            max_health: levels.health_for(1),
            image_uri: String::new(),
            head: None,
            necklace: None,
            primary_hand: None,
            off_hand: None,
            right_finger: None,
            left_finger: None,
            feet: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_code_name(mut self, code_name: impl Into<String>) -> Self {
        self.code_name = code_name.into();
        self
    }

    pub fn with_job(mut self, job: CharacterJob) -> Self {
        self.job = job;
        self
    }

    /// Change level and recompute max health.
    ///
    /// Returns false and leaves the character untouched when the level is
    /// outside the table.
    pub fn set_level(&mut self, level: u32, levels: &LevelTable) -> bool {
        if !levels.contains(level) {
            return false;
        }
        self.level = level;
        self.max_health = levels.health_for(level);
        true
    }

    /// Recompute max health from the current level
    pub fn refresh_health(&mut self, levels: &LevelTable) {
        self.max_health = levels.health_for(self.level);
    }

    pub fn item_in(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Head => self.head,
            EquipmentSlot::Necklace => self.necklace,
            EquipmentSlot::PrimaryHand => self.primary_hand,
            EquipmentSlot::OffHand => self.off_hand,
            EquipmentSlot::RightFinger => self.right_finger,
            EquipmentSlot::LeftFinger => self.left_finger,
            EquipmentSlot::Feet => self.feet,
            EquipmentSlot::Unknown => None,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> Option<&mut Option<ItemId>> {
        match slot {
            EquipmentSlot::Head => Some(&mut self.head),
            EquipmentSlot::Necklace => Some(&mut self.necklace),
            EquipmentSlot::PrimaryHand => Some(&mut self.primary_hand),
            EquipmentSlot::OffHand => Some(&mut self.off_hand),
            EquipmentSlot::RightFinger => Some(&mut self.right_finger),
            EquipmentSlot::LeftFinger => Some(&mut self.left_finger),
            EquipmentSlot::Feet => Some(&mut self.feet),
            EquipmentSlot::Unknown => None,
        }
    }

    /// Put an item in a slot (`None` clears it). Returns what was there before.
    ///
    /// The `Unknown` slot holds nothing, so equipping it is a no-op.
    pub fn equip(&mut self, slot: EquipmentSlot, item: Option<ItemId>) -> Option<ItemId> {
        match self.slot_mut(slot) {
            Some(current) => std::mem::replace(current, item),
            None => None,
        }
    }

    /// Filled slots in display order
    pub fn equipped(&self) -> impl Iterator<Item = (EquipmentSlot, ItemId)> + '_ {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(|slot| self.item_in(slot).map(|id| (slot, id)))
    }

    /// Overwrite every field with the snapshot's
    pub fn restore_from(&mut self, snapshot: &Character) {
        self.clone_from(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_character() {
        let levels = LevelTable::default();
        let character = Character::blank(&levels);
        assert_eq!(character.level, 1);
        assert_eq!(character.max_health, levels.health_for(1));
        assert_eq!(character.equipped().count(), 0);
    }

    #[test]
    fn test_set_level_recomputes_health() {
        let levels = LevelTable::default();
        let mut character = Character::blank(&levels);
        assert!(character.set_level(7, &levels));
        assert_eq!(character.level, 7);
        assert_eq!(character.max_health, levels.health_for(7));
    }

    #[test]
    fn test_set_level_rejects_out_of_range() {
        let levels = LevelTable::default();
        let mut character = Character::blank(&levels);
        assert!(!character.set_level(0, &levels));
        assert!(!character.set_level(levels.max_level() + 1, &levels));
        assert_eq!(character.level, 1);
        assert_eq!(character.max_health, levels.health_for(1));
    }

    #[test]
    fn test_equip_is_per_slot() {
        let mut character = Character::blank(&LevelTable::default());
        let ring = ItemId::new();
        assert_eq!(character.equip(EquipmentSlot::RightFinger, Some(ring)), None);

        assert_eq!(character.item_in(EquipmentSlot::RightFinger), Some(ring));
        assert_eq!(character.item_in(EquipmentSlot::LeftFinger), None);

        assert_eq!(character.equip(EquipmentSlot::RightFinger, None), Some(ring));
        assert_eq!(character.item_in(EquipmentSlot::RightFinger), None);
    }

    #[test]
    fn test_unknown_slot_holds_nothing() {
        let mut character = Character::blank(&LevelTable::default());
        assert_eq!(character.equip(EquipmentSlot::Unknown, Some(ItemId::new())), None);
        assert_eq!(character.item_in(EquipmentSlot::Unknown), None);
        assert_eq!(character.equipped().count(), 0);
    }

    #[test]
    fn test_restore_from_snapshot() {
        let levels = LevelTable::default();
        let snapshot = Character::blank(&levels)
            .with_name("Aria")
            .with_job(CharacterJob::Cleric);
        let mut working = snapshot.clone();
        working.name = "Changed".into();
        working.equip(EquipmentSlot::Feet, Some(ItemId::new()));
        working.restore_from(&snapshot);
        assert_eq!(working, snapshot);
    }
}
