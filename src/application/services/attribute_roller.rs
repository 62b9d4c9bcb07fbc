//! Attribute Roller - Randomizes a character in place
//!
//! Used by the "roll dice" action on both the create and update flows. The
//! level always survives a roll; the job survives only on update.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ports::outbound::{ItemCatalogPort, RandomPort};
use crate::application::services::character_editor::EditorMode;
use crate::domain::entities::Character;
use crate::domain::value_objects::{
    AbilityRange, CharacterJob, EquipmentSlot, IdentityPools, ItemId, ItemLocation, LevelTable,
};

pub struct AttributeRoller {
    rng: Arc<dyn RandomPort>,
    catalog: Arc<dyn ItemCatalogPort>,
    pools: IdentityPools,
    levels: Arc<LevelTable>,
    abilities: AbilityRange,
}

impl AttributeRoller {
    pub fn new(
        rng: Arc<dyn RandomPort>,
        catalog: Arc<dyn ItemCatalogPort>,
        pools: IdentityPools,
        levels: Arc<LevelTable>,
        abilities: AbilityRange,
    ) -> Self {
        Self {
            rng,
            catalog,
            pools,
            levels,
            abilities,
        }
    }

    /// Overwrite every randomizable field of `character`
    #[instrument(skip(self, character), fields(character_id = %character.id, level = character.level))]
    pub fn randomize(&self, character: &mut Character, mode: EditorMode) {
        character.name = self.roll_name();
        character.description = self.roll_description();
        character.code_name = self.roll_code_name();
        if mode == EditorMode::Create {
            character.job = self.roll_job();
        }

        character.attack = self.roll_ability();
        character.speed = self.roll_ability();
        character.defense = self.roll_ability();

        for slot in EquipmentSlot::ALL {
            character.equip(slot, self.roll_item(slot.location()));
        }

        character.refresh_health(&self.levels);
        character.image_uri = self.roll_image();

        debug!(
            name = %character.name,
            job = %character.job,
            equipped = character.equipped().count(),
            "Rolled character"
        );
    }

    pub fn roll_name(&self) -> String {
        self.pick(&self.pools.names)
    }

    pub fn roll_description(&self) -> String {
        self.pick(&self.pools.descriptions)
    }

    pub fn roll_code_name(&self) -> String {
        self.pick(&self.pools.code_names)
    }

    pub fn roll_image(&self) -> String {
        self.pick(&self.pools.images)
    }

    pub fn roll_job(&self) -> CharacterJob {
        self.rng
            .choose_index(CharacterJob::SELECTABLE.len())
            .map(|i| CharacterJob::SELECTABLE[i])
            .unwrap_or_else(CharacterJob::first_selectable)
    }

    pub fn roll_ability(&self) -> i32 {
        self.rng.random_range(self.abilities.min, self.abilities.max)
    }

    /// Pick one of the location's items, or nothing.
    ///
    /// "Nothing" is one extra outcome alongside each catalog item. A location
    /// with no items always rolls nothing.
    pub fn roll_item(&self, location: ItemLocation) -> Option<ItemId> {
        let items = self.catalog.items_for_location(location);
        if items.is_empty() {
            return None;
        }
        let index = self.rng.choose_index(items.len() + 1)?;
        items.get(index).and_then(|item| item.id)
    }

    fn pick(&self, pool: &[String]) -> String {
        self.rng
            .choose_index(pool.len())
            .map(|i| pool[i].clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::FixedRandomPort;
    use crate::domain::entities::Item;
    use crate::infrastructure::item_catalog::InMemoryItemCatalog;
    use crate::infrastructure::random_adapter::SeededRngAdapter;

    fn catalog() -> Arc<InMemoryItemCatalog> {
        Arc::new(InMemoryItemCatalog::standard())
    }

    fn build_roller(rng: Arc<dyn RandomPort>, catalog: Arc<InMemoryItemCatalog>) -> AttributeRoller {
        AttributeRoller::new(
            rng,
            catalog,
            IdentityPools::default(),
            Arc::new(LevelTable::default()),
            AbilityRange::default(),
        )
    }

    #[test]
    fn test_randomize_preserves_level_and_derives_health() {
        let levels = LevelTable::default();
        let roller = build_roller(Arc::new(SeededRngAdapter::new(7)), catalog());
        let mut character = Character::blank(&levels);
        character.set_level(12, &levels);

        roller.randomize(&mut character, EditorMode::Create);

        assert_eq!(character.level, 12);
        assert_eq!(character.max_health, levels.health_for(12));
        assert!(!character.name.is_empty());
        assert!(!character.description.is_empty());
        assert!(!character.code_name.is_empty());
        assert!(!character.image_uri.is_empty());
        assert_ne!(character.job, CharacterJob::Unknown);
    }

    #[test]
    fn test_update_mode_keeps_job() {
        let levels = LevelTable::default();
        let roller = build_roller(Arc::new(SeededRngAdapter::new(11)), catalog());
        for _ in 0..50 {
            let mut character = Character::blank(&levels).with_job(CharacterJob::Medic);
            roller.randomize(&mut character, EditorMode::Update);
            assert_eq!(character.job, CharacterJob::Medic);
        }
    }

    #[test]
    fn test_abilities_stay_in_range() {
        let levels = LevelTable::default();
        let range = AbilityRange::default();
        let roller = build_roller(Arc::new(SeededRngAdapter::new(3)), catalog());
        for _ in 0..200 {
            let mut character = Character::blank(&levels);
            roller.randomize(&mut character, EditorMode::Create);
            assert!(range.contains(character.attack));
            assert!(range.contains(character.speed));
            assert!(range.contains(character.defense));
        }
    }

    #[test]
    fn test_rolled_items_fit_their_slots() {
        let levels = LevelTable::default();
        let catalog = catalog();
        let roller = build_roller(Arc::new(SeededRngAdapter::new(5)), catalog.clone());
        for _ in 0..100 {
            let mut character = Character::blank(&levels);
            roller.randomize(&mut character, EditorMode::Create);
            for (slot, id) in character.equipped() {
                let item = catalog.get(id).expect("rolled item exists in catalog");
                assert_eq!(item.location, slot.location(), "{slot}");
            }
        }
    }

    #[test]
    fn test_fields_change_across_rolls() {
        let levels = LevelTable::default();
        let roller = build_roller(Arc::new(SeededRngAdapter::new(99)), catalog());
        let mut character = Character::blank(&levels);
        roller.randomize(&mut character, EditorMode::Create);

        let mut name_changed = false;
        let mut description_changed = false;
        let mut code_changed = false;
        let mut image_changed = false;
        let mut stats_changed = false;
        let mut head_changed = false;
        let mut feet_changed = false;
        for _ in 0..30 {
            let before = character.clone();
            roller.randomize(&mut character, EditorMode::Create);
            name_changed |= before.name != character.name;
            description_changed |= before.description != character.description;
            code_changed |= before.code_name != character.code_name;
            image_changed |= before.image_uri != character.image_uri;
            stats_changed |= (before.attack, before.speed, before.defense)
                != (character.attack, character.speed, character.defense);
            head_changed |= before.head != character.head;
            feet_changed |= before.feet != character.feet;
        }
        assert!(name_changed);
        assert!(description_changed);
        assert!(code_changed);
        assert!(image_changed);
        assert!(stats_changed);
        assert!(head_changed);
        assert!(feet_changed);
    }

    #[test]
    fn test_last_index_rolls_no_item() {
        let catalog = Arc::new(InMemoryItemCatalog::new(vec![Item::new(
            "Helm",
            ItemLocation::Head,
        )]));
        // index 1 of [Helm, nothing]
        let roller = build_roller(Arc::new(FixedRandomPort::constant(1)), catalog.clone());
        assert_eq!(roller.roll_item(ItemLocation::Head), None);

        let roller = build_roller(Arc::new(FixedRandomPort::constant(0)), catalog);
        assert!(roller.roll_item(ItemLocation::Head).is_some());
    }

    #[test]
    fn test_empty_location_rolls_nothing() {
        let catalog = Arc::new(InMemoryItemCatalog::new(Vec::new()));
        let roller = build_roller(Arc::new(FixedRandomPort::constant(0)), catalog);
        for location in ItemLocation::SELECTABLE {
            assert_eq!(roller.roll_item(location), None);
        }
    }

    #[test]
    fn test_empty_pools_roll_empty_strings() {
        let roller = AttributeRoller::new(
            Arc::new(FixedRandomPort::constant(0)),
            catalog(),
            IdentityPools {
                names: Vec::new(),
                descriptions: Vec::new(),
                code_names: Vec::new(),
                images: Vec::new(),
            },
            Arc::new(LevelTable::default()),
            AbilityRange::default(),
        );
        assert_eq!(roller.roll_name(), "");
        assert_eq!(roller.roll_image(), "");
    }
}
