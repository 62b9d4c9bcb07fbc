//! Value objects - Immutable objects defined by their attributes

mod ability_range;
mod character_job;
mod equipment_slot;
mod identity_pools;
mod ids;
mod item_attribute;
mod item_location;
mod level_table;
mod monster_job;

pub use ability_range::{AbilityRange, DEFAULT_ABILITY_MAX, DEFAULT_ABILITY_MIN};
pub use character_job::CharacterJob;
pub use equipment_slot::EquipmentSlot;
pub use identity_pools::IdentityPools;
pub use ids::*;
pub use item_attribute::ItemAttribute;
pub use item_location::ItemLocation;
pub use level_table::{LevelTable, DEFAULT_MAX_LEVEL, LEVEL_CAP};
pub use monster_job::MonsterJob;
