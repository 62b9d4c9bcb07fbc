//! Named body locations on a character that can each hold one item

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ItemLocation;

/// A slot on a character's body. Holds at most one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Head,
    Necklace,
    PrimaryHand,
    OffHand,
    RightFinger,
    LeftFinger,
    Feet,
    Unknown,
}

impl EquipmentSlot {
    /// Every real slot, in display order
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Head,
        EquipmentSlot::Necklace,
        EquipmentSlot::PrimaryHand,
        EquipmentSlot::OffHand,
        EquipmentSlot::RightFinger,
        EquipmentSlot::LeftFinger,
        EquipmentSlot::Feet,
    ];

    /// The item location that may be placed in this slot
    pub fn location(self) -> ItemLocation {
        match self {
            EquipmentSlot::Head => ItemLocation::Head,
            EquipmentSlot::Necklace => ItemLocation::Necklace,
            EquipmentSlot::PrimaryHand => ItemLocation::PrimaryHand,
            EquipmentSlot::OffHand => ItemLocation::OffHand,
            EquipmentSlot::RightFinger | EquipmentSlot::LeftFinger => ItemLocation::Finger,
            EquipmentSlot::Feet => ItemLocation::Feet,
            EquipmentSlot::Unknown => ItemLocation::Unknown,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EquipmentSlot::Head => "Head",
            EquipmentSlot::Necklace => "Necklace",
            EquipmentSlot::PrimaryHand => "Primary Hand",
            EquipmentSlot::OffHand => "Off Hand",
            EquipmentSlot::RightFinger => "Right Finger",
            EquipmentSlot::LeftFinger => "Left Finger",
            EquipmentSlot::Feet => "Feet",
            EquipmentSlot::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
