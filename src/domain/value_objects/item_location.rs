//! Where an item can be worn, as declared by the item itself

use std::fmt;

use serde::{Deserialize, Serialize};

/// The body location an item occupies.
///
/// Both finger slots on a character draw from [`ItemLocation::Finger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemLocation {
    #[default]
    Unknown,
    Head,
    Necklace,
    PrimaryHand,
    OffHand,
    Finger,
    Feet,
}

impl ItemLocation {
    /// Locations offered when creating an item, in picker order
    pub const SELECTABLE: [ItemLocation; 6] = [
        ItemLocation::Head,
        ItemLocation::Necklace,
        ItemLocation::PrimaryHand,
        ItemLocation::OffHand,
        ItemLocation::Finger,
        ItemLocation::Feet,
    ];

    pub fn first_selectable() -> Self {
        Self::SELECTABLE[0]
    }

    /// Human readable label
    pub fn message(self) -> &'static str {
        match self {
            ItemLocation::Unknown => "Unknown",
            ItemLocation::Head => "Head",
            ItemLocation::Necklace => "Necklace",
            ItemLocation::PrimaryHand => "Primary Hand",
            ItemLocation::OffHand => "Off Hand",
            ItemLocation::Finger => "Finger",
            ItemLocation::Feet => "Feet",
        }
    }
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_excludes_unknown() {
        assert!(!ItemLocation::SELECTABLE.contains(&ItemLocation::Unknown));
        assert_eq!(ItemLocation::first_selectable(), ItemLocation::Head);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ItemLocation::PrimaryHand.message(), "Primary Hand");
        assert_eq!(ItemLocation::OffHand.to_string(), "Off Hand");
    }
}
