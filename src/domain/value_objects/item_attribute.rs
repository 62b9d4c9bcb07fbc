//! The stat an item modifies

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemAttribute {
    #[default]
    Unknown,
    Speed,
    Defense,
    Attack,
    CurrentHealth,
    MaxHealth,
}

impl ItemAttribute {
    pub const SELECTABLE: [ItemAttribute; 5] = [
        ItemAttribute::Speed,
        ItemAttribute::Defense,
        ItemAttribute::Attack,
        ItemAttribute::CurrentHealth,
        ItemAttribute::MaxHealth,
    ];

    pub fn first_selectable() -> Self {
        Self::SELECTABLE[0]
    }

    pub fn message(self) -> &'static str {
        match self {
            ItemAttribute::Unknown => "Unknown",
            ItemAttribute::Speed => "Speed",
            ItemAttribute::Defense => "Defense",
            ItemAttribute::Attack => "Attack",
            ItemAttribute::CurrentHealth => "Current Health",
            ItemAttribute::MaxHealth => "Max Health",
        }
    }
}

impl fmt::Display for ItemAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
