//! Item entity - equipment a character can wear

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ItemAttribute, ItemId, ItemLocation};

/// An item in the catalog.
///
/// `id` is `None` only for placeholder items: the empty-slot sentinel and the
/// "None" pick-list choice that clears a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_uri: String,
    pub location: ItemLocation,
    #[serde(default)]
    pub attribute: ItemAttribute,
    #[serde(default)]
    pub range: i32,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub damage: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, location: ItemLocation) -> Self {
        Self {
            id: Some(ItemId::new()),
            name: name.into(),
            description: String::new(),
            image_uri: String::new(),
            location,
            attribute: ItemAttribute::Unknown,
            range: 0,
            value: 0,
            damage: 0,
        }
    }

    /// Placeholder shown for a slot that holds nothing
    pub fn empty_slot(location: ItemLocation, image_uri: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            image_uri: image_uri.into(),
            location,
            attribute: ItemAttribute::Unknown,
            range: 0,
            value: 0,
            damage: 0,
        }
    }

    /// The pick-list entry that clears a slot when chosen
    pub fn none_choice(location: ItemLocation, image_uri: impl Into<String>) -> Self {
        Self {
            name: "None".to_string(),
            description: "None".to_string(),
            ..Self::empty_slot(location, image_uri)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    pub fn with_attribute(mut self, attribute: ItemAttribute, value: i32) -> Self {
        self.attribute = attribute;
        self.value = value;
        self
    }

    pub fn with_combat(mut self, range: i32, damage: i32) -> Self {
        self.range = range;
        self.damage = damage;
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_have_no_id() {
        let empty = Item::empty_slot(ItemLocation::Feet, "icon_add.png");
        assert!(empty.is_placeholder());
        assert_eq!(empty.location, ItemLocation::Feet);
        assert_eq!(empty.image_uri, "icon_add.png");

        let none = Item::none_choice(ItemLocation::Head, "icon_cancel.png");
        assert!(none.is_placeholder());
        assert_eq!(none.name, "None");
        assert_eq!(none.description, "None");
    }

    #[test]
    fn test_catalog_json_defaults() {
        let json = r#"{"name": "Boots", "location": "Feet"}"#;
        let item: Item = serde_json::from_str(json).expect("valid item json");
        assert_eq!(item.name, "Boots");
        assert_eq!(item.location, ItemLocation::Feet);
        assert_eq!(item.attribute, ItemAttribute::Unknown);
        assert!(item.id.is_none());
    }
}
