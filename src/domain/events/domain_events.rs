//! Domain events - Notifications of finalized records
//!
//! Editors publish these through the save notifier once a record passes
//! validation. They are the only way records leave this crate.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Character, Item};

/// Base data for all events
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Optional correlation ID for tracing
    pub correlation_id: Option<String>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            correlation_id: None,
        }
    }
}

impl EventMetadata {
    /// Metadata tied to the record the event is about
    pub fn for_record(id: impl ToString) -> Self {
        Self {
            correlation_id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// A character was finished in the create flow
    CharacterCreated {
        metadata: EventMetadata,
        character: Character,
    },

    /// An existing character was saved from the update flow
    CharacterUpdated {
        metadata: EventMetadata,
        character: Character,
    },

    /// A new item was finished in the item create flow
    ItemCreated { metadata: EventMetadata, item: Item },
}

impl DomainEvent {
    pub fn character_created(character: Character) -> Self {
        Self::CharacterCreated {
            metadata: EventMetadata::for_record(character.id),
            character,
        }
    }

    pub fn character_updated(character: Character) -> Self {
        Self::CharacterUpdated {
            metadata: EventMetadata::for_record(character.id),
            character,
        }
    }

    pub fn item_created(item: Item) -> Self {
        let metadata = match item.id {
            Some(id) => EventMetadata::for_record(id),
            None => EventMetadata::default(),
        };
        Self::ItemCreated { metadata, item }
    }

    pub fn metadata(&self) -> &EventMetadata {
        match self {
            Self::CharacterCreated { metadata, .. }
            | Self::CharacterUpdated { metadata, .. }
            | Self::ItemCreated { metadata, .. } => metadata,
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CharacterCreated { .. } => "character_created",
            Self::CharacterUpdated { .. } => "character_updated",
            Self::ItemCreated { .. } => "item_created",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ItemLocation, LevelTable};

    #[test]
    fn test_events_correlate_to_their_record() {
        let character = Character::blank(&LevelTable::default());
        let id = character.id.to_string();
        let created = DomainEvent::character_created(character.clone());
        let updated = DomainEvent::character_updated(character);
        assert_eq!(created.metadata().correlation_id.as_deref(), Some(id.as_str()));
        assert_eq!(updated.metadata().correlation_id.as_deref(), Some(id.as_str()));
        assert_eq!(created.kind(), "character_created");
        assert_eq!(updated.kind(), "character_updated");
    }

    #[test]
    fn test_item_without_id_has_no_correlation() {
        let mut item = Item::new("Helm", ItemLocation::Head);
        let with_id = DomainEvent::item_created(item.clone());
        assert!(with_id.metadata().correlation_id.is_some());

        item.id = None;
        let without_id = DomainEvent::item_created(item);
        assert_eq!(without_id.metadata().correlation_id, None);
    }
}
