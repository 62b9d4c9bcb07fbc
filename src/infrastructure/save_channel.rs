//! Save notifications over a tokio channel
//!
//! Editors publish synchronously; a background task drains the channel.

use tokio::sync::mpsc;

use crate::application::ports::outbound::{NotifyError, SaveNotifierPort};
use crate::domain::events::DomainEvent;

#[derive(Debug, Clone)]
pub struct ChannelSaveNotifier {
    sender: mpsc::UnboundedSender<DomainEvent>,
}

impl ChannelSaveNotifier {
    /// Create a notifier and the receiver its events arrive on
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DomainEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl SaveNotifierPort for ChannelSaveNotifier {
    fn publish(&self, event: DomainEvent) -> Result<(), NotifyError> {
        self.sender
            .send(event)
            .map_err(|_| NotifyError::ChannelClosed)
    }
}

/// Drain saved records until every notifier is dropped. Returns how many
/// events were seen.
pub async fn save_listener(mut receiver: mpsc::UnboundedReceiver<DomainEvent>) -> usize {
    tracing::info!("Starting save listener");
    let mut seen = 0;
    while let Some(event) = receiver.recv().await {
        seen += 1;
        let metadata = event.metadata();
        let timestamp = metadata.timestamp;
        let record = metadata.correlation_id.as_deref().unwrap_or("-");
        match &event {
            DomainEvent::CharacterCreated { character, .. }
            | DomainEvent::CharacterUpdated { character, .. } => {
                match serde_json::to_string(character) {
                    Ok(json) => tracing::info!(
                        kind = event.kind(),
                        %timestamp,
                        record,
                        "Character saved: {}",
                        json
                    ),
                    Err(e) => tracing::warn!("Could not serialize saved character: {}", e),
                }
            }
            DomainEvent::ItemCreated { item, .. } => {
                tracing::info!(
                    kind = event.kind(),
                    %timestamp,
                    record,
                    location = %item.location,
                    "Item saved: {}",
                    item.name
                );
            }
        }
    }
    tracing::info!(seen, "Save listener stopped");
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Character, Item};
    use crate::domain::value_objects::{ItemLocation, LevelTable};

    #[tokio::test]
    async fn test_listener_drains_until_closed() {
        let (notifier, receiver) = ChannelSaveNotifier::channel();
        let listener = tokio::spawn(save_listener(receiver));

        let character = Character::blank(&LevelTable::default()).with_name("Aria");
        notifier
            .publish(DomainEvent::character_created(character))
            .expect("listener running");
        notifier
            .publish(DomainEvent::item_created(Item::new("Helm", ItemLocation::Head)))
            .expect("listener running");
        drop(notifier);

        assert_eq!(listener.await.expect("listener task"), 2);
    }

    #[test]
    fn test_publish_after_receiver_dropped() {
        let (notifier, receiver) = ChannelSaveNotifier::channel();
        drop(receiver);
        let character = Character::blank(&LevelTable::default());
        assert!(matches!(
            notifier.publish(DomainEvent::character_created(character)),
            Err(NotifyError::ChannelClosed)
        ));
    }
}
