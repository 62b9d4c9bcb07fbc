//! Save notifier port - announces finalized records to a listener outside
//! the editors

use crate::domain::events::DomainEvent;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Save listener is no longer receiving")]
    ChannelClosed,
}

pub trait SaveNotifierPort: Send + Sync {
    fn publish(&self, event: DomainEvent) -> Result<(), NotifyError>;
}

/// Notifier that keeps every event it is handed, for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: std::sync::Mutex<Vec<DomainEvent>>,
    closed: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Make every later publish fail
    pub fn close(&self) {
        self.closed.store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl SaveNotifierPort for RecordingNotifier {
    fn publish(&self, event: DomainEvent) -> Result<(), NotifyError> {
        if self.closed.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(NotifyError::ChannelClosed);
        }
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
