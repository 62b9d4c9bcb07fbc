//! Outbound ports - Interfaces that the application requires from external systems

mod item_catalog_port;
mod random_port;
mod save_notifier_port;

pub use item_catalog_port::ItemCatalogPort;
pub use random_port::RandomPort;
pub use save_notifier_port::{NotifyError, SaveNotifierPort};

#[cfg(test)]
pub use random_port::FixedRandomPort;
#[cfg(test)]
pub use save_notifier_port::RecordingNotifier;
