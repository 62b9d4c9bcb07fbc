//! Domain events

mod domain_events;

pub use domain_events::{DomainEvent, EventMetadata};
