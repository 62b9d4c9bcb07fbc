//! Infrastructure layer - Adapters behind the application ports
//!
//! This layer contains:
//! - Config: Application configuration from the environment
//! - Random: thread and seeded RNG adapters
//! - Item catalog: in-memory catalog, optionally loaded from JSON
//! - Save channel: tokio channel notifier and its listener task
//! - State: wiring of the session's services

pub mod config;
pub mod item_catalog;
pub mod random_adapter;
pub mod save_channel;
pub mod state;
