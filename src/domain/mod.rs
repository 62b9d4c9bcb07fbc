//! Domain layer - Core game rules with no I/O
//!
//! This layer contains:
//! - Entities: Character, Item, PlayerInfo
//! - Value Objects: ids, equipment slots, jobs, level table, ability bounds
//! - Aggregates: BattleState
//! - Domain Events: finalized records leaving the editors

pub mod aggregates;
pub mod entities;
pub mod events;
pub mod value_objects;
