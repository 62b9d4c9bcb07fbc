//! Aggregates - Consistency boundaries over several entities

mod battle_state;

pub use battle_state::BattleState;
