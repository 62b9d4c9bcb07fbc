//! WrldBldr Party - Character roster editing core for turn-based RPG screens
//!
//! Layers follow the hexagonal layout:
//! - `domain`: characters, items, battle state and the value objects they use
//! - `application`: editors, roller, validator and the ports they depend on
//! - `infrastructure`: config, catalog, random sources and the save channel

pub mod application;
pub mod domain;
pub mod infrastructure;
