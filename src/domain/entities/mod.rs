//! Domain entities - Core business objects with identity

mod character;
mod item;
mod player_info;

pub use character::Character;
pub use item::Item;
pub use player_info::{PlayerInfo, PlayerType};
