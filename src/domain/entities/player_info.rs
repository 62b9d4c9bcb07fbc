//! Combatant summary used when preparing a battle round

use serde::{Deserialize, Serialize};

use super::Character;
use crate::domain::value_objects::{CharacterJob, MonsterJob, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerType {
    #[default]
    Unknown,
    Character,
    Monster,
}

/// A character or monster as it stands in battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub player_type: PlayerType,
    pub name: String,
    pub image_uri: String,
    pub level: u32,
    pub job: CharacterJob,
    pub monster_job: MonsterJob,
    pub attack: i32,
    pub speed: i32,
    pub defense: i32,
    pub current_health: i32,
    pub max_health: i32,
}

impl Default for PlayerInfo {
    fn default() -> Self {
        Self {
            id: PlayerId::new(),
            player_type: PlayerType::Unknown,
            name: String::new(),
            image_uri: String::new(),
            level: 1,
            job: CharacterJob::Unknown,
            monster_job: MonsterJob::Unknown,
            attack: 1,
            speed: 1,
            defense: 1,
            current_health: 0,
            max_health: 0,
        }
    }
}

impl PlayerInfo {
    pub fn monster(name: impl Into<String>, level: u32, monster_job: MonsterJob) -> Self {
        Self {
            player_type: PlayerType::Monster,
            name: name.into(),
            level,
            monster_job,
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    pub fn with_stats(mut self, attack: i32, speed: i32, defense: i32) -> Self {
        self.attack = attack;
        self.speed = speed;
        self.defense = defense;
        self
    }

    pub fn with_health(mut self, max_health: i32) -> Self {
        self.current_health = max_health;
        self.max_health = max_health;
        self
    }
}

impl From<&Character> for PlayerInfo {
    fn from(character: &Character) -> Self {
        Self {
            id: PlayerId::new(),
            player_type: PlayerType::Character,
            name: character.name.clone(),
            image_uri: character.image_uri.clone(),
            level: character.level,
            job: character.job,
            monster_job: MonsterJob::Unknown,
            attack: character.attack,
            speed: character.speed,
            defense: character.defense,
            current_health: character.max_health,
            max_health: character.max_health,
        }
    }
}
