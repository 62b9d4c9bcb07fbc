//! Battle state aggregate - the combatants and round counter shared by the
//! battle screens
//!
//! Owned by the roster coordinator and handed to screens by reference.

use crate::domain::entities::{Character, PlayerInfo, PlayerType};

#[derive(Debug, Clone, Default)]
pub struct BattleState {
    pub round_count: u32,
    /// Everyone in the fight, characters and monsters alike
    pub players: Vec<PlayerInfo>,
    pub monsters: Vec<PlayerInfo>,
}

impl BattleState {
    /// Start a fight between the given party and monsters, at round 1
    pub fn begin<'a>(
        party: impl IntoIterator<Item = &'a Character>,
        monsters: Vec<PlayerInfo>,
    ) -> Self {
        let mut players: Vec<PlayerInfo> = party.into_iter().map(PlayerInfo::from).collect();
        players.extend(monsters.iter().cloned());
        Self {
            round_count: 1,
            players,
            monsters,
        }
    }

    pub fn next_round(&mut self) -> u32 {
        self.round_count += 1;
        self.round_count
    }

    /// Players that are characters, in turn order
    pub fn characters(&self) -> impl Iterator<Item = &PlayerInfo> {
        self.players
            .iter()
            .filter(|p| p.player_type == PlayerType::Character)
    }
}
