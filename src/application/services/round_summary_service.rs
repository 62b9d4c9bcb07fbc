//! Round Summary Service - Lays out the "prepare for next round" screen
//!
//! Characters and monsters each fill their own three-column grid.

use crate::domain::aggregates::BattleState;
use crate::domain::entities::PlayerInfo;
use crate::domain::value_objects::MonsterJob;

pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn for_index(index: usize) -> Self {
        Self {
            row: index / GRID_COLUMNS,
            column: index % GRID_COLUMNS,
        }
    }
}

/// One combatant's box on the round screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub position: GridPosition,
    pub image_uri: String,
    pub name: String,
    /// e.g. "Lvl:3/Fighter"
    pub level_and_job: String,
    /// e.g. "Atk:4 Spd:2 Def:7"
    pub stats: String,
}

impl PlayerCard {
    pub fn new(info: &PlayerInfo, position: GridPosition) -> Self {
        let job = if info.monster_job != MonsterJob::Unknown {
            info.monster_job.message()
        } else {
            info.job.message()
        };
        Self {
            position,
            image_uri: info.image_uri.clone(),
            name: info.name.clone(),
            level_and_job: format!("Lvl:{}/{}", info.level, job),
            stats: format!("Atk:{} Spd:{} Def:{}", info.attack, info.speed, info.defense),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub title: String,
    pub party: Vec<PlayerCard>,
    pub monsters: Vec<PlayerCard>,
}

pub struct RoundSummaryService;

impl RoundSummaryService {
    pub fn build(state: &BattleState) -> RoundSummary {
        RoundSummary {
            title: format!("Prepare for Round {}!", state.round_count),
            party: Self::layout(state.characters()),
            monsters: Self::layout(state.monsters.iter()),
        }
    }

    fn layout<'a>(players: impl Iterator<Item = &'a PlayerInfo>) -> Vec<PlayerCard> {
        players
            .enumerate()
            .map(|(index, info)| PlayerCard::new(info, GridPosition::for_index(index)))
            .collect()
    }
}
