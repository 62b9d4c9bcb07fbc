//! Roster Service - Session-scoped owner of the party and the current battle
//!
//! Screens never reach for shared global state. They get an editor or a
//! summary from this service and hand finished editors back to it.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::outbound::ItemCatalogPort;
use crate::application::services::character_editor::{
    CharacterEditor, EditorContext, EditorState,
};
use crate::application::services::item_editor::ItemEditor;
use crate::application::services::round_summary_service::{RoundSummary, RoundSummaryService};
use crate::domain::aggregates::BattleState;
use crate::domain::entities::{Character, PlayerInfo};
use crate::domain::value_objects::{CharacterId, ItemId};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
}

pub struct RosterService {
    ctx: EditorContext,
    catalog: Arc<dyn ItemCatalogPort>,
    characters: Vec<Character>,
    battle: BattleState,
}

impl RosterService {
    pub fn new(ctx: EditorContext, catalog: Arc<dyn ItemCatalogPort>) -> Self {
        Self {
            ctx,
            catalog,
            characters: Vec::new(),
            battle: BattleState::default(),
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.ctx
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn begin_create(&self) -> CharacterEditor {
        CharacterEditor::create(self.ctx.clone())
    }

    /// Open the update flow on a copy of a roster character
    pub fn begin_update(&self, id: CharacterId) -> Result<CharacterEditor, RosterError> {
        let character = self.get(id).ok_or(RosterError::CharacterNotFound(id))?;
        Ok(CharacterEditor::update(self.ctx.clone(), character))
    }

    /// Take back a closed editor. Committed characters are added or replaced;
    /// anything else leaves the roster untouched.
    #[instrument(skip(self, editor), fields(state = %editor.state()))]
    pub fn finish(&mut self, editor: CharacterEditor) -> Option<CharacterId> {
        if editor.state() != EditorState::Committed {
            debug!("Editor not committed, roster unchanged");
            return None;
        }
        let character = editor.into_character();
        let id = character.id;
        match self.characters.iter_mut().find(|c| c.id == id) {
            Some(existing) => *existing = character,
            None => self.characters.push(character),
        }
        info!(character_id = %id, roster_size = self.characters.len(), "Roster updated");
        Some(id)
    }

    pub fn begin_item(&self) -> ItemEditor {
        ItemEditor::create(self.ctx.clone())
    }

    /// Committed items are added to the catalog so they can be equipped
    pub fn finish_item(&mut self, editor: ItemEditor) -> Option<ItemId> {
        if editor.state() != EditorState::Committed {
            return None;
        }
        let id = self.catalog.insert(editor.into_item());
        info!(item_id = %id, "Item added to catalog");
        Some(id)
    }

    /// Start a fight between the whole roster and `monsters`
    pub fn begin_battle(&mut self, monsters: Vec<PlayerInfo>) -> &BattleState {
        self.battle = BattleState::begin(&self.characters, monsters);
        info!(
            party = self.characters.len(),
            monsters = self.battle.monsters.len(),
            "Battle started"
        );
        &self.battle
    }

    pub fn battle(&self) -> &BattleState {
        &self.battle
    }

    pub fn next_round(&mut self) -> RoundSummary {
        let round = self.battle.next_round();
        debug!(round, "Advancing round");
        self.round_summary()
    }

    pub fn round_summary(&self) -> RoundSummary {
        RoundSummaryService::build(&self.battle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::character_editor::tests::{fixture, Fixture};
    use crate::application::services::character_editor::CharacterCommand;
    use crate::application::services::item_editor::ItemCommand;
    use crate::domain::value_objects::{ItemLocation, MonsterJob};

    fn service(f: &Fixture) -> RosterService {
        RosterService::new(f.ctx.clone(), f.catalog.clone())
    }

    fn saved_character(roster: &mut RosterService) -> CharacterId {
        let mut editor = roster.begin_create();
        editor.apply(CharacterCommand::Randomize).expect("editing");
        editor.apply(CharacterCommand::Save).expect("editing");
        roster.finish(editor).expect("committed")
    }

    #[test]
    fn test_create_then_finish_adds_to_roster() {
        let f = fixture(1);
        let mut roster = service(&f);
        let id = saved_character(&mut roster);
        assert_eq!(roster.characters().len(), 1);
        assert!(roster.get(id).is_some());
    }

    #[test]
    fn test_cancelled_create_is_not_added() {
        let f = fixture(2);
        let mut roster = service(&f);
        let mut editor = roster.begin_create();
        editor.apply(CharacterCommand::Randomize).expect("editing");
        editor.apply(CharacterCommand::Cancel).expect("editing");
        assert_eq!(roster.finish(editor), None);
        assert!(roster.characters().is_empty());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let f = fixture(3);
        let mut roster = service(&f);
        let id = saved_character(&mut roster);

        let mut editor = roster.begin_update(id).expect("character exists");
        editor.apply(CharacterCommand::SetName("Renamed".into())).expect("editing");
        editor.apply(CharacterCommand::Save).expect("editing");
        assert_eq!(roster.finish(editor), Some(id));

        assert_eq!(roster.characters().len(), 1);
        assert_eq!(roster.get(id).map(|c| c.name.as_str()), Some("Renamed"));
    }

    #[test]
    fn test_cancelled_update_leaves_roster_alone() {
        let f = fixture(4);
        let mut roster = service(&f);
        let id = saved_character(&mut roster);
        let before = roster.get(id).cloned();

        let mut editor = roster.begin_update(id).expect("character exists");
        editor.apply(CharacterCommand::Randomize).expect("editing");
        editor.apply(CharacterCommand::Cancel).expect("editing");
        roster.finish(editor);

        assert_eq!(roster.get(id).cloned(), before);
    }

    #[test]
    fn test_update_unknown_character() {
        let f = fixture(5);
        let roster = service(&f);
        assert!(matches!(
            roster.begin_update(CharacterId::new()),
            Err(RosterError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn test_finished_item_becomes_equippable() {
        let f = fixture(6);
        let mut roster = service(&f);
        let before = f.catalog.items_for_location(ItemLocation::Necklace).len();

        let mut editor = roster.begin_item();
        for command in [
            ItemCommand::SetName("Lucky Charm".into()),
            ItemCommand::SetDescription("Found in a coat pocket".into()),
            ItemCommand::SetLocation(ItemLocation::Necklace),
            ItemCommand::Save,
        ] {
            editor.apply(command).expect("editing");
        }
        let item_id = roster.finish_item(editor).expect("committed");

        assert_eq!(
            f.catalog.items_for_location(ItemLocation::Necklace).len(),
            before + 1
        );
        let mut character = roster.begin_create();
        character
            .apply(CharacterCommand::AssignSlot {
                slot: crate::domain::value_objects::EquipmentSlot::Necklace,
                item_id: Some(item_id),
            })
            .expect("new item fits necklace slot");
    }

    #[test]
    fn test_battle_rounds() {
        let f = fixture(7);
        let mut roster = service(&f);
        saved_character(&mut roster);
        saved_character(&mut roster);

        let state = roster.begin_battle(vec![PlayerInfo::monster("Brute", 1, MonsterJob::Guard)]);
        assert_eq!(state.round_count, 1);

        let summary = roster.round_summary();
        assert_eq!(summary.title, "Prepare for Round 1!");
        assert_eq!(summary.party.len(), 2);
        assert_eq!(summary.monsters.len(), 1);

        let summary = roster.next_round();
        assert_eq!(summary.title, "Prepare for Round 2!");
        assert_eq!(roster.battle().round_count, 2);
    }
}
