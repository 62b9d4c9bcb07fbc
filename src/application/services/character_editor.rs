//! Character Editor - The controller behind the create and update screens
//!
//! The editor owns a working copy of one character and an immutable snapshot
//! taken when editing began. UI events arrive as [`CharacterCommand`]s.
//!
//! ```text
//! Editing --Save (valid)----> Committed
//! Editing --Save (invalid)--> Editing
//! Editing --Cancel----------> Discarded   (working copy restored)
//! Editing --anything else---> Editing
//! ```
//!
//! Create and update share this type; [`EditorMode`] selects the few places
//! where they differ (randomize keeps the job on update, and the saved event
//! is `CharacterCreated` or `CharacterUpdated`).

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{NotifyError, SaveNotifierPort};
use crate::application::services::attribute_roller::AttributeRoller;
use crate::application::services::equipment_slot_resolver::EquipmentSlotResolver;
use crate::application::services::submission_validator::{
    FieldStatus, RequiredField, SubmissionValidator,
};
use crate::domain::entities::{Character, Item};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{
    AbilityRange, CharacterJob, EquipmentSlot, ItemId, LevelTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    Committed,
    Discarded,
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EditorState::Editing => "editing",
            EditorState::Committed => "committed",
            EditorState::Discarded => "discarded",
        })
    }
}

/// Errors that can occur while editing
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Editor is already {0}")]
    Closed(EditorState),

    #[error("Level {level} is outside 1..={max}")]
    LevelOutOfRange { level: u32, max: u32 },

    #[error("Item {item_id} cannot be placed in {slot}")]
    UnknownItem { slot: EquipmentSlot, item_id: ItemId },

    #[error("Failed to announce save: {0}")]
    Notification(#[from] NotifyError),
}

/// A single user action on a character screen
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterCommand {
    Randomize,
    SetLevel(u32),
    SetName(String),
    SetDescription(String),
    SetCodeName(String),
    SetJob(CharacterJob),
    SetImage(String),
    /// Raw slider positions; rounded and clamped to the ability range
    SetAttack(f64),
    SetSpeed(f64),
    SetDefense(f64),
    AssignSlot {
        slot: EquipmentSlot,
        item_id: Option<ItemId>,
    },
    Save,
    Cancel,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The working record changed (or was left as is) and editing continues
    Updated,
    /// Save was refused; these required fields are blank
    Rejected(Vec<RequiredField>),
    Committed,
    Discarded,
}

/// Everything an editor needs from the session, passed in explicitly
#[derive(Clone)]
pub struct EditorContext {
    pub levels: Arc<LevelTable>,
    pub abilities: AbilityRange,
    pub roller: Arc<AttributeRoller>,
    pub resolver: Arc<EquipmentSlotResolver>,
    pub notifier: Arc<dyn SaveNotifierPort>,
    /// Used when a character is saved without an image
    pub default_character_image: String,
    /// Used when an item is saved without an image
    pub default_item_image: String,
}

pub struct CharacterEditor {
    mode: EditorMode,
    state: EditorState,
    snapshot: Character,
    /// The working copy as first shown, after any normalization
    baseline: Character,
    working: Character,
    ctx: EditorContext,
}

impl CharacterEditor {
    /// Start the create flow on a blank level 1 character
    pub fn create(ctx: EditorContext) -> Self {
        let mut working = Character::blank(&ctx.levels);
        working.job = CharacterJob::first_selectable();
        Self {
            mode: EditorMode::Create,
            state: EditorState::Editing,
            snapshot: working.clone(),
            baseline: working.clone(),
            working,
            ctx,
        }
    }

    /// Start the update flow on a copy of `original`.
    ///
    /// The snapshot keeps `original` exactly; the working copy gets its job
    /// normalized and health recomputed for display.
    pub fn update(ctx: EditorContext, original: &Character) -> Self {
        let mut working = original.clone();
        if working.job == CharacterJob::Unknown {
            working.job = CharacterJob::first_selectable();
        }
        working.level = ctx.levels.clamp(working.level);
        working.refresh_health(&ctx.levels);
        Self {
            mode: EditorMode::Update,
            state: EditorState::Editing,
            snapshot: original.clone(),
            baseline: working.clone(),
            working,
            ctx,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn character(&self) -> &Character {
        &self.working
    }

    /// The record as it was when editing began
    pub fn snapshot(&self) -> &Character {
        &self.snapshot
    }

    /// True once the user changed something. Normalization applied when the
    /// update flow opens does not count.
    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    pub fn into_character(self) -> Character {
        self.working
    }

    /// Screen title
    pub fn title(&self) -> String {
        match self.mode {
            EditorMode::Create => "Create".to_string(),
            EditorMode::Update => format!("Update {}", self.snapshot.name),
        }
    }

    /// Current equipment for display, one entry per slot
    pub fn equipment(&self) -> Vec<(EquipmentSlot, Item)> {
        self.ctx.resolver.resolve_all(&self.working)
    }

    /// Choices for the assign-item popup of `slot`
    pub fn pick_list(&self, slot: EquipmentSlot) -> Vec<Item> {
        self.ctx.resolver.pick_list(slot)
    }

    pub fn field_status(&self) -> [FieldStatus; 3] {
        SubmissionValidator::field_status(
            &self.working.name,
            &self.working.description,
            &self.working.code_name,
        )
    }

    pub fn apply(&mut self, command: CharacterCommand) -> Result<CommandOutcome, EditorError> {
        self.ensure_editing()?;
        match command {
            CharacterCommand::Randomize => self.randomize(),
            CharacterCommand::SetLevel(level) => self.set_level(level),
            CharacterCommand::SetName(name) => self.edit(|c| c.name = name),
            CharacterCommand::SetDescription(description) => {
                self.edit(|c| c.description = description)
            }
            CharacterCommand::SetCodeName(code_name) => self.edit(|c| c.code_name = code_name),
            CharacterCommand::SetJob(job) => self.edit(|c| c.job = job),
            CharacterCommand::SetImage(image_uri) => self.edit(|c| c.image_uri = image_uri),
            CharacterCommand::SetAttack(position) => {
                let value = self.ctx.abilities.from_slider(position);
                self.edit(|c| c.attack = value)
            }
            CharacterCommand::SetSpeed(position) => {
                let value = self.ctx.abilities.from_slider(position);
                self.edit(|c| c.speed = value)
            }
            CharacterCommand::SetDefense(position) => {
                let value = self.ctx.abilities.from_slider(position);
                self.edit(|c| c.defense = value)
            }
            CharacterCommand::AssignSlot { slot, item_id } => self.assign_slot(slot, item_id),
            CharacterCommand::Save => self.save(),
            CharacterCommand::Cancel => self.cancel(),
        }
    }

    /// Reroll everything but the level (and the job, on update)
    pub fn randomize(&mut self) -> Result<CommandOutcome, EditorError> {
        self.ensure_editing()?;
        self.ctx.roller.randomize(&mut self.working, self.mode);
        Ok(CommandOutcome::Updated)
    }

    pub fn set_level(&mut self, level: u32) -> Result<CommandOutcome, EditorError> {
        self.ensure_editing()?;
        if !self.working.set_level(level, &self.ctx.levels) {
            return Err(EditorError::LevelOutOfRange {
                level,
                max: self.ctx.levels.max_level(),
            });
        }
        Ok(CommandOutcome::Updated)
    }

    /// Fill or clear a slot. `None` is the "None" pick-list choice.
    pub fn assign_slot(
        &mut self,
        slot: EquipmentSlot,
        item_id: Option<ItemId>,
    ) -> Result<CommandOutcome, EditorError> {
        self.ensure_editing()?;
        if let Some(id) = item_id {
            if !self.ctx.resolver.is_assignable(slot, id) {
                return Err(EditorError::UnknownItem { slot, item_id: id });
            }
        }
        self.working.equip(slot, item_id);
        debug!(%slot, item_id = ?item_id, "Assigned slot");
        Ok(CommandOutcome::Updated)
    }

    #[instrument(skip(self), fields(character_id = %self.working.id, mode = ?self.mode))]
    pub fn save(&mut self) -> Result<CommandOutcome, EditorError> {
        self.ensure_editing()?;
        let c = &self.working;
        if !SubmissionValidator::is_ready(&c.name, &c.description, &c.code_name) {
            let missing = SubmissionValidator::missing_fields(&c.name, &c.description, &c.code_name);
            debug!(?missing, "Save blocked by blank fields");
            return Ok(CommandOutcome::Rejected(missing));
        }

        // The working copy only takes the default image once the save went out
        let mut saved = self.working.clone();
        if saved.image_uri.is_empty() {
            saved.image_uri = self.ctx.default_character_image.clone();
        }

        let event = match self.mode {
            EditorMode::Create => DomainEvent::character_created(saved.clone()),
            EditorMode::Update => DomainEvent::character_updated(saved.clone()),
        };
        if let Err(e) = self.ctx.notifier.publish(event) {
            warn!(error = %e, "Save notification failed, still editing");
            return Err(e.into());
        }

        self.working = saved;
        self.state = EditorState::Committed;
        info!(name = %self.working.name, "Saved character");
        Ok(CommandOutcome::Committed)
    }

    /// Throw away every edit and restore the snapshot
    pub fn cancel(&mut self) -> Result<CommandOutcome, EditorError> {
        self.ensure_editing()?;
        self.working.restore_from(&self.snapshot);
        self.state = EditorState::Discarded;
        debug!(character_id = %self.working.id, "Edit discarded");
        Ok(CommandOutcome::Discarded)
    }

    fn edit(&mut self, change: impl FnOnce(&mut Character)) -> Result<CommandOutcome, EditorError> {
        change(&mut self.working);
        Ok(CommandOutcome::Updated)
    }

    fn ensure_editing(&self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Editing => Ok(()),
            closed => Err(EditorError::Closed(closed)),
        }
    }
}
