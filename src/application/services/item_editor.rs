//! Item Editor - The controller behind the item create screen
//!
//! Shares the editor states and outcomes of the character editor. Items
//! require a name and description but no code name.

use tracing::{debug, info, instrument};

use crate::application::services::character_editor::{
    CommandOutcome, EditorContext, EditorError, EditorState,
};
use crate::application::services::submission_validator::{FieldStatus, RequiredField, SubmissionValidator};
use crate::domain::entities::Item;
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{ItemAttribute, ItemLocation};

#[derive(Debug, Clone, PartialEq)]
pub enum ItemCommand {
    SetName(String),
    SetDescription(String),
    SetImage(String),
    SetLocation(ItemLocation),
    SetAttribute(ItemAttribute),
    /// Stepper values; rounded, never negative
    SetRange(f64),
    SetValue(f64),
    SetDamage(f64),
    Save,
    Cancel,
}

pub struct ItemEditor {
    state: EditorState,
    working: Item,
    ctx: EditorContext,
}

/// Steppers only move in whole, non-negative steps
fn stepper(value: f64) -> i32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round_ties_even();
    if rounded >= i32::MAX as f64 {
        i32::MAX
    } else {
        rounded as i32
    }
}

impl ItemEditor {
    /// A blank item placed at the first selectable location and attribute
    pub fn create(ctx: EditorContext) -> Self {
        let mut working = Item::new("", ItemLocation::first_selectable());
        working.attribute = ItemAttribute::first_selectable();
        Self {
            state: EditorState::Editing,
            working,
            ctx,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn item(&self) -> &Item {
        &self.working
    }

    pub fn into_item(self) -> Item {
        self.working
    }

    pub fn field_status(&self) -> [FieldStatus; 2] {
        [
            FieldStatus {
                field: RequiredField::Name,
                valid: SubmissionValidator::is_filled(&self.working.name),
            },
            FieldStatus {
                field: RequiredField::Description,
                valid: SubmissionValidator::is_filled(&self.working.description),
            },
        ]
    }

    pub fn apply(&mut self, command: ItemCommand) -> Result<CommandOutcome, EditorError> {
        if self.state != EditorState::Editing {
            return Err(EditorError::Closed(self.state));
        }
        let item = &mut self.working;
        match command {
            ItemCommand::SetName(name) => item.name = name,
            ItemCommand::SetDescription(description) => item.description = description,
            ItemCommand::SetImage(image_uri) => item.image_uri = image_uri,
            ItemCommand::SetLocation(location) => item.location = location,
            ItemCommand::SetAttribute(attribute) => item.attribute = attribute,
            ItemCommand::SetRange(range) => item.range = stepper(range),
            ItemCommand::SetValue(value) => item.value = stepper(value),
            ItemCommand::SetDamage(damage) => item.damage = stepper(damage),
            ItemCommand::Save => return self.save(),
            ItemCommand::Cancel => {
                self.state = EditorState::Discarded;
                debug!("Item creation discarded");
                return Ok(CommandOutcome::Discarded);
            }
        }
        Ok(CommandOutcome::Updated)
    }

    #[instrument(skip(self), fields(name = %self.working.name))]
    fn save(&mut self) -> Result<CommandOutcome, EditorError> {
        let missing =
            SubmissionValidator::missing_item_fields(&self.working.name, &self.working.description);
        if !missing.is_empty() {
            return Ok(CommandOutcome::Rejected(missing));
        }
        let mut saved = self.working.clone();
        if saved.image_uri.is_empty() {
            saved.image_uri = self.ctx.default_item_image.clone();
        }
        self.ctx
            .notifier
            .publish(DomainEvent::item_created(saved.clone()))?;
        self.working = saved;
        self.state = EditorState::Committed;
        info!(location = %self.working.location, "Saved item");
        Ok(CommandOutcome::Committed)
    }
}
