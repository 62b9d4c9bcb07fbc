//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles: collaborators come
//! in through the outbound ports and results go out as domain entities or
//! domain events.

pub mod attribute_roller;
pub mod character_editor;
pub mod equipment_slot_resolver;
pub mod item_editor;
pub mod roster_service;
pub mod round_summary_service;
pub mod submission_validator;

pub use attribute_roller::AttributeRoller;
pub use character_editor::{
    CharacterCommand, CharacterEditor, CommandOutcome, EditorContext, EditorError, EditorMode,
    EditorState,
};
pub use equipment_slot_resolver::EquipmentSlotResolver;
pub use item_editor::{ItemCommand, ItemEditor};
pub use roster_service::{RosterError, RosterService};
pub use round_summary_service::{GridPosition, PlayerCard, RoundSummary, RoundSummaryService};
pub use submission_validator::{FieldStatus, RequiredField, SubmissionValidator};
