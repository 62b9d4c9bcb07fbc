//! Submission Validator - Gates saves on required text fields
//!
//! A field counts as filled when it has at least one non-whitespace
//! character.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Description,
    CodeName,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::Name => "name",
            RequiredField::Description => "description",
            RequiredField::CodeName => "code name",
        })
    }
}

/// Validity of one field, for highlighting it while the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStatus {
    pub field: RequiredField,
    pub valid: bool,
}

pub struct SubmissionValidator;

impl SubmissionValidator {
    pub fn is_filled(text: &str) -> bool {
        !text.trim().is_empty()
    }

    /// All-or-nothing gate for the character flows
    pub fn is_ready(name: &str, description: &str, code_name: &str) -> bool {
        Self::missing_fields(name, description, code_name).is_empty()
    }

    pub fn field_status(name: &str, description: &str, code_name: &str) -> [FieldStatus; 3] {
        [
            FieldStatus {
                field: RequiredField::Name,
                valid: Self::is_filled(name),
            },
            FieldStatus {
                field: RequiredField::Description,
                valid: Self::is_filled(description),
            },
            FieldStatus {
                field: RequiredField::CodeName,
                valid: Self::is_filled(code_name),
            },
        ]
    }

    pub fn missing_fields(name: &str, description: &str, code_name: &str) -> Vec<RequiredField> {
        Self::field_status(name, description, code_name)
            .into_iter()
            .filter(|status| !status.valid)
            .map(|status| status.field)
            .collect()
    }

    /// Items have no code name; only name and description are required
    pub fn missing_item_fields(name: &str, description: &str) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if !Self::is_filled(name) {
            missing.push(RequiredField::Name);
        }
        if !Self::is_filled(description) {
            missing.push(RequiredField::Description);
        }
        missing
    }
}
