//! Jobs a player character can take

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterJob {
    #[default]
    Unknown,
    Fighter,
    Cleric,
    Hacker,
    Infiltrator,
    Medic,
}

impl CharacterJob {
    /// Jobs offered in the job picker, in order
    pub const SELECTABLE: [CharacterJob; 5] = [
        CharacterJob::Fighter,
        CharacterJob::Cleric,
        CharacterJob::Hacker,
        CharacterJob::Infiltrator,
        CharacterJob::Medic,
    ];

    pub fn first_selectable() -> Self {
        Self::SELECTABLE[0]
    }

    pub fn message(self) -> &'static str {
        match self {
            CharacterJob::Unknown => "Unknown",
            CharacterJob::Fighter => "Fighter",
            CharacterJob::Cleric => "Cleric",
            CharacterJob::Hacker => "Hacker",
            CharacterJob::Infiltrator => "Infiltrator",
            CharacterJob::Medic => "Medic",
        }
    }
}

impl fmt::Display for CharacterJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Lenient parse; anything unrecognised becomes `Unknown`
impl From<&str> for CharacterJob {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fighter" => CharacterJob::Fighter,
            "cleric" => CharacterJob::Cleric,
            "hacker" => CharacterJob::Hacker,
            "infiltrator" => CharacterJob::Infiltrator,
            "medic" => CharacterJob::Medic,
            _ => CharacterJob::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CharacterJob::from("Fighter"), CharacterJob::Fighter);
        assert_eq!(CharacterJob::from("  hACKer "), CharacterJob::Hacker);
    }

    #[test]
    fn test_parse_unknown_string() {
        assert_eq!(CharacterJob::from("wizard"), CharacterJob::Unknown);
        assert_eq!(CharacterJob::from(""), CharacterJob::Unknown);
    }

    #[test]
    fn test_every_selectable_job_roundtrips_through_message() {
        for job in CharacterJob::SELECTABLE {
            assert_eq!(CharacterJob::from(job.message()), job);
        }
    }
}
