//! Jobs carried by monsters in battle

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MonsterJob {
    #[default]
    Unknown,
    Bodyguard,
    Mercenary,
    Guard,
    Henchman,
}

impl MonsterJob {
    pub fn message(self) -> &'static str {
        match self {
            MonsterJob::Unknown => "Monster",
            MonsterJob::Bodyguard => "Bodyguard",
            MonsterJob::Mercenary => "Mercenary",
            MonsterJob::Guard => "Security Guard",
            MonsterJob::Henchman => "Security Henchman",
        }
    }
}

impl fmt::Display for MonsterJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
