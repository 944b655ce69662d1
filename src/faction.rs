// faction.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Army color. Identifies the owner of a territory and the attacker in a
/// combat request; no ordering semantics beyond identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Faction {
    Blue,
    Red,
    Green,
    Yellow,
    White,
}

impl Faction {
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Blue => "Blue",
            Faction::Red => "Red",
            Faction::Green => "Green",
            Faction::Yellow => "Yellow",
            Faction::White => "White",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
