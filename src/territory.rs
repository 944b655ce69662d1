// territory.rs
use crate::faction::Faction;
use serde::{Deserialize, Serialize};

/// A map cell: display name, owning faction and garrison size. The troop
/// count is unsigned; every decrement in the rules saturates at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Territory {
    pub name: String,
    pub owner: Faction,
    pub troops: u16,
}

impl Territory {
    pub fn new(name: &str, owner: Faction, troops: u16) -> Self {
        Self {
            name: name.to_string(),
            owner,
            troops,
        }
    }

    pub fn is_owned_by(&self, faction: Faction) -> bool {
        self.owner == faction
    }

    pub fn remove_troops(&mut self, count: u16) {
        self.troops = self.troops.saturating_sub(count);
    }
}
