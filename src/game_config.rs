use crate::board::Board;
use crate::faction::Faction;
use crate::territory::Territory;
use serde::{Deserialize, Serialize};

/// Initial game setup: the human player's faction and the territory roster.
/// Territory order in the file fixes the public ids for the whole game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub player: Faction,
    pub territories: Vec<TerritoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryConfig {
    pub name: String,
    pub owner: Faction,
    pub troops: u16,
}

impl GameConfig {
    pub fn to_board(&self) -> Board {
        let territories = self
            .territories
            .iter()
            .map(|t| Territory::new(&t.name, t.owner, t.troops))
            .collect();
        Board::new(territories)
    }
}

impl Default for GameConfig {
    /// The fixed five-territory demo setup.
    fn default() -> Self {
        let config_data = include_str!("config.json");
        serde_json::from_str(config_data).expect("Unable to parse embedded config")
    }
}
