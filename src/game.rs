use crate::board::Board;
use crate::combat::{self, AttackError, AttackOutcome, RngDice};
use crate::faction::Faction;
use crate::game_config::GameConfig;
use crate::mission::Mission;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

/// One running game: the board, the human player's faction and the secret
/// mission drawn at setup. The game loop owns this and drives it one
/// command at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub player: Faction,
    pub mission: Mission,
}

impl Game {
    /// Start the demo game: the fixed five-territory board and a mission
    /// drawn uniformly from the demo set.
    pub fn new() -> Self {
        let mission = Mission::draw(&mut thread_rng());
        Self::from_config(GameConfig::default(), mission)
    }

    pub fn from_config(config: GameConfig, mission: Mission) -> Self {
        Self {
            board: config.to_board(),
            player: config.player,
            mission,
        }
    }

    /// Resolve one attack ordered by the player. Rejections leave the
    /// board untouched; the caller re-prompts with corrected ids.
    pub fn attack(&mut self, origin: usize, destination: usize) -> Result<AttackOutcome, AttackError> {
        combat::resolve_attack(
            &mut self.board,
            origin,
            destination,
            self.player,
            &mut RngDice(thread_rng()),
        )
    }

    pub fn mission_complete(&self) -> bool {
        self.mission.is_complete(&self.board, self.player)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
