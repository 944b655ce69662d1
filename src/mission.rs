// mission.rs
use crate::board::Board;
use crate::faction::Faction;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A secret objective, drawn once at game start and held for the whole
/// game. Evaluation is a pure function of the current board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mission {
    /// Wipe a faction off the map. A faction that owns nothing counts as
    /// eliminated, whether or not it ever held a territory.
    Eliminate { target: Faction },
    /// Hold at least `minimum` territories.
    Control { minimum: usize },
}

impl Mission {
    /// The demo objectives: destroy the Red army, or control at least 3
    /// territories.
    pub fn demo_missions() -> [Mission; 2] {
        [
            Mission::Eliminate {
                target: Faction::Red,
            },
            Mission::Control { minimum: 3 },
        ]
    }

    /// Draw a mission uniformly from the demo set.
    pub fn draw(rng: &mut impl Rng) -> Mission {
        let missions = Self::demo_missions();
        missions[rng.gen_range(0..missions.len())]
    }

    pub fn is_complete(&self, board: &Board, player: Faction) -> bool {
        let complete = match self {
            Mission::Eliminate { target } => !board.faction_present(*target),
            Mission::Control { minimum } => board.count_owned(player) >= *minimum,
        };
        tracing::debug!(mission = ?self, %player, complete, "mission checked");
        complete
    }

    pub fn description(&self) -> String {
        match self {
            Mission::Eliminate { target } => {
                format!("Destroy the {} army (every territory it holds).", target)
            }
            Mission::Control { minimum } => {
                format!("Control at least {} territories in total.", minimum)
            }
        }
    }
}
