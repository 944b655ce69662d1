// combat.rs
use crate::board::Board;
use crate::faction::Faction;
use crate::territory::Territory;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// A source of die rolls. Production code wraps a `rand` generator in
/// [`RngDice`]; tests substitute scripted sequences of die values.
pub trait Dice {
    /// One uniform draw in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Rolls with any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R: Rng>(pub R);

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self) -> u8 {
        self.0.gen_range(1..=6)
    }
}

/// Why an attack request was turned down. Rejections are non-fatal and
/// leave the board untouched.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("origin and destination are the same territory")]
    SameTerritory,
    #[error("territory id {0} is out of range")]
    InvalidId(usize),
    #[error("you can only attack from a territory you own")]
    NotYourTerritory,
    #[error("the destination already belongs to you")]
    DestinationAlreadyYours,
    #[error("at least 2 troops are required to attack")]
    InsufficientTroops,
}

/// Report of a resolved battle. Dice are post-sort (descending), as
/// compared.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttackOutcome {
    pub conquered: bool,
    pub attacker_dice: Vec<u8>,
    pub defender_dice: Vec<u8>,
    pub attacker_losses: u16,
    pub defender_losses: u16,
}

/// Resolve one attack between two territories.
///
/// The attacker fields `min(3, origin troops - 1)` dice (one troop always
/// stays behind to garrison the origin), the defender `min(2, destination
/// troops)`. Both rolls are sorted descending and compared pairwise up to
/// the shorter sequence; a strictly higher attacker die removes one
/// defending troop, any tie or lower die removes one attacking troop. If
/// the destination is wiped out, a single troop moves in to occupy it and
/// ownership flips to the attacker.
pub fn resolve_attack(
    board: &mut Board,
    origin: usize,
    destination: usize,
    attacker: Faction,
    dice: &mut dyn Dice,
) -> Result<AttackOutcome, AttackError> {
    if origin == destination {
        return Err(AttackError::SameTerritory);
    }
    if origin >= board.len() {
        return Err(AttackError::InvalidId(origin));
    }
    if destination >= board.len() {
        return Err(AttackError::InvalidId(destination));
    }

    let (origin_territory, destination_territory) = board.pair_mut(origin, destination);
    if !origin_territory.is_owned_by(attacker) {
        return Err(AttackError::NotYourTerritory);
    }
    if destination_territory.is_owned_by(attacker) {
        return Err(AttackError::DestinationAlreadyYours);
    }
    if origin_territory.troops < 2 {
        return Err(AttackError::InsufficientTroops);
    }

    let attacker_dice = roll_sorted(dice, (origin_territory.troops - 1).min(3));
    let defender_dice = roll_sorted(dice, destination_territory.troops.min(2));

    let mut attacker_losses = 0;
    let mut defender_losses = 0;
    for (attack, defend) in attacker_dice.iter().zip(defender_dice.iter()) {
        if attack > defend {
            defender_losses += 1;
        } else {
            attacker_losses += 1;
        }
    }

    origin_territory.remove_troops(attacker_losses);
    destination_territory.remove_troops(defender_losses);

    let conquered = destination_territory.troops == 0;
    if conquered {
        transfer_on_conquest(origin_territory, destination_territory, attacker);
        tracing::info!(
            territory = %destination_territory.name,
            by = %attacker,
            "territory conquered"
        );
    }

    tracing::debug!(
        ?attacker_dice,
        ?defender_dice,
        attacker_losses,
        defender_losses,
        conquered,
        "attack resolved"
    );

    Ok(AttackOutcome {
        conquered,
        attacker_dice,
        defender_dice,
        attacker_losses,
        defender_losses,
    })
}

fn roll_sorted(dice: &mut dyn Dice, count: u16) -> Vec<u8> {
    let mut rolls: Vec<u8> = (0..count).map(|_| dice.roll()).collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls
}

/// Occupy a wiped-out destination. Exactly one troop always moves in,
/// even when that leaves the origin empty.
fn transfer_on_conquest(origin: &mut Territory, destination: &mut Territory, attacker: Faction) {
    origin.remove_troops(1);
    destination.troops = 1;
    destination.owner = attacker;
}
