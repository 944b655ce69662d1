//! Property tests over the combat laws: arbitrary boards, ids and dice
//! scripts, checked against the attrition and conquest rules.

use proptest::prelude::*;

use war_board_game::board::Board;
use war_board_game::combat::{resolve_attack, Dice};
use war_board_game::faction::Faction;
use war_board_game::territory::Territory;

const FACTIONS: [Faction; 5] = [
    Faction::Blue,
    Faction::Red,
    Faction::Green,
    Faction::Yellow,
    Faction::White,
];

struct ScriptedDice(Vec<u8>);

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.0.remove(0)
    }
}

fn build_board(owners: &[usize], troops: &[u16]) -> Board {
    let territories = owners
        .iter()
        .zip(troops.iter())
        .enumerate()
        .map(|(id, (&owner, &troops))| Territory::new(&format!("T{id}"), FACTIONS[owner], troops))
        .collect();
    Board::new(territories)
}

proptest! {
    #[test]
    fn rejected_attacks_never_mutate(
        owners in proptest::collection::vec(0usize..5, 5),
        troops in proptest::collection::vec(0u16..9, 5),
        origin in 0usize..8,
        destination in 0usize..8,
        attacker_index in 0usize..5,
        rolls in proptest::collection::vec(1u8..=6, 5),
    ) {
        let mut board = build_board(&owners, &troops);
        let before = board.clone();
        let attacker = FACTIONS[attacker_index];
        let mut dice = ScriptedDice(rolls);

        if resolve_attack(&mut board, origin, destination, attacker, &mut dice).is_err() {
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn resolved_attacks_obey_the_combat_laws(
        owners in proptest::collection::vec(0usize..5, 5),
        troops in proptest::collection::vec(0u16..9, 5),
        origin in 0usize..5,
        destination in 0usize..5,
        attacker_index in 0usize..5,
        rolls in proptest::collection::vec(1u8..=6, 5),
    ) {
        let mut board = build_board(&owners, &troops);
        let before = board.clone();
        let attacker = FACTIONS[attacker_index];
        let mut dice = ScriptedDice(rolls);

        if let Ok(outcome) = resolve_attack(&mut board, origin, destination, attacker, &mut dice) {
            let origin_before = before.get(origin).unwrap();
            let destination_before = before.get(destination).unwrap();

            // Dice-count laws.
            prop_assert_eq!(
                outcome.attacker_dice.len() as u16,
                (origin_before.troops - 1).min(3)
            );
            prop_assert_eq!(
                outcome.defender_dice.len() as u16,
                destination_before.troops.min(2)
            );

            // Both sequences are reported sorted descending.
            prop_assert!(outcome.attacker_dice.windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(outcome.defender_dice.windows(2).all(|w| w[0] >= w[1]));

            // Every compared pair removes exactly one troop from the board;
            // the conquest transfer conserves the total.
            let pairs = outcome.attacker_dice.len().min(outcome.defender_dice.len());
            prop_assert_eq!(
                u32::from(outcome.attacker_losses) + u32::from(outcome.defender_losses),
                pairs as u32
            );
            prop_assert_eq!(board.total_troops(), before.total_troops() - pairs as u32);

            let destination_after = board.get(destination).unwrap();
            if outcome.conquered {
                // Every defending troop fell, the attacker owns the
                // territory and exactly one troop occupies it.
                prop_assert_eq!(outcome.defender_losses, destination_before.troops);
                prop_assert_eq!(destination_after.owner, attacker);
                prop_assert_eq!(destination_after.troops, 1);
            } else {
                prop_assert_eq!(destination_after.owner, destination_before.owner);
                prop_assert!(destination_after.troops > 0);
            }
        }
    }
}
