use std::io::{self, BufRead, Write};

use war_board_game::board::Board;
use war_board_game::game::Game;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("war board game starting");

    let mut game = Game::new();

    loop {
        println!("\n====================== CURRENT STATE ======================");
        render_board(&game.board);

        println!("\n*** Your secret mission ***");
        println!("- {}", game.mission.description());

        println!("\n========================== MENU ===========================");
        println!("1) Attack");
        println!("2) Check mission");
        println!("0) Quit");

        match read_int("> ", 0, 2) {
            1 => attack_phase(&mut game),
            2 => {
                if game.mission_complete() {
                    println!("\n>>> MISSION ACCOMPLISHED! You win. <<<");
                    break;
                }
                println!("\nMission not accomplished yet. Keep at it!");
            }
            _ => {
                println!("Quitting the game...");
                break;
            }
        }
    }
}

fn attack_phase(game: &mut Game) {
    println!("\n=== Attack Phase ===");
    let max_id = game.board.len() - 1;
    let origin = read_int("Origin territory id: ", 0, max_id);
    let destination = read_int("Destination territory id: ", 0, max_id);

    match game.attack(origin, destination) {
        Ok(outcome) => {
            println!(
                "Rolls  Atk: {:?}  Def: {:?}",
                outcome.attacker_dice, outcome.defender_dice
            );
            println!(
                "Losses Atk: {}  Def: {}",
                outcome.attacker_losses, outcome.defender_losses
            );
            if let (Some(from), Some(to)) = (game.board.get(origin), game.board.get(destination)) {
                println!(
                    "After battle -> {} ({}): {} | {} ({}): {}",
                    from.name, from.owner, from.troops, to.name, to.owner, to.troops
                );
            }
            if outcome.conquered {
                println!(">> Territory CONQUERED!");
            }
        }
        Err(reason) => println!("Attack rejected: {reason}."),
    }
}

fn render_board(board: &Board) {
    println!("ID | Territory           | Owner      | Troops");
    println!("---+---------------------+------------+-------");
    for (id, territory) in board.iter().enumerate() {
        println!(
            "{:>2} | {:<19} | {:<10} | {:>5}",
            id,
            territory.name,
            territory.owner.name(),
            territory.troops
        );
    }
}

/// Prompt until the user enters an integer within `min..=max`.
fn read_int(prompt: &str, min: usize, max: usize) -> usize {
    let stdin = io::stdin();
    loop {
        print!("{prompt}");
        io::stdout().flush().expect("Failed to flush stdout");

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .expect("Failed to read input");
        if bytes == 0 {
            // stdin closed; nothing left to prompt for
            println!();
            std::process::exit(0);
        }

        match line.trim().parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            _ => println!("Invalid value. Enter an integer between {min} and {max}."),
        }
    }
}
