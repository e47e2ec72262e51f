use anyhow::ensure;
use broadside::{init_logging, Player, NUM_SHIPS};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Headless computer-vs-computer Battleship simulation.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Fix the RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("using fixed seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut p1 = Player::new(true);
    let mut p2 = Player::new(true);
    let placed = p1.random_place_all_ships(&mut rng);
    ensure!(placed == NUM_SHIPS, "player1 placed only {placed} ships");
    let placed = p2.random_place_all_ships(&mut rng);
    ensure!(placed == NUM_SHIPS, "player2 placed only {placed} ships");

    let mut attacks = [0usize; 2];
    let winner = loop {
        match p1.random_attack(&mut rng, p2.board_mut())? {
            Some(_) => attacks[0] += 1,
            None => break None,
        }
        if p2.board().all_ships_sunk() {
            break Some("player1");
        }
        match p2.random_attack(&mut rng, p1.board_mut())? {
            Some(_) => attacks[1] += 1,
            None => break None,
        }
        if p1.board().all_ships_sunk() {
            break Some("player2");
        }
    };

    info!("game over after {} attacks", attacks[0] + attacks[1]);

    let result = json!({
        "player1": { "attacks": attacks[0], "defeated": p1.board().all_ships_sunk() },
        "player2": { "attacks": attacks[1], "defeated": p2.board().all_ships_sunk() },
        "winner": winner,
    });
    println!("{}", result);
    Ok(())
}
