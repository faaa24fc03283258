use anyhow::{bail, Context};
use battleships::{
    init_logging, AiPlayer, EasyAi, HighScores, Player, BOARD_SIZE,
};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level, overriding BATTLESHIPS_LOG (e.g. debug).
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play computer against computer and print a JSON summary.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Print a randomly deployed grid.
    Deploy {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct MatchSummary {
    game: u32,
    winner: &'static str,
    player1: SideSummary,
    player2: SideSummary,
}

#[derive(Serialize)]
struct SideSummary {
    shots: u32,
    hits: u32,
    misses: u32,
    ships_lost: usize,
    score: i32,
}

impl From<&Player> for SideSummary {
    fn from(p: &Player) -> Self {
        SideSummary {
            shots: p.shots(),
            hits: p.hits(),
            misses: p.missed(),
            ships_lost: p.grid().ships_killed(),
            score: p.score(),
        }
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Two random-search players take turns; a side keeps firing while it hits.
fn play_match(game: u32, rng: &mut SmallRng) -> anyhow::Result<MatchSummary> {
    let mut p1 = AiPlayer::easy(rng).context("deploying player 1")?;
    let mut p2 = AiPlayer::easy(rng).context("deploying player 2")?;
    let max_shots = 2 * (BOARD_SIZE as usize).pow(2);

    let mut first_to_move = true;
    for _ in 0..max_shots {
        let (shooter, target) = if first_to_move {
            (&mut p1, &mut p2)
        } else {
            (&mut p2, &mut p1)
        };
        let Some(result) = shooter.attack(rng, target.player_mut().grid_mut())? else {
            bail!("game {} ran out of targets", game);
        };
        if target.player().is_destroyed() {
            let winner = if first_to_move { "player1" } else { "player2" };
            info!("game {}: {} wins", game, winner);
            return Ok(MatchSummary {
                game,
                winner,
                player1: SideSummary::from(p1.player()),
                player2: SideSummary::from(p2.player()),
            });
        }
        if result.value().passes_turn() {
            first_to_move = !first_to_move;
        }
    }
    bail!("game {} did not finish within {} shots", game, max_shots)
}

fn simulate(seed: Option<u64>, games: u32) -> anyhow::Result<()> {
    if let Some(s) = seed {
        info!("using fixed seed {}", s);
    }
    let mut rng = make_rng(seed);
    let mut table = HighScores::default();
    let mut matches = Vec::with_capacity(games as usize);
    for game in 1..=games {
        let summary = play_match(game, &mut rng)?;
        table.record("P1", summary.player1.score);
        table.record("P2", summary.player2.score);
        matches.push(summary);
    }
    let out = serde_json::json!({
        "matches": matches,
        "high_scores": table,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn deploy(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let player: AiPlayer<EasyAi> = AiPlayer::easy(&mut rng)?;
    println!("{}", player.player().grid());
    for ship in player.player().ships() {
        println!(
            "{:<16} at ({:>2}, {:>2}) {:?}",
            ship.name().to_string(),
            ship.row(),
            ship.col(),
            ship.direction()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Simulate { seed, games } => simulate(seed, games),
        Commands::Deploy { seed } => deploy(seed),
    }
}
