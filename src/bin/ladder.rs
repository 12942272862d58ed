use anyhow::{bail, Context, Result};
use clap::Parser;

use align_four::ai::{Difficulty, Strategist};
use align_four::game::{ControllerOptions, GameController, GameMode, Player, Scoreboard};

/// Pit two computer levels against each other and report results.
#[derive(Parser)]
#[command(name = "ladder", about = "Play computer levels against each other")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 200)]
    games: u32,

    /// Level of the first computer (plays Player 1)
    #[arg(long, default_value_t = 4)]
    first_tier: u8,

    /// Level of the second computer (plays Player 2)
    #[arg(long, default_value_t = 0)]
    second_tier: u8,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.games == 0 {
        bail!("--games must be > 0");
    }
    let first = Difficulty::new(cli.first_tier).context("parsing --first-tier")?;
    let second = Difficulty::new(cli.second_tier).context("parsing --second-tier")?;

    let (mut strategist_a, mut strategist_b) = match cli.seed {
        Some(seed) => (
            Strategist::with_seed(seed),
            Strategist::with_seed(seed.wrapping_add(1)),
        ),
        None => (Strategist::new(), Strategist::new()),
    };

    // Both sides are driven from here, so the table runs in two-player mode.
    let mut game = GameController::new(
        GameMode::TwoPlayer,
        ControllerOptions {
            alternate_first_player: true,
            ..ControllerOptions::default()
        },
    );

    println!(
        "Playing {} games: level {} (Player 1) vs level {} (Player 2)",
        cli.games, first, second
    );
    println!("-------------------------------------------");

    let mut total_moves = 0usize;
    for _ in 0..cli.games {
        game.new_game();
        while game.status().is_in_progress() {
            let player = game.current_player();
            let column = match player {
                Player::A => strategist_a.select_move(game.board(), player, player.other(), first),
                Player::B => strategist_b.select_move(game.board(), player, player.other(), second),
            };
            game.apply_human_move(column)
                .with_context(|| format!("{} played illegal column {column}", player.name()))?;
        }
        total_moves += game.board().move_count();
    }

    report(game.scores(), total_moves, cli.games);
    Ok(())
}

fn report(scores: &Scoreboard, total_moves: usize, games: u32) {
    let pct = |n: u32| n as f64 / games as f64 * 100.0;
    println!(
        "Player 1 wins: {} ({:.1}%)",
        scores.wins_a,
        pct(scores.wins_a)
    );
    println!(
        "Player 2 wins: {} ({:.1}%)",
        scores.wins_b,
        pct(scores.wins_b)
    );
    println!("Draws:         {} ({:.1}%)", scores.draws, pct(scores.draws));
    println!(
        "Average game length: {:.1} moves",
        total_moves as f64 / games as f64
    );
}
