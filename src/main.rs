use std::io;
use std::path::PathBuf;
use std::time::Duration;

use align_four::config::{AppConfig, ModeSetting};
use align_four::game::GameController;
use align_four::ui::App;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Align Four in the terminal.
#[derive(Parser)]
#[command(name = "align-four", about = "Connect Four against a friend or the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "align_four.toml")]
    config: PathBuf,

    /// Two human players share the keyboard
    #[arg(long)]
    two_player: bool,

    /// Override the computer's starting level (0-4)
    #[arg(long)]
    difficulty: Option<u8>,

    /// Seed the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.two_player {
        config.game.mode = ModeSetting::TwoPlayer;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    config.validate().context("validating options")?;

    let mut game = GameController::new(config.to_mode()?, config.controller_options());
    game.new_game();
    let mut app = App::new(game, Duration::from_millis(config.ai.move_delay_ms));

    play(&mut app).context("running terminal UI")
}

fn play(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
