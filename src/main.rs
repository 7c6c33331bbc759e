//! Terminal VGA Memorize runner (default binary).
//!
//! Flashes a growing color sequence on the whole terminal and asks the player
//! to type it back with B, G, R and Y.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vga_memorize::core::{FixedSeed, SeedSource, WallClockSeed};
use vga_memorize::engine::GameSession;
use vga_memorize::input::TerminalInput;
use vga_memorize::term::{SleepTimer, TerminalRenderer};

/// VGA Memorize - repeat the flashed color sequence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed every round with this value instead of the current time
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Write logs to this file (the terminal is used by the game)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Per-round seed source picked from the command line.
enum Seeds {
    WallClock(WallClockSeed),
    Fixed(FixedSeed),
}

impl SeedSource for Seeds {
    fn seed(&mut self) -> u32 {
        match self {
            Seeds::WallClock(s) => s.seed(),
            Seeds::Fixed(s) => s.seed(),
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seeds = match cli.seed {
        Some(seed) => Seeds::Fixed(FixedSeed(seed)),
        None => Seeds::WallClock(WallClockSeed),
    };
    info!(seed = ?cli.seed, "starting");

    let mut game = GameSession::new(
        TerminalRenderer::new(),
        TerminalInput::new(),
        SleepTimer,
        seeds,
    );

    // Restores the terminal before returning, including on error.
    let result = game.play();
    info!(ok = result.is_ok(), "exiting");
    result
}
