use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use connect_four_engine::config::AppConfig;
use connect_four_engine::{Board, Engine, Move, Session, UpdateCause};

/// Replay a Connect Four game and report the winner.
#[derive(Parser)]
#[command(name = "c4", about = "Replay Connect Four moves through the rules engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "c4.toml")]
    config: PathBuf,

    /// Start from a JSON board instead of an empty one
    #[arg(long)]
    board: Option<PathBuf>,

    /// Override board width
    #[arg(long)]
    width: Option<i32>,

    /// Override board height
    #[arg(long)]
    height: Option<i32>,

    /// Override the run length needed to win
    #[arg(long)]
    min_run: Option<usize>,

    /// Tracing filter, e.g. "info", "debug"
    #[arg(long, default_value = "warn")]
    log: String,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Moves to play in order, e.g. R3 Y3 R4
    moves: Vec<Move>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&cli.log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(min_run) = cli.min_run {
        config.rules.min_run = min_run;
    }
    config.validate().context("invalid configuration")?;

    let start = match &cli.board {
        Some(path) => load_board(path)?,
        None => config.board.empty_board(),
    };

    let mut session = Session::new(Engine::new());
    let updates = session.subscribe();
    session.init(start).context("starting board rejected")?;

    for mv in &cli.moves {
        if let Err(e) = session.play(mv.token, mv.column) {
            bail!("move {mv} rejected: {e}");
        }
    }

    for update in updates.try_iter() {
        if let UpdateCause::Play { token, column } = update.cause {
            let (red, yellow) = update.board.counts();
            info!(%token, column, red, yellow, "played");
        }
    }

    let board = session.board().context("session lost its board")?;
    println!("{}", serde_json::to_string(board)?);
    match session.winner(config.rules.min_run) {
        Some(token) => println!("winner: {token}"),
        None => println!("winner: NONE"),
    }
    Ok(())
}

fn load_board(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading board from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing board {}", path.display()))
}
