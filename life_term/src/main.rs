//! `life` command line: play, create and manage Game of Life boards.
//!
//! # Usage
//!
//! ```bash
//! # Random board filling the terminal
//! life play
//!
//! # Stored board, one generation every 100ms
//! life play glider_gun --interval-ms 100
//!
//! # Type in a new 10x20 board
//! life new my_board --height 10 --width 20
//! ```

mod terminal;
mod ui;

use std::{
    fs::File,
    io::{self, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::{Parser, Subcommand};
use life::{
    Board, BoardGenerator, BoardStore, LifeConfig, LifeError, PATTERNS, editor, patterns::full_screen_size, sim,
};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::terminal::{KeyboardCancel, KeyboardReader, Screen, TerminalGuard, terminal_size};

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version)]
struct Args {
    /// Directory holding the `boards` and `favourites` folders
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a simulation until it dies out, settles or Enter is pressed
    Play(PlayArgs),

    /// Type in a new board and save it
    New {
        /// Name of the board file
        name: String,

        /// Rows (at least 2)
        #[arg(long)]
        height: usize,

        /// Columns (at least 2)
        #[arg(long)]
        width: usize,
    },

    /// List stored boards
    List,

    /// Delete a stored board
    Delete {
        /// Name of the board file
        name: String,
    },

    /// Move a board into favourites
    Favourite {
        /// Name of the board file
        name: String,
    },

    /// Move a board out of favourites
    Unfavourite {
        /// Name of the board file
        name: String,
    },
}

#[derive(clap::Args, Debug)]
struct PlayArgs {
    /// Stored board to load; a random board is generated when omitted
    name: Option<String>,

    /// Start from a built-in pattern instead
    #[arg(long, conflicts_with = "name")]
    pattern: Option<String>,

    /// Board rows; defaults to the terminal height
    #[arg(long, requires = "width", conflicts_with = "name")]
    height: Option<usize>,

    /// Board columns; defaults to fit the terminal width
    #[arg(long, requires = "height", conflicts_with = "name")]
    width: Option<usize>,

    /// Seed for the random board
    #[arg(long, conflicts_with_all = ["name", "pattern"])]
    seed: Option<u64>,

    /// Milliseconds between generations [default: 200]
    #[arg(long)]
    interval_ms: Option<u64>,
}

/// Errors reported by the command line.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("unknown pattern '{name}' (available: {available})")]
    UnknownPattern { name: String, available: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level, args.log_file.as_deref())?;

    run(args).await.inspect_err(|err| error!(%err, "command failed"))?;
    Ok(())
}

fn init_tracing(level: &str, log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            registry.with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))).init();
        },
        None => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = LifeConfig::with_data_dir(args.data_dir);
    let store = BoardStore::new(&config);

    match args.command {
        Command::Play(play_args) => play(config, &store, play_args).await,
        Command::New { name, height, width } => create(&store, &name, height, width),
        Command::List => {
            for board in store.list()? {
                let marker = if board.favourite { "*" } else { " " };
                println!("{marker} {}", board.name);
            }
            Ok(())
        },
        Command::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted {}", store.codec().add_extension(&name));
            Ok(())
        },
        Command::Favourite { name } => {
            let path = store.favourite(&name)?;
            println!("Moved to {}", path.display());
            Ok(())
        },
        Command::Unfavourite { name } => {
            let path = store.unfavourite(&name)?;
            println!("Moved to {}", path.display());
            Ok(())
        },
    }
}

async fn play(mut config: LifeConfig, store: &BoardStore, args: PlayArgs) -> Result<(), CliError> {
    config.tick_interval = tick_interval(&config, &args);
    let board = starting_board(store, &args)?;
    info!(height = board.height(), width = board.width(), "starting simulation");

    let outcome = {
        let _guard = TerminalGuard::fullscreen()?;
        let mut screen = Screen::new(stdout());
        sim::run(board, config.tick_interval, &mut screen, &mut KeyboardCancel).await?
    };

    println!("Finished after {} generations: {}", outcome.generation, outcome.reason);
    Ok(())
}

/// `--interval-ms` when given, otherwise the configured interval.
fn tick_interval(config: &LifeConfig, args: &PlayArgs) -> Duration {
    args.interval_ms.map_or(config.tick_interval, Duration::from_millis)
}

fn starting_board(store: &BoardStore, args: &PlayArgs) -> Result<Board, CliError> {
    if let Some(name) = &args.name {
        return Ok(store.load(name)?);
    }

    let size = match (args.height, args.width) {
        (Some(height), Some(width)) => Some((height, width)),
        _ => None,
    };

    if let Some(name) = &args.pattern {
        let pattern = life::find_pattern(name).ok_or_else(|| CliError::UnknownPattern {
            name: name.clone(),
            available: PATTERNS.iter().map(|p| p.name).collect::<Vec<_>>().join(", "),
        })?;
        let (height, width) = match size {
            Some(size) => size,
            None => {
                let (lines, columns) = terminal_size()?;
                full_screen_size(lines, columns)
            },
        };
        return Ok(pattern.place(height, width)?);
    }

    let mut generator = match args.seed {
        Some(seed) => BoardGenerator::from_seed(seed),
        None => BoardGenerator::from_entropy(),
    };
    let board = match size {
        Some((height, width)) => generator.generate(height, width)?,
        None => {
            let (lines, columns) = terminal_size()?;
            generator.generate_full_screen(lines, columns)?
        },
    };
    Ok(board)
}

fn create(store: &BoardStore, name: &str, height: usize, width: usize) -> Result<(), CliError> {
    life::grid::ensure_persistable(height, width)?;
    store.ensure_dirs()?;

    let board = {
        let _guard = TerminalGuard::raw()?;
        editor::read_board(&mut KeyboardReader, &mut stdout(), height, width)?
    };

    let path = store.save(name, &board)?;
    println!("Saved {}", path.display());
    Ok(())
}
