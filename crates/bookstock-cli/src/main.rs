//! Bookstock CLI
//!
//! Interactive menu for the Bookstock book inventory.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookstock_core::{BookStore, Config};

mod commands;
mod console;
mod menu;
mod output;

use console::Console;

#[derive(Parser)]
#[command(name = "bookstock")]
#[command(about = "Bookstock - keep track of books in stock")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// SQLite database file (overrides config)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_with_cli_override(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    init_logging(&config);

    let store = BookStore::initialize_with(&config.database_path, config.seed_policy())
        .with_context(|| {
            format!(
                "Failed to open book database at {:?}",
                config.database_path
            )
        })?;
    info!(path = ?store.path(), "book database ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run(&store, &mut console)
}

/// Initialize logging
///
/// Only initializes if BOOKSTOCK_LOG environment variable is set.
/// Logs to file (config.log_file or default bookstock.log next to the database)
/// so the menu output stays readable.
fn init_logging(config: &Config) {
    let Ok(log_level) = std::env::var("BOOKSTOCK_LOG") else {
        return;
    };

    let log_path = config.log_path();

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "bookstock_core={},bookstock={}",
        log_level, log_level
    ));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    info!("logging initialized to {:?}", log_path);
}
