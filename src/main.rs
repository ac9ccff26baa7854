//! Address Book - Main entry point
//!
//! Restores the book from its snapshot file (seeding a new one on first run)
//! and starts the interactive search prompt on stdin/stdout.

use address_book::bootstrap::load_or_seed;
use address_book::prompt::run_prompt;
use address_book::{Config, FileBookRepository};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr; stdout belongs to the prompt
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(path = %config.book_file.display(), "Opening address book");
    let repo = FileBookRepository::new(&config.book_file);
    let book = load_or_seed(&repo, config.page_size)?;

    let stdin = io::stdin();
    run_prompt(&book, stdin.lock(), io::stdout().lock())?;

    info!("Address book closed");
    Ok(())
}
