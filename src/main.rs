//! Phonebook CLI - Main entry point.

use anyhow::Result;
use phonebook_cli::{repl, storage, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so a .env file can supply RUST_LOG.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr so stdout stays clean for the session.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Loading phonebook from {}", config.db_path.display());
    let mut book = storage::load(&config.db_path);
    info!("Loaded {} contacts", book.len());

    // The loop handles interrupts internally, so the book is saved on every
    // exit path; a readline failure still reaches the save below.
    let session = repl::run(&config, &mut book);

    let report = storage::save(&config.db_path, &book);
    println!("{}", report);

    if let Err(e) = session {
        error!("Command loop failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
