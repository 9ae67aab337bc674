//! Contact Book - Main entry point
//!
//! Reads commands from stdin, one per line, and answers on stdout. The book
//! is loaded at start-up and saved when the session ends.

use anyhow::{Context, Result};
use chrono::Local;
use contact_book::{run_session, BookStorage, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using contact book at {}", config.book_path.display());

    let storage = BookStorage::new(config.book_path.clone());
    let mut book = match storage.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load contact book: {}", e);
            return Err(e.into());
        }
    };

    println!("Welcome to the assistant bot!");

    let session = run_session(io::stdin().lock(), &mut io::stdout(), &mut book, || {
        Local::now().date_naive()
    });

    storage
        .save(&book)
        .with_context(|| format!("failed to save {}", storage.path().display()))?;
    session.context("failed to write output")?;

    info!("Contact book session finished");
    Ok(())
}
