//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{AddressBook, Config, ContactService, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        horizon_days = config.birthday_horizon_days,
        "Starting contact book"
    );

    let service = ContactService::new(AddressBook::new(), config.birthday_horizon_days);
    let mut session = Session::new(service);

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())?;

    info!("Contact book session ended");
    Ok(())
}
