//! Loan desk
//!
//! Reads desk commands from stdin and writes results to stdout.
//! Logs go to stderr.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_loans::adapters::{LogNotifier, StaticUserDirectory};
use library_loans::config::Config;
use library_loans::desk::Desk;

fn main() -> Result<()> {
    // Initialize tracing on stderr (stdout carries desk output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,library_loans=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting loan desk...");

    let config = Config::from_env()?;

    let users = Arc::new(StaticUserDirectory::new(config.active_users));
    tracing::info!(active_users = users.len(), "User directory loaded");

    let mut desk = Desk::new(users, Arc::new(LogNotifier::new()));
    for (title, copies) in config.seed_catalog {
        desk.manager_mut().add_book(title, copies);
    }

    desk.run(io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
