//! vcard2fritz-email - email line filter
//!
//! Reads raw email values (one per line, as extracted from vCard `EMAIL`
//! properties) from stdin and writes the matching phonebook `<email>`
//! elements to stdout. Rejected addresses are reported on stderr.

use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vcard2fritz::{write_email_lines, Config};

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to keep stdout for the phonebook output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Configuration loaded (suppress empty email: {})",
        config.suppress_empty_email
    );

    let options = config.output_options();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let stats = match write_email_lines(stdin.lock(), stdout.lock(), &options) {
        Ok(stats) => stats,
        Err(e) => {
            error!("Failed to write phonebook emails: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Wrote {} email elements from {} lines ({} without address)",
        stats.written, stats.lines, stats.empty
    );
    Ok(())
}
