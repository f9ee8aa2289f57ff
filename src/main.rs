//! scholarpubs - Google Scholar publications updater
//!
//! Fetches the author's latest publications and rewrites
//! `data/publications.json`. Run manually or from CI.
//!
//! ```bash
//! scholarpubs
//! scholarpubs --author "Jane Doe" --debug
//! ```
//!
//! Exits 0 when at least one publication was written, 1 otherwise.

use anyhow::{Context, Result};
use clap::Parser;
use scholarpubs::fallback::FallbackSource;
use scholarpubs::persist;
use scholarpubs::publication::Publication;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Author whose profile is fetched when no override is given.
const DEFAULT_AUTHOR: &str = "Muhammad Sajjad";

/// Google Scholar publications updater
#[derive(Parser)]
#[command(name = "scholarpubs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Author name to search for
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let publications = fetch_publications(&cli.author).await;

    let path = Path::new(persist::OUTPUT_PATH);
    let document = persist::write_document(publications, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "\nSuccessfully updated {} publications to {}",
        document.count,
        path.display()
    );
    println!("Last updated: {}", document.last_updated);

    let code = exit_code(document.count);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// 0 when at least one publication was written, 1 otherwise. The only failure
/// signal exposed to automation running the updater.
fn exit_code(count: usize) -> i32 {
    if count > 0 {
        0
    } else {
        1
    }
}

/// Fetch from the live source, substituting the fallback dataset on failure.
#[cfg(feature = "live")]
async fn fetch_publications(author: &str) -> Vec<Publication> {
    use scholarpubs::scholar::ScholarClient;
    use scholarpubs::source::{fetch_with_fallback, LiveSource};

    let fallback = FallbackSource;

    match ScholarClient::new() {
        Ok(client) => {
            println!("Searching for author on Google Scholar...");
            let live = LiveSource::new(client, author);
            fetch_with_fallback(&live, &fallback).await
        }
        Err(e) => {
            println!("Could not set up scholar client: {}. Using fallback data.", e);
            fallback.publications()
        }
    }
}

/// Built without the `live` feature, the updater only writes the fallback
/// dataset - the same behavior as running without the search capability.
#[cfg(not(feature = "live"))]
async fn fetch_publications(_author: &str) -> Vec<Publication> {
    println!("Live scholar search not available. Using fallback data.");
    FallbackSource.publications()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_zero_publications_fails() {
        assert_eq!(exit_code(0), 1);
    }

    #[test]
    fn test_exit_code_any_publications_succeeds() {
        assert_eq!(exit_code(1), 0);
        assert_eq!(exit_code(2), 0);
        assert_eq!(exit_code(10), 0);
    }
}
