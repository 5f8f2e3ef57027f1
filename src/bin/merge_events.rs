//! # merge-events
//!
//! Merge curated events into the bundled catalogue file.
//!
//! The events file is a JSON object mapping country id to an array of events:
//!
//! ```json
//! { "israel": [{ "id": "...", "title": "...", "date": "2023-10-07", ... }] }
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use political_navigator::models::Event;
use political_navigator::storage::merge::{CatalogueDocument, merge_events};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalogue file to update in place
    #[arg(long, default_value = "data/political_data.json")]
    data: PathBuf,
    /// JSON file mapping country id to new events
    #[arg(long)]
    events: PathBuf,
    /// Report what would change without writing the catalogue
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut document = CatalogueDocument::read(&cli.data)
        .with_context(|| format!("failed to read catalogue {}", cli.data.display()))?;
    let before = document.event_count();

    let additions_json = std::fs::read_to_string(&cli.events)
        .with_context(|| format!("failed to read events {}", cli.events.display()))?;
    let additions: BTreeMap<String, Vec<Event>> =
        serde_json::from_str(&additions_json).context("events file is not a country -> events map")?;

    let report = merge_events(&mut document, additions)?;

    for (country_id, merge) in &report.per_country {
        info!(
            "{}: added {} event(s), skipped {} duplicate(s)",
            country_id, merge.added, merge.duplicates
        );
    }
    for country_id in &report.unknown_countries {
        warn!("{}: not in catalogue, events ignored", country_id);
    }
    if report.per_country.is_empty() && !report.unknown_countries.is_empty() {
        bail!("none of the countries in the events file exist in the catalogue");
    }

    info!(
        "Events: {} -> {} ({} added)",
        before,
        document.event_count(),
        report.total_added()
    );

    if cli.dry_run {
        info!("Dry run: {} left unchanged", cli.data.display());
        return Ok(());
    }

    document
        .write(&cli.data)
        .with_context(|| format!("failed to write catalogue {}", cli.data.display()))?;
    info!("Updated {}", cli.data.display());
    Ok(())
}
