use anyhow::{bail, Context};
use chrono::Duration;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, warn};

use unit_catalog::bootstrap::build_catalog;
use unit_catalog::config::Config;
use unit_catalog::discovery;
use unit_catalog::logging;
use unit_catalog::{CatalogEntry, CategoryTag};

#[derive(Parser)]
#[command(name = "unit_catalog")]
#[command(about = "Browse and check the catalog of authoring units")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogued units
    List {
        /// Only units in this category (label or short name, e.g. "chart")
        #[arg(long)]
        category: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one unit by id
    Show { id: String },
    /// Search names, descriptions and tags
    Search {
        query: String,
        /// Match names and descriptions only
        #[arg(long)]
        names_only: bool,
    },
    /// Print catalog statistics as JSON
    Stats,
    /// Check that a unit with this display name is catalogued correctly
    Validate { name: String },
    /// Render a unit with the given props
    Render {
        id: String,
        /// Props as a JSON object
        #[arg(long, default_value = "{}")]
        props: String,
    },
}

fn print_table(entries: &[&CatalogEntry]) {
    if entries.is_empty() {
        println!("No units found");
        return;
    }
    for entry in entries {
        println!(
            "{:<16} {:<18} {:<22} {}",
            entry.id, entry.name, entry.category, entry.description
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;
    let _guard = logging::init_logging(&config.logging).context("initializing logging")?;
    // config is read before the subscriber exists, so report its source here
    debug!("Configuration read from '{}' (defaults when absent)", Config::path());

    let (catalog, summary) = build_catalog(&config.catalog);
    if summary.drain.failed > 0 {
        warn!("{} unit declarations failed to activate", summary.drain.failed);
    }

    match cli.command {
        Commands::List { category, json } => {
            let entries = match category {
                Some(raw) => match CategoryTag::parse(&raw) {
                    Some(tag) => catalog.get_by_category(tag),
                    None => bail!("unknown category '{}'", raw),
                },
                None => catalog.get_all(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_table(&entries);
            }
        }
        Commands::Show { id } => match catalog.get(&id) {
            Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
            None => bail!("no unit with id '{}'", id),
        },
        Commands::Search { query, names_only } => {
            let entries = if names_only {
                discovery::search_by_name(&catalog, &query)
            } else {
                catalog.search(&query)
            };
            print_table(&entries);
        }
        Commands::Stats => {
            let window = Duration::days(config.catalog.recent_window_days);
            let stats = discovery::stats_at(&catalog, chrono::Utc::now(), window);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Validate { name } => {
            let report = discovery::validate(&catalog, &name);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Render { id, props } => {
            let props: Value = serde_json::from_str(&props).context("parsing --props")?;
            let Some(entry) = catalog.get(&id) else {
                bail!("no unit with id '{}'", id);
            };
            debug!("Rendering '{}' with props {}", id, props);
            println!("{}", entry.implementation.render(&props));
        }
    }

    Ok(())
}
