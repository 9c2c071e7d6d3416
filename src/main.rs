mod parser;
mod settings;
mod source;
mod store;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use parser::Markers;
use settings::Settings;
use store::MergeOutcome;

#[derive(Parser)]
#[command(
    name = "game_harvester",
    about = "Harvest game names from scraped chat replies into a persistent list"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract names from raw text and merge them into the list
    Run {
        /// Raw text dump to read (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Extract and print names without touching the list
    Extract {
        /// Raw text dump to read (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Merge a plain candidates file (one name per line) into the list
    Merge {
        /// Candidates file
        file: PathBuf,
    },
    /// Print the persisted list in order
    List,
    /// Show list statistics
    Stats {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = settings::load()?;

    match cli.command {
        Commands::Run { input } => {
            let names = extract_from_input(input.as_deref(), &settings)?;
            if names.is_empty() {
                println!("No names found between markers. Nothing to merge.");
                return Ok(());
            }
            print_names(&names);
            let outcome = store::merge_unique(&settings.list_path, &names)?;
            report_merge(&outcome, &settings.list_path);
            Ok(())
        }
        Commands::Extract { input } => {
            let names = extract_from_input(input.as_deref(), &settings)?;
            if names.is_empty() {
                println!("No names found between markers.");
                return Ok(());
            }
            print_names(&names);
            Ok(())
        }
        Commands::Merge { file } => {
            let candidates: Vec<String> = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read candidates file {}", file.display()))?
                .lines()
                .map(str::to_string)
                .collect();
            let outcome = store::merge_unique(&settings.list_path, &candidates)?;
            report_merge(&outcome, &settings.list_path);
            Ok(())
        }
        Commands::List => {
            let entries = store::read_entries(&settings.list_path)?;
            if entries.is_empty() {
                println!("List is empty.");
                return Ok(());
            }
            for (i, entry) in entries.iter().enumerate() {
                println!("{:>4}  {}", i + 1, entry);
            }
            println!("\n{} entries in {}", entries.len(), settings.list_path.display());
            Ok(())
        }
        Commands::Stats { json } => {
            let entries = store::read_entries(&settings.list_path)?;
            let report = StatsReport {
                list_path: settings.list_path.display().to_string(),
                entries: entries.len(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("List:    {}", report.list_path);
                println!("Entries: {}", report.entries);
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct StatsReport {
    list_path: String,
    entries: usize,
}

fn extract_from_input(input: Option<&Path>, settings: &Settings) -> Result<Vec<String>> {
    let raw = source::fetch_raw_text(input)?;
    let markers = Markers::new(&settings.start_marker, &settings.end_marker);
    let names = parser::extract_names(&raw, &markers);
    info!(count = names.len(), "extracted names");
    Ok(names)
}

fn print_names(names: &[String]) {
    println!("Names found:");
    for name in names {
        println!("  {name}");
    }
}

fn report_merge(outcome: &MergeOutcome, path: &Path) {
    println!(
        "Appended {} new entries to {} ({} already known, {} on file before).",
        outcome.appended,
        path.display(),
        outcome.skipped,
        outcome.known_before,
    );
}
