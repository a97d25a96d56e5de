//! tidyfile - Keep a cluttered folder in order.
//!
//! Usage:
//!   tidy --sort                  Sort desktop files into category folders
//!   tidy --dedupe                Delete duplicate files under the desktop
//!   tidy --remove-old 30         Delete files untouched for 30 days
//!   tidy --path DIR --sort       Work on DIR instead of the desktop
//!   tidy --help                  Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use tidyfile_core::{CleanConfig, CleanError, Selection};
use tidyfile_ops::{Housekeeper, OperationEvent, OperationType, Reporter};

#[derive(Parser)]
#[command(
    name = "tidyfile",
    version,
    about = "Sort, deduplicate and expire files in a folder",
    long_about = "tidyfile cleans up a folder, your desktop by default.\n\n\
                  Pick one or more operations. They always run in the order \
                  sort, dedupe, remove-old."
)]
struct Cli {
    /// Folder to clean (defaults to the desktop)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Move top-level files into category folders
    #[arg(short, long)]
    sort: bool,

    /// Delete files whose content duplicates an earlier file
    #[arg(short, long)]
    dedupe: bool,

    /// Delete files last modified more than DAYS days ago
    #[arg(short = 'r', long, value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    remove_old: Option<u32>,
}

impl Cli {
    fn selection(&self) -> Selection {
        Selection {
            sort: self.sort,
            dedupe: self.dedupe,
            retention_days: self.remove_old,
        }
    }
}

/// Prints every event on its own line.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: OperationEvent) {
        match &event {
            OperationEvent::Finished(complete)
                if complete.operation_type != OperationType::Classify =>
            {
                println!(
                    "{} ({} freed)",
                    complete.summary(),
                    format_size(complete.bytes_processed)
                );
            }
            _ => println!("{event}"),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let selection = cli.selection();

    let root = match cli.path {
        Some(path) => path,
        None => default_root().context("Could not determine the desktop folder")?,
    };

    let config = CleanConfig::builder()
        .root(root)
        .selection(selection)
        .build()
        .context("Invalid configuration")?;

    match Housekeeper::new(config).run(&mut ConsoleReporter) {
        Ok(report) => {
            if selection.is_empty() {
                println!("Nothing to do. Pass --sort, --dedupe or --remove-old DAYS (see --help).");
            }
            tracing::debug!(failed = report.total_failed(), "done");
            Ok(())
        }
        Err(err @ (CleanError::NotFound { .. } | CleanError::NotADirectory { .. })) => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err).context("Cleanup failed"),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

/// The user's desktop folder, falling back to `~/Desktop`.
fn default_root() -> Result<PathBuf> {
    if let Some(desktop) = dirs::desktop_dir() {
        return Ok(desktop);
    }
    dirs::home_dir()
        .map(|home| home.join("Desktop"))
        .ok_or_else(|| color_eyre::eyre::eyre!("no home directory"))
}

/// Format bytes as human-readable size.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
