//! eolrank: rank OS releases by support-period length.
//!
//! Reads an endoflife.date-style JSON catalog export and prints the N
//! operating-system release cycles with the longest support periods.

use anyhow::{Context, Result};
use clap::Parser;
use eolrank::pipeline::{exit_codes, run_to_target, OutputTarget, RunConfig, RunSummary};
use eolrank::EndDateFields;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "eolrank")]
#[command(version)]
#[command(about = "Rank OS releases by support-period length", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Run completed
    1  Unrecoverable input error (unreadable file, invalid catalog)

EXAMPLES:
    # Top 10 longest-supported OS releases
    eolrank catalog.json 10

    # Require the eol field, ignore the support fallback
    eolrank catalog.json 10 --strict-eol

    # Write the result to a file instead of stdout
    eolrank catalog.json 10 -O top.txt")]
struct Cli {
    /// Path to the JSON catalog file (endoflife.date export shape)
    catalog: PathBuf,

    /// Number of entries to print; zero or negative prints nothing,
    /// more than available prints everything
    #[arg(allow_negative_numbers = true)]
    count: i64,

    /// Resolve the end date from the `eol` field only, without falling
    /// back to `support`
    #[arg(long, env = "EOLRANK_STRICT_EOL")]
    strict_eol: bool,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match rank(cli) {
        Ok(summary) => {
            tracing::debug!(
                "Printed {} of {} entries",
                summary.printed,
                summary.total_entries
            );
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn rank(cli: Cli) -> Result<RunSummary> {
    let config = RunConfig {
        path: cli.catalog,
        count: cli.count,
        end_date_fields: if cli.strict_eol {
            EndDateFields::eol_only()
        } else {
            EndDateFields::default()
        },
    };
    let target = OutputTarget::from_option(cli.output_file);

    run_to_target(&config, &target)
        .with_context(|| format!("Failed to rank catalog {}", config.path.display()))
}
