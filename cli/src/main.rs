//! CLI for the Mindustry plugin catalog generator.
//!
//! Discovers plugin repositories on GitHub, resolves their metadata files
//! and writes the consolidated plugins.json catalog.

use clap::Parser;
use plugin_catalog::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Mindustry Plugin Catalog - Discover plugins on GitHub and build plugins.json.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token; optional, raises search rate limits.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Path of the catalog file to write.
    #[arg(long, default_value = "plugins.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Fatal: the run aborted without touching any previous catalog.
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.token, args.output);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Candidates discovered: {}", summary.candidates_discovered);
    println!("  Plugins resolved: {}", summary.plugins_resolved);
    println!("  Skipped (no metadata): {}", summary.skipped_no_metadata);
    println!("  Failed: {}", summary.failed);
    println!("  Catalog entries written: {}", summary.catalog_entries);
}
