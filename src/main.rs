//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sourcemap_dump` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use sourcemap_dump::config::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use sourcemap_dump::initialization::init_logger_with;
use sourcemap_dump::{run_dump, Config, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "sourcemap_dump",
    version,
    about = "Download a page's JavaScript bundles and their source maps, then hand the folder to a source recovery tool"
)]
struct Cli {
    /// Address of the page to scan for script references
    url: String,

    /// Folder to save the downloaded scripts and map files into
    output_folder: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.clone().into(), log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config {
        page_url: cli.url,
        output_dir: cli.output_folder,
        log_level,
        log_format,
        timeout_seconds: cli.timeout_seconds,
        user_agent: cli.user_agent,
        ..Default::default()
    };

    // Request failures are reported inside the run and surface as a negative
    // result rather than an error; only filesystem problems land here.
    match run_dump(config).await {
        Ok(report) => {
            println!(
                "Downloaded {} script{} and {} map file{} to {} in {:.1}s",
                report.scripts_downloaded,
                if report.scripts_downloaded == 1 { "" } else { "s" },
                report.maps_downloaded,
                if report.maps_downloaded == 1 { "" } else { "s" },
                report.output_dir.display(),
                report.elapsed_seconds
            );
            if report.map_files_found {
                println!(
                    "{}",
                    "Map files were downloaded. The source recovery tool has been launched."
                        .green()
                );
            } else {
                println!(
                    "{}",
                    "No map files were found. The source recovery tool will not run.".red()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("sourcemap_dump error: {:#}", e);
            process::exit(1);
        }
    }
}
