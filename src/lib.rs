//! sourcemap_dump library: script and source-map harvesting.
//!
//! This library fetches a web page, extracts every `<script src=...>` reference,
//! downloads each referenced script plus its optional `.map` companion into an
//! output folder, and reports whether any map files were obtained so the caller
//! can decide whether to hand the folder to a source recovery tool.
//!
//! # Example
//!
//! ```no_run
//! use sourcemap_dump::{run_dump, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     page_url: "https://example.com/app/".to_string(),
//!     output_dir: std::path::PathBuf::from("./dump"),
//!     ..Default::default()
//! };
//!
//! let report = run_dump(config).await?;
//! println!("{} scripts, {} maps", report.scripts_downloaded, report.maps_downloaded);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. A single-threaded (`current_thread`)
//! runtime is sufficient: all downloads happen strictly one at a time, in
//! document order.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
mod html;
pub mod initialization;
mod recovery;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DumpError, InitializationError};
pub use run::{run_dump, DumpReport};

// Internal run module (contains the main pipeline logic)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::{error, info};
    use scraper::Html;
    use url::Url;

    use crate::config::Config;
    use crate::error_handling::{categorize_reqwest_error, DumpError};
    use crate::fetch::{download_assets, fetch_page, DownloadOutcome};
    use crate::html::extract_script_sources;
    use crate::initialization::init_client;
    use crate::recovery::launch_recovery_tool;

    /// Results of a completed dump run.
    #[derive(Debug, Clone)]
    pub struct DumpReport {
        /// Number of script files written to the output folder
        pub scripts_downloaded: usize,
        /// Number of `.map` companion files written to the output folder
        pub maps_downloaded: usize,
        /// Whether at least one `.map` file was downloaded (the run result)
        pub map_files_found: bool,
        /// The output folder the assets were written to
        pub output_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the fetch-extract-download pipeline with the provided configuration.
    ///
    /// Fetches the page at `config.page_url`, extracts script references in
    /// document order, downloads each script and probes for its `.map`
    /// companion, and launches the configured source recovery command over the
    /// output folder when at least one map file landed.
    ///
    /// Request-level failures (unreachable page, non-success status on a
    /// script fetch) are logged and end the run early with whatever was
    /// downloaded so far; they do not surface as an `Err`. Only filesystem
    /// problems and client initialization failures are returned as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP client cannot be constructed
    /// - The output folder or a downloaded file cannot be written
    pub async fn run_dump(config: Config) -> Result<DumpReport> {
        let start_time = std::time::Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let mut outcome = DownloadOutcome::default();
        if let Err(err) = dump_assets(&client, &config, &mut outcome).await {
            match err {
                DumpError::Request { ref url, ref source } => {
                    // Request failures terminate the run but not the process;
                    // whatever was already written stays on disk.
                    error!(
                        "Error fetching URL {url}: {} ({source})",
                        categorize_reqwest_error(source)
                    );
                }
                DumpError::InvalidUrl { ref url, ref source } => {
                    error!("Error fetching URL {url}: invalid URL ({source})");
                }
                DumpError::Io { .. } => {
                    return Err(err).context("Failed writing downloaded assets");
                }
            }
        }

        let map_files_found = outcome.map_files_found();
        if map_files_found {
            launch_recovery_tool(&config.recovery_command, &config.output_dir);
        } else {
            info!("No map files were downloaded; the source recovery tool will not be launched");
        }

        Ok(DumpReport {
            scripts_downloaded: outcome.scripts_downloaded,
            maps_downloaded: outcome.maps_downloaded,
            map_files_found,
            output_dir: config.output_dir,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Fetches the page, extracts script references and downloads them.
    ///
    /// Accumulates per-file counts into `outcome` so that a mid-run abort
    /// still reports everything written before the failure.
    async fn dump_assets(
        client: &reqwest::Client,
        config: &Config,
        outcome: &mut DownloadOutcome,
    ) -> Result<(), DumpError> {
        let page_url = Url::parse(&config.page_url).map_err(|source| DumpError::InvalidUrl {
            url: config.page_url.clone(),
            source,
        })?;

        let body = fetch_page(client, &page_url).await?;

        // Html is not Send; scope it so the parse result is plain data
        // before the next await point.
        let references = {
            let document = Html::parse_document(&body);
            extract_script_sources(&document)
        };
        info!(
            "Found {} script reference{} on {}",
            references.len(),
            if references.len() == 1 { "" } else { "s" },
            page_url
        );

        download_assets(client, &page_url, &references, &config.output_dir, outcome).await
    }
}
