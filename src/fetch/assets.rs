//! Script and map downloading.

use std::path::Path;

use log::{info, warn};
use reqwest::Client;
use tokio::fs;
use url::Url;

use crate::config::MAP_SUFFIX;
use crate::error_handling::DumpError;

use super::naming::{asset_filename, resolve_reference};

/// Counts accumulated while downloading assets.
///
/// `maps_downloaded` is the explicit carrier of the run result: the final
/// launch decision depends on nothing else.
#[derive(Debug, Default, Clone)]
pub struct DownloadOutcome {
    /// Number of script files written to the output folder.
    pub scripts_downloaded: usize,
    /// Number of `.map` companion files written to the output folder.
    pub maps_downloaded: usize,
}

impl DownloadOutcome {
    /// Whether at least one map file was downloaded.
    pub fn map_files_found(&self) -> bool {
        self.maps_downloaded > 0
    }
}

/// Downloads every referenced script and probes for its `.map` companion.
///
/// Creates the output folder (and any intermediate directories) first, then
/// handles references strictly one at a time in document order:
///
/// - the resolved script address is fetched; a transport error or non-success
///   status aborts the remaining references (no per-asset isolation),
/// - the body is written to `<output_dir>/<final path segment>`, silently
///   overwriting any file already there,
/// - the address with the literal `.map` suffix appended is probed; a
///   non-success status just means no map is available for that script.
///
/// Counts are accumulated into `outcome` as files land, so an abort partway
/// through still reflects everything written before the failure.
pub async fn download_assets(
    client: &Client,
    page_url: &Url,
    references: &[String],
    output_dir: &Path,
    outcome: &mut DownloadOutcome,
) -> Result<(), DumpError> {
    fs::create_dir_all(output_dir)
        .await
        .map_err(|source| DumpError::io(output_dir, source))?;

    for reference in references {
        let script_url = match resolve_reference(page_url, reference) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!("Skipping unresolvable script reference {reference}: {e}");
                continue;
            }
        };

        info!("Fetching JavaScript source: {script_url}");
        let response = client
            .get(script_url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| DumpError::request(script_url.as_str(), source))?;
        let body = response
            .bytes()
            .await
            .map_err(|source| DumpError::request(script_url.as_str(), source))?;

        let filename = asset_filename(&script_url);
        let script_path = output_dir.join(&filename);
        fs::write(&script_path, &body)
            .await
            .map_err(|source| DumpError::io(&script_path, source))?;
        outcome.scripts_downloaded += 1;
        info!("Saved JavaScript to: {}", script_path.display());

        // The map candidate is the full resolved address with the suffix
        // appended literally, query string and all.
        let map_url = format!("{script_url}{MAP_SUFFIX}");
        info!("Checking for map file: {map_url}");
        let map_response = client
            .get(&map_url)
            .send()
            .await
            .map_err(|source| DumpError::request(&map_url, source))?;

        if map_response.status().is_success() {
            let map_body = map_response
                .bytes()
                .await
                .map_err(|source| DumpError::request(&map_url, source))?;
            let map_path = output_dir.join(format!("{filename}{MAP_SUFFIX}"));
            fs::write(&map_path, &map_body)
                .await
                .map_err(|source| DumpError::io(&map_path, source))?;
            outcome.maps_downloaded += 1;
            info!("Saved map file to: {}", map_path.display());
        } else {
            info!("No map file found for: {script_url}");
        }
    }

    Ok(())
}
