//! Target page retrieval.

use log::info;
use reqwest::Client;
use url::Url;

use crate::error_handling::DumpError;

/// Fetches the target page and returns its body as text.
///
/// A transport error or a non-success status is returned as
/// `DumpError::Request`; there is nothing to do without the page, so the
/// caller ends the run with a negative result.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, DumpError> {
    info!("Fetching page: {url}");
    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| DumpError::request(url.as_str(), source))?;

    response
        .text()
        .await
        .map_err(|source| DumpError::request(url.as_str(), source))
}
