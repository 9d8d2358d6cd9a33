//! Reference resolution and output file naming.

use url::Url;

use crate::config::FALLBACK_ASSET_NAME;

/// Resolves a script reference against the page address.
///
/// Absolute references pass through unchanged; relative ones are joined
/// against the page URL with standard base+relative resolution (including
/// the usual query and fragment handling).
pub fn resolve_reference(page_url: &Url, reference: &str) -> Result<Url, url::ParseError> {
    page_url.join(reference)
}

/// Derives the output filename for a resolved asset address.
///
/// Uses the final segment of the URL path, which never carries the query
/// string or fragment. An empty final segment (an address ending in `/`)
/// falls back to a fixed name rather than producing an unwritable path.
pub fn asset_filename(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    if segment.is_empty() {
        FALLBACK_ASSET_NAME.to_string()
    } else {
        segment.to_string()
    }
}
