//! Page fetching and asset downloading.
//!
//! Everything here is strictly sequential: one request at a time, in document
//! order, over a single shared client.

mod assets;
mod naming;
mod page;

pub use assets::{download_assets, DownloadOutcome};
pub use naming::{asset_filename, resolve_reference};
pub use page::fetch_page;
