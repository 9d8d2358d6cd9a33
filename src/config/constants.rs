//! Configuration constants.

/// Per-request timeout in seconds (used as the default).
///
/// Applies to every HTTP request the tool makes: the page fetch, each script
/// download and each map probe. There are no retries, so a slow host delays
/// the whole run by at most this much per request.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Some bundle hosts refuse requests without a browser-looking User-Agent.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Default output folder for downloaded scripts and maps.
pub const DEFAULT_OUTPUT_DIR: &str = "./dump";

/// Suffix appended to a resolved script address to form its map candidate,
/// and to the script's output filename to name the map file beside it.
pub const MAP_SUFFIX: &str = ".map";

/// Output filename used when a resolved script address has an empty final
/// path segment (e.g. a `src` pointing at a directory).
pub const FALLBACK_ASSET_NAME: &str = "script.js";

/// Command the output folder is handed to once at least one map file landed.
///
/// The folder path is appended as the final argument at launch time.
pub const RECOVERY_COMMAND: &[&str] = &["nodejs", "main.js", "-i"];
