//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that end a dump run.
///
/// `Request` and `InvalidUrl` abort the remaining work but are caught at the
/// top of the pipeline; the process still exits cleanly with a negative run
/// result. `Io` propagates out of the library as a hard failure.
#[derive(Error, Debug)]
pub enum DumpError {
    /// A network request failed or returned a non-success status.
    #[error("request for {url} failed: {source}")]
    Request {
        /// The address whose retrieval failed.
        url: String,
        /// The underlying transport or status error.
        #[source]
        source: ReqwestError,
    },

    /// The target page address could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        /// The offending address.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The output folder or a downloaded file could not be written.
    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        /// The path that could not be created or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl DumpError {
    /// Wraps a `reqwest::Error` with the address that was being fetched.
    pub(crate) fn request(url: impl Into<String>, source: ReqwestError) -> Self {
        DumpError::Request {
            url: url.into(),
            source,
        }
    }

    /// Wraps an I/O error with the path that was being written.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DumpError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Categories of request failures, used to label log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RequestErrorKind {
    // Specific HTTP status codes worth calling out
    /// 403 Forbidden - typically bot detection
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 429 Too Many Requests
    TooManyRequests,
    /// Other 4xx status
    ClientError,
    /// Any 5xx status
    ServerError,
    // Transport-level failures
    /// Request timed out
    Timeout,
    /// Connection could not be established
    Connect,
    /// Redirect policy violation
    Redirect,
    /// Failure while reading the response body
    Body,
    /// Failure while decoding the response body
    Decode,
    /// Anything else
    Other,
}

impl RequestErrorKind {
    /// Returns a human-readable label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestErrorKind::Forbidden => "forbidden (403, likely bot detection)",
            RequestErrorKind::NotFound => "not found (404)",
            RequestErrorKind::TooManyRequests => "too many requests (429)",
            RequestErrorKind::ClientError => "client error (4xx)",
            RequestErrorKind::ServerError => "server error (5xx)",
            RequestErrorKind::Timeout => "request timeout",
            RequestErrorKind::Connect => "connection error",
            RequestErrorKind::Redirect => "redirect error",
            RequestErrorKind::Body => "response body error",
            RequestErrorKind::Decode => "response decode error",
            RequestErrorKind::Other => "request error",
        }
    }
}

impl std::fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_request_error_kinds_have_labels() {
        for kind in RequestErrorKind::iter() {
            assert!(
                !kind.as_str().is_empty(),
                "{:?} should have a non-empty label",
                kind
            );
        }
    }

    #[test]
    fn test_dump_error_display_includes_url() {
        let err = DumpError::InvalidUrl {
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_dump_error_io_display_includes_path() {
        let err = DumpError::io(
            "/some/output/dir",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/some/output/dir"));
    }
}
