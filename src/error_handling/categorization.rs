//! Request error categorization.

use super::types::RequestErrorKind;

/// Categorizes a `reqwest::Error` into a `RequestErrorKind`.
///
/// Status-bearing errors (from `error_for_status`) are classified by their
/// status code first; transport errors fall through to the reqwest error
/// predicates.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RequestErrorKind {
    if let Some(status) = error.status() {
        match status.as_u16() {
            403 => return RequestErrorKind::Forbidden,
            404 => return RequestErrorKind::NotFound,
            429 => return RequestErrorKind::TooManyRequests,
            _ if status.is_client_error() => return RequestErrorKind::ClientError,
            _ if status.is_server_error() => return RequestErrorKind::ServerError,
            _ => {
                // Non-standard status codes - fall through to the transport checks
            }
        }
    }

    if error.is_timeout() {
        RequestErrorKind::Timeout
    } else if error.is_connect() {
        RequestErrorKind::Connect
    } else if error.is_redirect() {
        RequestErrorKind::Redirect
    } else if error.is_body() {
        RequestErrorKind::Body
    } else if error.is_decode() {
        RequestErrorKind::Decode
    } else {
        RequestErrorKind::Other
    }
}
