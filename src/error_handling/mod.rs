//! Error types and categorization.
//!
//! The error taxonomy mirrors how failures are surfaced to the user:
//! request-level errors end the run early but leave the process exit clean,
//! while filesystem errors propagate and terminate the process abnormally.

mod categorization;
mod types;

pub use categorization::categorize_reqwest_error;
pub use types::{DumpError, InitializationError, RequestErrorKind};
