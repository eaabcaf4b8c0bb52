// web_app/api/error.rs - Loader error type

use thiserror::Error;

/// Failure of a sheet load.
///
/// Only transport-level problems are errors. Malformed CSV degrades per row
/// and an empty sheet is a valid, empty result.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to fetch sheet from '{url}': {reason}")]
    Transport { url: String, reason: String },
    #[error("sheet request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed reading sheet response body from '{url}': {reason}")]
    Body { url: String, reason: String },
    #[error("sheet load task failed: {0}")]
    Task(String),
}
