//! Error types for reframe.

use std::io;
use thiserror::Error;

/// Result type alias for reframe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reframe operations.
///
/// A missing or unparseable journal key is *not* an error: the store reads
/// it as an empty collection and the next successful write replaces the bad
/// data. Looking up a record that does not exist returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
