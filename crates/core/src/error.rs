//! Error types for the icon theme update.

use std::path::PathBuf;

/// Result type for icon theme update operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while updating the icon theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A network fetch failed before a body was received.
    #[error("Failed to fetch '{url}': {message}")]
    Transport { url: String, message: String },

    /// Commit metadata was not the expected JSON shape.
    #[error("Failed to parse commit metadata: {0}")]
    Parse(#[from] serde_json::Error),

    /// The theme document could not be rendered to JSON.
    #[error("Failed to serialize icon theme: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The theme document could not be written.
    #[error("Failed to write icon theme '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
