//! Bundle error types.

use std::path::PathBuf;

/// Errors that can occur while building an artifact bundle manifest.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// Platform identifier with no known triple.
    #[error("unknown platform: {platform}")]
    UnknownPlatform { platform: String },

    /// Per-platform argument lists of different lengths.
    #[error("{detail}")]
    ArgumentMismatch { detail: String },

    /// Failure writing the manifest.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;
