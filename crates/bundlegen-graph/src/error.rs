//! Build graph error types.

use bundlegen_catalog::CatalogError;

/// Errors that can occur while assembling or validating a build graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A dependency names a target that does not exist after expansion.
    #[error("target '{target}' depends on '{dependency}', which is not declared")]
    UnresolvedDependency { target: String, dependency: String },

    /// Two targets share a name.
    #[error("target '{name}' is declared more than once")]
    DuplicateTarget { name: String },

    /// An unrecognised platform identifier.
    #[error("unknown platform '{name}' (expected ios, macos, or linux)")]
    UnknownPlatform { name: String },

    /// Catalog validation error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
