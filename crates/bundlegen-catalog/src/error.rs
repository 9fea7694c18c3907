//! Catalog error types.

/// Errors that can occur while validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A product name is empty or malformed.
    #[error("invalid product name '{name}': {detail}")]
    InvalidName { name: String, detail: String },

    /// An attribute list contains an unusable entry.
    #[error("invalid entry in '{product}.{category}': {detail}")]
    InvalidEntry {
        product: String,
        category: String,
        detail: String,
    },
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
