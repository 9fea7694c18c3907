//! Product catalog model for bundlegen.
//!
//! A catalog maps product names to a fixed set of attribute lists
//! (companion targets, Apple frameworks, libraries). This crate owns the
//! first two stages of manifest generation:
//!
//! - **Merging** a cross-platform catalog with an Apple-only catalog, where
//!   cross-platform declarations win on collision.
//! - **Expanding** every product into a release and a debug variant, with
//!   `_debug`-suffixed staging categories overriding the debug record.
//!
//! Everything here is pure: each function takes a map and returns a new one.

pub mod attributes;
pub mod catalog;
pub mod error;
pub mod expand;
pub mod merge;
pub mod variant;

// Re-exports for convenience.
pub use attributes::{Attributes, Category};
pub use catalog::{validate_catalog, AttributeMap, ProductCatalogs};
pub use error::{CatalogError, Result};
pub use expand::{apply_debug_overrides, entries, expand, seed_variants, ExpandedEntry, ExpandedMap};
pub use merge::merge;
pub use variant::{Variant, DEBUG_SUFFIX, DEPENDENCIES_SUFFIX};
