//! Artifact bundle manifests for bundlegen.
//!
//! Each prebuilt binary target is shipped as an `.artifactbundle` directory
//! whose `info.json` lists one static-library variant per platform triple.
//! This crate builds and writes that manifest.

pub mod error;
pub mod manifest;
pub mod request;
pub mod triple;

// Re-exports for convenience.
pub use error::{BundleError, Result};
pub use manifest::{
    create_manifest, create_variant, Artifact, ArtifactBundleManifest, ArtifactKind,
    BundleVariant, StaticLibraryMetadata,
};
pub use request::BundleRequest;
pub use triple::{triple_for, PLATFORM_TRIPLES};
