//! The `info.json` manifest of an artifact bundle.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BundleError, Result};
use crate::triple::triple_for;

/// Schema version written into every manifest.
pub const SCHEMA_VERSION: &str = "1.0";

/// Top-level `info.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactBundleManifest {
    pub schema_version: String,
    pub artifacts: BTreeMap<String, Artifact>,
}

/// Kind of artifact held by a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    StaticLibrary,
}

/// One named artifact and its per-platform variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub version: String,
    pub variants: Vec<BundleVariant>,
}

/// One platform build of an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleVariant {
    /// Library path relative to the bundle root.
    pub path: String,
    pub supported_triples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_library_metadata: Option<StaticLibraryMetadata>,
}

/// Header and module map locations of a static library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticLibraryMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_map_path: Option<String>,
}

/// Create the variant entry for one platform.
///
/// Metadata is attached only when headers or a module map are given.
pub fn create_variant(
    platform: &str,
    library_path: &str,
    header_paths: &[String],
    modulemap_path: Option<&str>,
) -> Result<BundleVariant> {
    let triple = triple_for(platform)?;

    let static_library_metadata = if header_paths.is_empty() && modulemap_path.is_none() {
        None
    } else {
        Some(StaticLibraryMetadata {
            header_paths: header_paths.to_vec(),
            module_map_path: modulemap_path.map(str::to_string),
        })
    };

    Ok(BundleVariant {
        path: library_path.to_string(),
        supported_triples: vec![triple.to_string()],
        static_library_metadata,
    })
}

/// Create a manifest holding a single static-library artifact.
pub fn create_manifest(
    artifact_name: &str,
    version: &str,
    variants: Vec<BundleVariant>,
) -> ArtifactBundleManifest {
    let mut artifacts = BTreeMap::new();
    artifacts.insert(
        artifact_name.to_string(),
        Artifact {
            kind: ArtifactKind::StaticLibrary,
            version: version.to_string(),
            variants,
        },
    );
    ArtifactBundleManifest {
        schema_version: SCHEMA_VERSION.to_string(),
        artifacts,
    }
}

impl ArtifactBundleManifest {
    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the manifest, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| BundleError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| BundleError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "wrote artifact bundle manifest");
        Ok(())
    }
}
