//! `bundlegen.toml` parsing and package configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bundlegen_catalog::{AttributeMap, ProductCatalogs};
use bundlegen_graph::{DeploymentTarget, Layout, PackageInput, Platform, TestTarget};
use serde::{Deserialize, Serialize};

/// File name searched for by [`BundlegenManifest::find_and_load`].
pub const MANIFEST_FILE: &str = "bundlegen.toml";

/// The top-level manifest structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundlegenManifest {
    /// Package metadata (required).
    pub package: PackageConfig,
    /// Cross-platform and Apple-only product catalogs.
    #[serde(default)]
    pub products: ProductCatalogs,
    /// Companion binary targets (e.g. `threadpool`).
    #[serde(default)]
    pub targets: AttributeMap,
    /// Test targets.
    #[serde(default)]
    pub tests: Vec<TestTarget>,
}

/// Package metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PackageConfig {
    /// Package name (required).
    pub name: String,
    /// Directory holding prebuilt artifact bundles.
    #[serde(default = "default_artifact_root")]
    pub artifact_root: String,
    /// Artifact bundle directory extension.
    #[serde(default = "default_bundle_extension")]
    pub bundle_extension: String,
    /// Directory holding aggregate target sources.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Minimum deployment version per platform (e.g. `ios = "17"`).
    #[serde(default)]
    pub platforms: BTreeMap<String, String>,
}

fn default_artifact_root() -> String {
    Layout::default().artifact_root
}

fn default_bundle_extension() -> String {
    Layout::default().bundle_extension
}

fn default_source_root() -> String {
    Layout::default().source_root
}

impl BundlegenManifest {
    /// Search upward from `start_dir` for a `bundlegen.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let manifest = Self::load(&candidate)?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Load a manifest from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a manifest from a TOML string.
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing bundlegen.toml")
    }

    /// Convert into pipeline input.
    pub fn to_input(&self) -> Result<PackageInput> {
        let platforms = self
            .package
            .platforms
            .iter()
            .map(|(name, version)| {
                let platform: Platform = name
                    .parse()
                    .with_context(|| format!("in [package.platforms] of '{}'", self.package.name))?;
                Ok(DeploymentTarget::new(platform, version.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PackageInput {
            name: self.package.name.clone(),
            platforms,
            layout: Layout {
                artifact_root: self.package.artifact_root.clone(),
                bundle_extension: self.package.bundle_extension.clone(),
                source_root: self.package.source_root.clone(),
            },
            products: self.products.clone(),
            companions: self.targets.clone(),
            tests: self.tests.clone(),
        })
    }

    /// Generate the default template for `bundlegen init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[package]
name = "{name}"
artifact-root = "cmake-out"

[package.platforms]
ios = "17"
macos = "12"

[products.cross-platform.{name}]
libraries = ["c++"]
linux_libraries = ["pthread"]

[products.cross-platform.{name}_extension]
targets = ["{name}"]

[products.apple-only.{name}_metal]
apple_frameworks = ["Metal"]
"#
        )
    }
}

/// Resolve the manifest: an explicit path, or the nearest `bundlegen.toml`.
///
/// Returns the manifest and the path it was read from.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<(BundlegenManifest, PathBuf)> {
    if let Some(path) = explicit {
        let manifest = BundlegenManifest::load(path)?;
        return Ok((manifest, path.to_path_buf()));
    }
    let (manifest, dir) = BundlegenManifest::find_and_load(cwd)?.ok_or_else(|| {
        anyhow::anyhow!(
            "no {MANIFEST_FILE} found in {} or any parent directory",
            cwd.display()
        )
    })?;
    Ok((manifest, dir.join(MANIFEST_FILE)))
}
