//! `bundlegen init`: manifest scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::{BundlegenManifest, MANIFEST_FILE};

/// Write a template `bundlegen.toml` into `dir`, creating it if needed.
///
/// The package name is taken from the directory's final component.
pub fn run(dir: &Path) -> Result<()> {
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("package")
        .replace('-', "_");
    create_manifest(dir, &name)
}

pub(crate) fn create_manifest(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    fs::write(&path, BundlegenManifest::template(name))
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}
