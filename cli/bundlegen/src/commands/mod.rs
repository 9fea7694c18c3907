//! CLI command implementations.

pub mod bundle;
pub mod check;
pub mod generate;
pub mod init;
pub mod tree;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bundlegen_graph::BuildGraph;

use crate::manifest;

/// Locate the manifest and generate its validated build graph.
pub(crate) fn load_graph(cwd: &Path, explicit: Option<&Path>) -> Result<(BuildGraph, PathBuf)> {
    let (manifest, path) = manifest::locate(explicit, cwd)?;
    let input = manifest.to_input()?;
    let graph = bundlegen_graph::generate(&input)
        .with_context(|| format!("generating build graph from {}", path.display()))?;
    Ok((graph, path))
}
