//! `bundlegen generate`: emit the build graph as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::load_graph;

/// Generate the graph for the located manifest and write it to `output`,
/// or to stdout when no output path is given.
pub fn run(cwd: &Path, manifest: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let (graph, path) = load_graph(cwd, manifest)?;
    let json = graph.to_json().context("serializing build graph")?;

    match output {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(out, format!("{json}\n"))
                .with_context(|| format!("writing {}", out.display()))?;
            info!(
                manifest = %path.display(),
                output = %out.display(),
                "wrote build graph"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
