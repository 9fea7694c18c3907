//! `bundlegen check`: validate without writing.

use std::path::Path;

use anyhow::Result;

use super::load_graph;

pub fn run(cwd: &Path, manifest: Option<&Path>) -> Result<()> {
    let (graph, path) = load_graph(cwd, manifest)?;
    println!(
        "{}: {} products, {} aggregate targets, {} binary targets, {} test targets",
        path.display(),
        graph.products.len(),
        graph.aggregate_targets.len(),
        graph.binary_targets.len(),
        graph.test_targets.len(),
    );
    Ok(())
}
