//! `bundlegen tree`: print products with their variants and edges.

use std::path::Path;

use anyhow::Result;
use bundlegen_graph::format_tree;

use super::load_graph;

pub fn run(cwd: &Path, manifest: Option<&Path>) -> Result<()> {
    let (graph, _) = load_graph(cwd, manifest)?;
    print!("{}", format_tree(&graph));
    Ok(())
}
