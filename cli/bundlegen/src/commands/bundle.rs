//! `bundlegen bundle`: write an artifact bundle `info.json`.

use std::path::Path;

use anyhow::{Context, Result};
use bundlegen_bundle::BundleRequest;

pub fn run(request: &BundleRequest, output: &Path) -> Result<()> {
    let manifest = request
        .build()
        .with_context(|| format!("building manifest for '{}'", request.name))?;
    manifest.write(output)?;
    println!("Wrote {}", output.display());
    Ok(())
}
