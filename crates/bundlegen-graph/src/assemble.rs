//! Product assembly.
//!
//! Every expanded entry yields a binary artifact target and an aggregate
//! `<name>_with_dependencies` target. Only release entries are exposed as
//! public products; debug aggregates stay internal (tests depend on them).

use std::collections::BTreeSet;

use bundlegen_catalog::variant::aggregate_name;
use bundlegen_catalog::{ExpandedEntry, Variant};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::linker::{build_linker_plan, LinkerPlan};

/// Filesystem conventions for artifact bundles and target sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Layout {
    /// Directory holding prebuilt artifact bundles.
    pub artifact_root: String,
    /// Extension of an artifact bundle directory.
    pub bundle_extension: String,
    /// Directory holding the (empty) source folders of aggregate targets.
    pub source_root: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            artifact_root: "cmake-out".to_string(),
            bundle_extension: "artifactbundle".to_string(),
            source_root: ".Package.swift".to_string(),
        }
    }
}

impl Layout {
    /// `<artifact-root>/<name>.<bundle-extension>`
    pub fn artifact_path(&self, name: &str) -> String {
        format!("{}/{name}.{}", self.artifact_root, self.bundle_extension)
    }

    /// `<source-root>/<name>`
    pub fn source_path(&self, name: &str) -> String {
        format!("{}/{name}", self.source_root)
    }
}

/// A prebuilt binary artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTarget {
    pub name: String,
    pub path: String,
}

impl BinaryTarget {
    pub fn new(name: &str, layout: &Layout) -> Self {
        Self {
            name: name.to_string(),
            path: layout.artifact_path(name),
        }
    }
}

/// The buildable unit of one product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTarget {
    /// `<product>_with_dependencies`
    pub name: String,
    /// Binary artifact this aggregate wraps.
    pub artifact: String,
    pub variant: Variant,
    /// Target names, the artifact first, then companions.
    pub dependencies: Vec<String>,
    pub linker: LinkerPlan,
    pub path: String,
}

/// A product exposed to package consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProduct {
    pub name: String,
    /// The release aggregate target backing this product.
    pub target: String,
}

/// Output of [`assemble`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assembly {
    /// Sorted by name.
    pub products: Vec<PublicProduct>,
    pub binary_targets: Vec<BinaryTarget>,
    pub aggregate_targets: Vec<AggregateTarget>,
}

/// Build the aggregate target for one expanded entry.
///
/// Debug entries have every companion rewritten to its debug variant. The
/// rewritten names are not checked here; [`crate::BuildGraph::validate`]
/// reports companions that were never declared.
pub fn aggregate_target(entry: &ExpandedEntry, layout: &Layout) -> AggregateTarget {
    let dependencies = std::iter::once(entry.name.clone())
        .chain(
            entry
                .attributes
                .companion_targets
                .iter()
                .map(|companion| entry.variant.rewrite(companion)),
        )
        .collect();

    AggregateTarget {
        name: aggregate_name(&entry.name),
        artifact: entry.name.clone(),
        variant: entry.variant,
        dependencies,
        linker: build_linker_plan(&entry.attributes),
        path: layout.source_path(&entry.name),
    }
}

/// Assemble products, binary targets, and aggregate targets.
pub fn assemble(entries: &[ExpandedEntry], layout: &Layout) -> Assembly {
    let mut assembly = Assembly::default();
    let mut exposed = BTreeSet::new();

    for entry in entries {
        debug!(product = %entry.name, variant = %entry.variant, "assembling target");
        assembly
            .binary_targets
            .push(BinaryTarget::new(&entry.name, layout));
        assembly
            .aggregate_targets
            .push(aggregate_target(entry, layout));

        if entry.variant == Variant::Release && exposed.insert(entry.name.clone()) {
            assembly.products.push(PublicProduct {
                name: entry.name.clone(),
                target: aggregate_name(&entry.name),
            });
        }
    }

    assembly.products.sort_by(|a, b| a.name.cmp(&b.name));
    assembly
}
