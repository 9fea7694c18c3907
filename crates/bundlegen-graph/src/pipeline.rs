//! End-to-end graph generation.
//!
//! Pipeline stages:
//! 1. **Validate** both product catalogs and the companion catalog
//! 2. **Merge** cross-platform over Apple-only products
//! 3. **Expand** products and companions into release/debug variants
//! 4. **Assemble** products, artifacts, and aggregates (linker plans included)
//! 5. **Validate** the graph: unique names, every edge resolves

use bundlegen_catalog::{entries, expand, validate_catalog, AttributeMap, ProductCatalogs};
use tracing::{info, warn};

use crate::assemble::{assemble, BinaryTarget, Layout};
use crate::error::Result;
use crate::graph::BuildGraph;
use crate::platform::DeploymentTarget;
use crate::test_target::TestTarget;

/// Declarative input for one package.
#[derive(Debug, Clone, Default)]
pub struct PackageInput {
    pub name: String,
    pub platforms: Vec<DeploymentTarget>,
    pub layout: Layout,
    pub products: ProductCatalogs,
    /// Internal binary targets: expanded, but never exposed or aggregated.
    pub companions: AttributeMap,
    pub tests: Vec<TestTarget>,
}

/// Run the full pipeline and return a validated build graph.
///
/// Any unresolved dependency aborts generation; no partial graph is returned.
pub fn generate(input: &PackageInput) -> Result<BuildGraph> {
    input.products.validate()?;
    validate_catalog(&input.companions)?;

    let expanded = input.products.resolve();
    let assembly = assemble(&entries(&expanded), &input.layout);

    let mut binary_targets = companion_targets(&input.companions, &input.layout);
    binary_targets.extend(assembly.binary_targets);

    let graph = BuildGraph {
        package: input.name.clone(),
        platforms: input.platforms.clone(),
        products: assembly.products,
        binary_targets,
        aggregate_targets: assembly.aggregate_targets,
        test_targets: input.tests.iter().map(TestTarget::resolved).collect(),
    };
    graph.validate()?;

    info!(
        package = %graph.package,
        products = graph.products.len(),
        binary_targets = graph.binary_targets.len(),
        aggregate_targets = graph.aggregate_targets.len(),
        test_targets = graph.test_targets.len(),
        "generated build graph"
    );
    Ok(graph)
}

/// Binary targets for the companion catalog, both variants.
fn companion_targets(companions: &AttributeMap, layout: &Layout) -> Vec<BinaryTarget> {
    for (name, attrs) in companions {
        if !attrs.is_empty() {
            warn!(companion = %name, "attributes on companion targets are ignored");
        }
    }
    expand(companions)
        .keys()
        .map(|name| BinaryTarget::new(name, layout))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::platform::Platform;
    use crate::test_target::ForceLoad;
    use bundlegen_catalog::{Attributes, Category};

    fn input() -> PackageInput {
        let mut products = ProductCatalogs::default();
        products.cross_platform.insert(
            "backend_xnnpack".into(),
            Attributes::default().with(Category::CompanionTargets, &["threadpool"]),
        );
        products.apple_only.insert(
            "backend_mps".into(),
            Attributes::default().with(Category::ExclusiveFrameworks, &["Metal"]),
        );
        let mut companions = AttributeMap::new();
        companions.insert("threadpool".into(), Attributes::default());

        PackageInput {
            name: "executorch".into(),
            products,
            companions,
            ..PackageInput::default()
        }
    }

    #[test]
    fn generate_resolves_companions() {
        let graph = generate(&input()).unwrap();
        assert_eq!(graph.products.len(), 2);
        // 2 companions + 4 product variants
        assert_eq!(graph.binary_targets.len(), 6);
        assert_eq!(graph.aggregate_targets.len(), 4);
        assert!(graph.aggregate("threadpool_with_dependencies").is_none());
        assert_eq!(
            graph
                .aggregate("backend_xnnpack_debug_with_dependencies")
                .unwrap()
                .dependencies,
            vec!["backend_xnnpack_debug", "threadpool_debug"]
        );
    }

    #[test]
    fn missing_companion_aborts() {
        let mut input = input();
        input.companions.clear();
        let err = generate(&input).unwrap_err();
        assert!(matches!(err, GraphError::UnresolvedDependency { .. }));
    }

    #[test]
    fn invalid_catalog_aborts() {
        let mut input = input();
        input
            .products
            .cross_platform
            .insert("".into(), Attributes::default());
        assert!(matches!(generate(&input), Err(GraphError::Catalog(_))));
    }

    #[test]
    fn force_load_flags_reach_graph_json() {
        let mut input = input();
        input.tests.push(TestTarget {
            name: "tests".into(),
            path: "extension/apple/ExecuTorch/__tests__".into(),
            dependencies: vec!["backend_xnnpack_debug".into()],
            resources: Vec::new(),
            force_load: vec![ForceLoad {
                platform: Platform::Macos,
                library: "cmake-out/backend_xnnpack.artifactbundle/macos-arm64/libxnnpack.a"
                    .into(),
            }],
            linker_settings: Vec::new(),
        });

        let graph = generate(&input).unwrap();
        let json: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        let settings = &json["test-targets"][0]["linker-settings"][0];
        assert_eq!(settings["platform"], "macos");
        assert_eq!(
            settings["flags"],
            serde_json::json!([
                "-Xlinker",
                "-force_load",
                "-Xlinker",
                "cmake-out/backend_xnnpack.artifactbundle/macos-arm64/libxnnpack.a"
            ])
        );
    }

    #[test]
    fn empty_input_is_empty_graph() {
        let graph = generate(&PackageInput::default()).unwrap();
        assert!(graph.products.is_empty());
        assert!(graph.binary_targets.is_empty());
        assert!(graph.aggregate_targets.is_empty());
    }
}
