//! The complete build graph and its referential checks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::assemble::{AggregateTarget, BinaryTarget, PublicProduct};
use crate::error::{GraphError, Result};
use crate::platform::DeploymentTarget;
use crate::test_target::TestTarget;

/// Everything the package tool needs to declare the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildGraph {
    /// Package name.
    pub package: String,
    /// Minimum deployment versions.
    #[serde(default)]
    pub platforms: Vec<DeploymentTarget>,
    /// Public products, sorted by name.
    pub products: Vec<PublicProduct>,
    /// Prebuilt artifact targets, products and companions alike.
    pub binary_targets: Vec<BinaryTarget>,
    pub aggregate_targets: Vec<AggregateTarget>,
    #[serde(default)]
    pub test_targets: Vec<TestTarget>,
}

impl BuildGraph {
    /// Names of every declared target.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.binary_targets
            .iter()
            .map(|t| t.name.as_str())
            .chain(self.aggregate_targets.iter().map(|t| t.name.as_str()))
            .chain(self.test_targets.iter().map(|t| t.name.as_str()))
    }

    /// Look up an aggregate target by name.
    pub fn aggregate(&self, name: &str) -> Option<&AggregateTarget> {
        self.aggregate_targets.iter().find(|t| t.name == name)
    }

    /// Check that target names are unique and every edge resolves.
    ///
    /// Stops at the first violation.
    pub fn validate(&self) -> Result<()> {
        let mut declared = BTreeSet::new();
        for name in self.target_names() {
            if !declared.insert(name) {
                return Err(GraphError::DuplicateTarget {
                    name: name.to_string(),
                });
            }
        }

        let edges = self
            .aggregate_targets
            .iter()
            .flat_map(|t| t.dependencies.iter().map(move |d| (t.name.as_str(), d)))
            .chain(
                self.test_targets
                    .iter()
                    .flat_map(|t| t.dependencies.iter().map(move |d| (t.name.as_str(), d))),
            )
            .chain(
                self.products
                    .iter()
                    .map(|p| (p.name.as_str(), &p.target)),
            );

        for (target, dependency) in edges {
            if !declared.contains(dependency.as_str()) {
                return Err(GraphError::UnresolvedDependency {
                    target: target.to_string(),
                    dependency: dependency.clone(),
                });
            }
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
