//! Test targets.
//!
//! Test targets are declared directly by name. They usually depend on debug
//! products or aggregates, and may force-load a static library so its
//! self-registering symbols survive dead-stripping.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// A `-force_load` of one static library on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceLoad {
    pub platform: Platform,
    pub library: String,
}

impl ForceLoad {
    /// Linker flags passed through the compiler driver.
    pub fn flags(&self) -> Vec<String> {
        vec![
            "-Xlinker".to_string(),
            "-force_load".to_string(),
            "-Xlinker".to_string(),
            self.library.clone(),
        ]
    }
}

/// A test target of the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TestTarget {
    pub name: String,
    pub path: String,
    /// Target names, checked against the graph during validation.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Resource files copied next to the test bundle.
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub force_load: Vec<ForceLoad>,
    /// Rendered `force-load` flags. Filled in during generation, never read
    /// from a manifest.
    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub linker_settings: Vec<PlatformFlags>,
}

/// Unsafe linker flags applied on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFlags {
    pub platform: Platform,
    pub flags: Vec<String>,
}

impl TestTarget {
    /// Flags of every force-load entry, in declaration order.
    pub fn linker_flags(&self) -> Vec<PlatformFlags> {
        self.force_load
            .iter()
            .map(|f| PlatformFlags {
                platform: f.platform,
                flags: f.flags(),
            })
            .collect()
    }

    /// This target with its force-load entries rendered into
    /// `linker_settings`.
    pub fn resolved(&self) -> Self {
        Self {
            linker_settings: self.linker_flags(),
            ..self.clone()
        }
    }
}
