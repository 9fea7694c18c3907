//! Build variants and the naming rules that tie them together.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix appended to a product name to form its debug variant.
pub const DEBUG_SUFFIX: &str = "_debug";

/// Suffix appended to a product name to form its aggregate target.
pub const DEPENDENCIES_SUFFIX: &str = "_with_dependencies";

/// The build flavour of an expanded product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Release,
    Debug,
}

impl Variant {
    /// Point a dependency name at this variant.
    ///
    /// Release leaves the name alone; debug appends [`DEBUG_SUFFIX`].
    pub fn rewrite(self, dependency: &str) -> String {
        match self {
            Variant::Release => dependency.to_string(),
            Variant::Debug => debug_name(dependency),
        }
    }

    pub fn is_debug(self) -> bool {
        self == Variant::Debug
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Release => write!(f, "release"),
            Variant::Debug => write!(f, "debug"),
        }
    }
}

/// The debug variant key for `name`.
pub fn debug_name(name: &str) -> String {
    format!("{name}{DEBUG_SUFFIX}")
}

/// The aggregate target name for an expanded product key.
pub fn aggregate_name(name: &str) -> String {
    format!("{name}{DEPENDENCIES_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_name_appends_suffix() {
        assert_eq!(debug_name("executorch"), "executorch_debug");
        assert_eq!(debug_name("tool_debug"), "tool_debug_debug");
    }

    #[test]
    fn rewrite_follows_variant() {
        assert_eq!(Variant::Release.rewrite("threadpool"), "threadpool");
        assert_eq!(Variant::Debug.rewrite("threadpool"), "threadpool_debug");
    }

    #[test]
    fn variant_display() {
        assert_eq!(Variant::Release.to_string(), "release");
        assert!(Variant::Debug.is_debug());
        assert!(!Variant::Release.is_debug());
    }

    #[test]
    fn aggregate_names() {
        assert_eq!(aggregate_name("backend_mps"), "backend_mps_with_dependencies");
        assert_eq!(
            aggregate_name("backend_mps_debug"),
            "backend_mps_debug_with_dependencies"
        );
    }
}
