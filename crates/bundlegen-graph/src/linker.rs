//! Linker plan construction.

use std::fmt;

use bundlegen_catalog::{Attributes, Category};
use serde::{Deserialize, Serialize};

use crate::platform::PlatformScope;

/// One platform-scoped linker setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LinkerDirective {
    /// Link a framework.
    LinkFramework { name: String, scope: PlatformScope },
    /// Link a library.
    LinkLibrary { name: String, scope: PlatformScope },
}

impl fmt::Display for LinkerDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, name, scope) = match self {
            LinkerDirective::LinkFramework { name, scope } => ("framework", name, scope),
            LinkerDirective::LinkLibrary { name, scope } => ("library", name, scope),
        };
        write!(f, "{kind} {name} ({scope})")
    }
}

/// Ordered linker settings of one aggregate target.
pub type LinkerPlan = Vec<LinkerDirective>;

fn apple_framework(name: String) -> LinkerDirective {
    LinkerDirective::LinkFramework {
        name,
        scope: PlatformScope::AppleOnly,
    }
}

fn any_library(name: String) -> LinkerDirective {
    LinkerDirective::LinkLibrary {
        name,
        scope: PlatformScope::All,
    }
}

fn linux_library(name: String) -> LinkerDirective {
    LinkerDirective::LinkLibrary {
        name,
        scope: PlatformScope::LinuxOnly,
    }
}

/// Category order and the directive each category produces.
const PLAN_ORDER: [(Category, fn(String) -> LinkerDirective); 4] = [
    (Category::ModernExclusiveFrameworks, apple_framework),
    // Legacy `frameworks` key, still accepted for older declarations.
    (Category::ExclusiveFrameworks, apple_framework),
    (Category::CrossPlatformLibraries, any_library),
    (Category::PlatformExclusiveLibraries, linux_library),
];

/// Build the linker plan for one attribute record.
///
/// Output order is fixed: Apple frameworks, legacy frameworks, cross-platform
/// libraries, Linux libraries, each in declaration order. Names repeated
/// across categories are emitted once per category.
pub fn build_linker_plan(attrs: &Attributes) -> LinkerPlan {
    PLAN_ORDER
        .iter()
        .flat_map(|(category, directive)| attrs.get(*category).iter().cloned().map(*directive))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_empty_plan() {
        assert!(build_linker_plan(&Attributes::default()).is_empty());
    }

    #[test]
    fn cross_platform_library() {
        let attrs = Attributes::default().with(Category::CrossPlatformLibraries, &["c++"]);
        assert_eq!(
            build_linker_plan(&attrs),
            vec![LinkerDirective::LinkLibrary {
                name: "c++".into(),
                scope: PlatformScope::All,
            }]
        );
    }

    #[test]
    fn fixed_category_order() {
        let attrs = Attributes::default()
            .with(Category::PlatformExclusiveLibraries, &["pthread"])
            .with(Category::CrossPlatformLibraries, &["c++", "sqlite3"])
            .with(Category::ExclusiveFrameworks, &["CoreML"])
            .with(Category::ModernExclusiveFrameworks, &["Accelerate"])
            .with(Category::CompanionTargets, &["threadpool"]);

        let plan = build_linker_plan(&attrs);
        let rendered: Vec<String> = plan.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "framework Accelerate (ios, macos)",
                "framework CoreML (ios, macos)",
                "library c++ (all)",
                "library sqlite3 (all)",
                "library pthread (linux)",
            ]
        );
    }

    #[test]
    fn overlapping_frameworks_are_not_deduplicated() {
        let attrs = Attributes::default()
            .with(Category::ModernExclusiveFrameworks, &["Accelerate"])
            .with(Category::ExclusiveFrameworks, &["Accelerate", "CoreML"]);
        let rendered: Vec<String> = build_linker_plan(&attrs)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "framework Accelerate (ios, macos)",
                "framework Accelerate (ios, macos)",
                "framework CoreML (ios, macos)",
            ]
        );
    }

    #[test]
    fn plan_is_deterministic() {
        let attrs = Attributes::default()
            .with(Category::ExclusiveFrameworks, &["Metal", "MetalPerformanceShaders"])
            .with(Category::PlatformExclusiveLibraries, &["pthread", "dl"]);
        assert_eq!(build_linker_plan(&attrs), build_linker_plan(&attrs.clone()));
    }

    #[test]
    fn directive_json_shape() {
        let directive = LinkerDirective::LinkFramework {
            name: "Metal".into(),
            scope: PlatformScope::AppleOnly,
        };
        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(json["kind"], "link-framework");
        assert_eq!(json["name"], "Metal");
        assert_eq!(json["scope"], "apple-only");
    }
}
