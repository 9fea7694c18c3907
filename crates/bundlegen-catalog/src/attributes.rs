//! The per-product attribute record.
//!
//! Every product declares up to five attribute lists. Each list can also be
//! declared under a `_debug`-suffixed staging key; staging lists only take
//! effect on the debug variant during expansion and never survive it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variant::DEBUG_SUFFIX;

/// One attribute category of a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Targets this product links against internally.
    CompanionTargets,
    /// Apple-only frameworks, legacy `frameworks` key.
    ExclusiveFrameworks,
    /// Apple-only frameworks, current `apple_frameworks` key.
    ModernExclusiveFrameworks,
    /// Libraries linked on every platform.
    CrossPlatformLibraries,
    /// Libraries linked on Linux only.
    PlatformExclusiveLibraries,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::CompanionTargets,
        Category::ExclusiveFrameworks,
        Category::ModernExclusiveFrameworks,
        Category::CrossPlatformLibraries,
        Category::PlatformExclusiveLibraries,
    ];

    /// The catalog key for this category.
    pub fn key(self) -> &'static str {
        match self {
            Category::CompanionTargets => "targets",
            Category::ExclusiveFrameworks => "frameworks",
            Category::ModernExclusiveFrameworks => "apple_frameworks",
            Category::CrossPlatformLibraries => "libraries",
            Category::PlatformExclusiveLibraries => "linux_libraries",
        }
    }

    /// The staging key that overrides this category in debug variants.
    pub fn staging_key(self) -> String {
        format!("{}{DEBUG_SUFFIX}", self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The attribute record of a single product.
///
/// Absent keys deserialize to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Attributes {
    #[serde(default, rename = "targets", skip_serializing_if = "Vec::is_empty")]
    pub companion_targets: Vec<String>,
    #[serde(default, rename = "frameworks", skip_serializing_if = "Vec::is_empty")]
    pub exclusive_frameworks: Vec<String>,
    #[serde(default, rename = "apple_frameworks", skip_serializing_if = "Vec::is_empty")]
    pub modern_exclusive_frameworks: Vec<String>,
    #[serde(default, rename = "libraries", skip_serializing_if = "Vec::is_empty")]
    pub cross_platform_libraries: Vec<String>,
    #[serde(default, rename = "linux_libraries", skip_serializing_if = "Vec::is_empty")]
    pub platform_exclusive_libraries: Vec<String>,

    #[serde(default, rename = "targets_debug", skip_serializing_if = "Option::is_none")]
    pub companion_targets_debug: Option<Vec<String>>,
    #[serde(default, rename = "frameworks_debug", skip_serializing_if = "Option::is_none")]
    pub exclusive_frameworks_debug: Option<Vec<String>>,
    #[serde(
        default,
        rename = "apple_frameworks_debug",
        skip_serializing_if = "Option::is_none"
    )]
    pub modern_exclusive_frameworks_debug: Option<Vec<String>>,
    #[serde(default, rename = "libraries_debug", skip_serializing_if = "Option::is_none")]
    pub cross_platform_libraries_debug: Option<Vec<String>>,
    #[serde(
        default,
        rename = "linux_libraries_debug",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform_exclusive_libraries_debug: Option<Vec<String>>,
}

impl Attributes {
    /// The list stored under `category`.
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::CompanionTargets => &self.companion_targets,
            Category::ExclusiveFrameworks => &self.exclusive_frameworks,
            Category::ModernExclusiveFrameworks => &self.modern_exclusive_frameworks,
            Category::CrossPlatformLibraries => &self.cross_platform_libraries,
            Category::PlatformExclusiveLibraries => &self.platform_exclusive_libraries,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::CompanionTargets => &mut self.companion_targets,
            Category::ExclusiveFrameworks => &mut self.exclusive_frameworks,
            Category::ModernExclusiveFrameworks => &mut self.modern_exclusive_frameworks,
            Category::CrossPlatformLibraries => &mut self.cross_platform_libraries,
            Category::PlatformExclusiveLibraries => &mut self.platform_exclusive_libraries,
        }
    }

    /// The staging override declared for `category`, if any.
    pub fn staged(&self, category: Category) -> Option<&[String]> {
        match category {
            Category::CompanionTargets => self.companion_targets_debug.as_deref(),
            Category::ExclusiveFrameworks => self.exclusive_frameworks_debug.as_deref(),
            Category::ModernExclusiveFrameworks => {
                self.modern_exclusive_frameworks_debug.as_deref()
            }
            Category::CrossPlatformLibraries => self.cross_platform_libraries_debug.as_deref(),
            Category::PlatformExclusiveLibraries => {
                self.platform_exclusive_libraries_debug.as_deref()
            }
        }
    }

    fn staged_mut(&mut self, category: Category) -> &mut Option<Vec<String>> {
        match category {
            Category::CompanionTargets => &mut self.companion_targets_debug,
            Category::ExclusiveFrameworks => &mut self.exclusive_frameworks_debug,
            Category::ModernExclusiveFrameworks => &mut self.modern_exclusive_frameworks_debug,
            Category::CrossPlatformLibraries => &mut self.cross_platform_libraries_debug,
            Category::PlatformExclusiveLibraries => &mut self.platform_exclusive_libraries_debug,
        }
    }

    /// Replace a category's list.
    pub fn with(mut self, category: Category, values: &[&str]) -> Self {
        *self.get_mut(category) = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Declare a staging override for a category.
    pub fn with_staged(mut self, category: Category, values: &[&str]) -> Self {
        *self.staged_mut(category) = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Whether any staging key is declared.
    pub fn has_staging(&self) -> bool {
        Category::ALL.iter().any(|c| self.staged(*c).is_some())
    }

    /// Categories whose staging key is declared.
    pub fn staged_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.staged(*c).is_some())
            .collect()
    }

    /// Copy every declared staging list over its unsuffixed category.
    ///
    /// Staging lists are left in place; [`Attributes::without_staging`]
    /// removes them.
    pub fn promote_staged(mut self) -> Self {
        for category in Category::ALL {
            if let Some(values) = self.staged(category).map(<[String]>::to_vec) {
                *self.get_mut(category) = values;
            }
        }
        self
    }

    /// Drop every staging list.
    pub fn without_staging(mut self) -> Self {
        for category in Category::ALL {
            *self.staged_mut(category) = None;
        }
        self
    }

    /// Whether every category (staging included) is empty.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty()) && !self.has_staging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_are_empty() {
        let attrs: Attributes = toml::from_str("").unwrap();
        assert!(attrs.is_empty());
        for category in Category::ALL {
            assert!(attrs.get(category).is_empty());
            assert!(attrs.staged(category).is_none());
        }
    }

    #[test]
    fn parse_catalog_keys() {
        let attrs: Attributes = toml::from_str(
            r#"
targets = ["threadpool"]
apple_frameworks = ["Accelerate"]
libraries = ["c++"]
linux_libraries = ["pthread"]
frameworks = ["CoreML"]
targets_debug = ["threadpool_debug"]
"#,
        )
        .unwrap();
        assert_eq!(attrs.companion_targets, vec!["threadpool"]);
        assert_eq!(attrs.modern_exclusive_frameworks, vec!["Accelerate"]);
        assert_eq!(attrs.cross_platform_libraries, vec!["c++"]);
        assert_eq!(attrs.platform_exclusive_libraries, vec!["pthread"]);
        assert_eq!(attrs.exclusive_frameworks, vec!["CoreML"]);
        assert_eq!(
            attrs.staged(Category::CompanionTargets),
            Some(&["threadpool_debug".to_string()][..])
        );
        assert_eq!(attrs.staged_categories(), vec![Category::CompanionTargets]);
    }

    #[test]
    fn reject_unknown_category() {
        let result: Result<Attributes, _> = toml::from_str("libraires = [\"m\"]");
        assert!(result.is_err());
    }

    #[test]
    fn promote_then_strip() {
        let attrs = Attributes::default()
            .with(Category::CrossPlatformLibraries, &["c++"])
            .with_staged(Category::CrossPlatformLibraries, &["c++", "asan"]);

        let promoted = attrs.promote_staged();
        assert_eq!(promoted.cross_platform_libraries, vec!["c++", "asan"]);
        assert!(promoted.has_staging());

        let stripped = promoted.without_staging();
        assert!(!stripped.has_staging());
        assert_eq!(stripped.cross_platform_libraries, vec!["c++", "asan"]);
    }

    #[test]
    fn staging_keys() {
        assert_eq!(Category::CompanionTargets.staging_key(), "targets_debug");
        assert_eq!(
            Category::ModernExclusiveFrameworks.staging_key(),
            "apple_frameworks_debug"
        );
    }
}
