//! Catalog model and validation.
//!
//! A catalog is a TOML table keyed by product name:
//!
//! ```toml
//! [executorch]
//! libraries = ["c++"]
//! linux_libraries = ["pthread"]
//!
//! [kernels_llm]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::{Attributes, Category};
use crate::error::{CatalogError, Result};
use crate::expand::{expand, ExpandedMap};
use crate::merge::merge;

/// Product name → attribute record. Ordered, so every walk is deterministic.
pub type AttributeMap = BTreeMap<String, Attributes>;

/// The two product catalogs of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProductCatalogs {
    /// Products available on every platform. Authoritative on collision.
    #[serde(default)]
    pub cross_platform: AttributeMap,
    /// Products available on Apple platforms only.
    #[serde(default)]
    pub apple_only: AttributeMap,
}

impl ProductCatalogs {
    /// Merge both catalogs, then expand into release and debug variants.
    pub fn resolve(&self) -> ExpandedMap {
        expand(&merge(&self.cross_platform, &self.apple_only))
    }

    /// Validate both catalogs.
    pub fn validate(&self) -> Result<()> {
        validate_catalog(&self.cross_platform)?;
        validate_catalog(&self.apple_only)
    }
}

/// Check that product names and list entries are usable identifiers.
pub fn validate_catalog(catalog: &AttributeMap) -> Result<()> {
    for (name, attrs) in catalog {
        check_name(name)?;
        for category in Category::ALL {
            check_entries(name, category.key(), attrs.get(category))?;
            if let Some(staged) = attrs.staged(category) {
                check_entries(name, &category.staging_key(), staged)?;
            }
        }
    }
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CatalogError::InvalidName {
            name: name.to_string(),
            detail: "product name is empty".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(CatalogError::InvalidName {
            name: name.to_string(),
            detail: "product name contains whitespace".to_string(),
        });
    }
    Ok(())
}

fn check_entries(product: &str, category: &str, entries: &[String]) -> Result<()> {
    for entry in entries {
        if entry.trim().is_empty() {
            return Err(CatalogError::InvalidEntry {
                product: product.to_string(),
                category: category.to_string(),
                detail: "entry is empty".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_catalog(input: &str) -> Result<AttributeMap> {
        let catalog: AttributeMap = toml::from_str(input).unwrap();
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    #[test]
    fn parse_catalog_table() {
        let catalog = parse_catalog(
            r#"
[backend_xnnpack]
targets = ["threadpool"]

[executorch]
libraries = ["c++"]
linux_libraries = ["pthread"]

[kernels_quantized]
"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog["kernels_quantized"].is_empty());
        assert_eq!(catalog["executorch"].platform_exclusive_libraries, vec!["pthread"]);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = parse_catalog("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn reject_whitespace_in_name() {
        let result = parse_catalog("[\"bad name\"]\n");
        assert!(matches!(result, Err(CatalogError::InvalidName { .. })));
    }

    #[test]
    fn reject_empty_name() {
        let result = parse_catalog("[\"\"]\n");
        assert!(matches!(result, Err(CatalogError::InvalidName { .. })));
    }

    #[test]
    fn reject_empty_entry() {
        let result = parse_catalog("[executorch]\nlibraries = [\"\"]\n");
        match result {
            Err(CatalogError::InvalidEntry { product, category, .. }) => {
                assert_eq!(product, "executorch");
                assert_eq!(category, "libraries");
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn reject_empty_staged_entry() {
        let result = parse_catalog("[llm]\ntargets_debug = [\" \"]\n");
        match result {
            Err(CatalogError::InvalidEntry { category, .. }) => {
                assert_eq!(category, "targets_debug");
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn reject_duplicate_product() {
        assert!(toml::from_str::<AttributeMap>("[a]\n[a]\n").is_err());
    }

    #[test]
    fn resolve_product_catalogs() {
        let catalogs: ProductCatalogs = toml::from_str(
            r#"
[cross-platform.executorch]
libraries = ["c++"]

[apple-only.backend_mps]
frameworks = ["Metal"]

[apple-only.executorch]
frameworks = ["Ignored"]
"#,
        )
        .unwrap();
        catalogs.validate().unwrap();

        let resolved = catalogs.resolve();
        let keys: Vec<&str> = resolved.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["backend_mps", "backend_mps_debug", "executorch", "executorch_debug"]
        );
        assert!(resolved["executorch"].attributes.exclusive_frameworks.is_empty());
    }
}
