//! Catalog merging.

use tracing::debug;

use crate::catalog::AttributeMap;

/// Merge two base catalogs.
///
/// The result holds the union of keys. When a product is declared in both,
/// the `primary` record is kept whole and the `secondary` record is dropped;
/// categories are never merged field by field.
///
/// Run this on base catalogs, before expansion, so that every product has a
/// single authoritative record when its variants are derived.
pub fn merge(primary: &AttributeMap, secondary: &AttributeMap) -> AttributeMap {
    let mut merged = primary.clone();
    for (name, attrs) in secondary {
        if merged.contains_key(name) {
            debug!(product = %name, "secondary declaration shadowed by primary catalog");
            continue;
        }
        merged.insert(name.clone(), attrs.clone());
    }
    merged
}
