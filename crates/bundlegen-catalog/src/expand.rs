//! Release/debug variant expansion.
//!
//! Expansion runs in two passes:
//!
//! 1. [`seed_variants`] copies every record to its own key as a release entry
//!    and to the `_debug` key as a debug entry, unchanged.
//! 2. [`apply_debug_overrides`] promotes staging lists (`targets_debug`, ...)
//!    over their categories in debug entries, then drops every staging list.
//!
//! A debug variant therefore inherits its release attributes unless the base
//! record declares a staging key for a category. The variant is fixed at
//! seeding time, never re-derived from the key.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::attributes::Attributes;
use crate::catalog::AttributeMap;
use crate::variant::{debug_name, Variant};

/// A single product variant after expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedEntry {
    /// Expanded key (`executorch` or `executorch_debug`).
    pub name: String,
    pub variant: Variant,
    pub attributes: Attributes,
}

/// Expanded key → entry.
pub type ExpandedMap = BTreeMap<String, ExpandedEntry>;

/// Expand a base catalog into release and debug variants.
pub fn expand(base: &AttributeMap) -> ExpandedMap {
    let expanded = apply_debug_overrides(seed_variants(base));
    info!(
        base = base.len(),
        expanded = expanded.len(),
        "expanded catalog variants"
    );
    expanded
}

/// First pass: emit `k` (release) and `k_debug` (debug) for every base key.
///
/// Keys are inserted in map order. A base key that already ends with the
/// debug suffix sorts after its release sibling, so it replaces that
/// sibling's seeded debug copy and keeps its own release entry.
pub fn seed_variants(base: &AttributeMap) -> ExpandedMap {
    let mut seeded = ExpandedMap::new();
    for (name, attrs) in base {
        let variants = [
            (name.clone(), Variant::Release),
            (debug_name(name), Variant::Debug),
        ];
        for (key, variant) in variants {
            let entry = ExpandedEntry {
                name: key.clone(),
                variant,
                attributes: attrs.clone(),
            };
            if let Some(replaced) = seeded.insert(key, entry) {
                warn!(
                    product = %replaced.name,
                    replaced = %replaced.variant,
                    by = %name,
                    "base product shadows a seeded debug variant"
                );
            }
        }
    }
    seeded
}

/// Second pass: apply staging overrides to debug entries and strip staging lists.
pub fn apply_debug_overrides(seeded: ExpandedMap) -> ExpandedMap {
    seeded
        .into_iter()
        .map(|(name, mut entry)| {
            if entry.variant.is_debug() && entry.attributes.has_staging() {
                debug!(
                    product = %name,
                    categories = ?entry
                        .attributes
                        .staged_categories()
                        .iter()
                        .map(|c| c.staging_key())
                        .collect::<Vec<_>>(),
                    "applying debug overrides"
                );
                entry.attributes = entry.attributes.promote_staged();
            }
            entry.attributes = entry.attributes.without_staging();
            (name, entry)
        })
        .collect()
}

/// List the entries of an expanded catalog in key order.
pub fn entries(expanded: &ExpandedMap) -> Vec<ExpandedEntry> {
    expanded.values().cloned().collect()
}
