//! Catalog merge implementations.

use std::collections::HashMap;

use crate::utils::VariantInfo;

/// Product name to quantity
pub type Catalog = HashMap<String, u64>;

/// Clone the first catalog, then fold the second one into it.
///
/// Quantities of products present in both are summed, saturating at `u64::MAX`.
pub fn merge_catalogs_original(catalog_a: &Catalog, catalog_b: &Catalog) -> Catalog {
    let mut merged = catalog_a.clone();
    for (product, quantity) in catalog_b {
        match merged.get_mut(product) {
            Some(existing) => *existing = existing.saturating_add(*quantity),
            None => {
                merged.insert(product.clone(), *quantity);
            }
        }
    }
    merged
}

/// Preallocate for both inputs and accumulate through the entry API.
pub fn merge_catalogs_entry(catalog_a: &Catalog, catalog_b: &Catalog) -> Catalog {
    let mut merged = Catalog::with_capacity(catalog_a.len() + catalog_b.len());
    for (product, quantity) in catalog_a.iter().chain(catalog_b) {
        let slot = merged.entry(product.clone()).or_insert(0);
        *slot = slot.saturating_add(*quantity);
    }
    merged
}

pub type MergeFn = fn(&Catalog, &Catalog) -> Catalog;

pub fn available_variants() -> Vec<VariantInfo<MergeFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Clone the first catalog and add the second into it",
            function: merge_catalogs_original,
        },
        VariantInfo {
            name: "entry",
            description: "Preallocated map filled through the entry API",
            function: merge_catalogs_entry,
        },
    ]
}
