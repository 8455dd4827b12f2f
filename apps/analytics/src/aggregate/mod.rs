// Aggregation primitives and the derived dashboard tables.
//
// Two counting modes are kept deliberately distinct: observed-key (sparse)
// for the categorical bar tables, fixed-key zero-filled (dense) for the map.
// The asymmetry is intentional — a bar chart only draws observed categories,
// a choropleth must paint every region.

pub mod categorical;
pub mod experience;
pub mod geo;

use std::collections::{BTreeMap, HashMap};

/// Counts per observed key, in ascending key order. Keys with zero
/// occurrences never appear in the result.
pub fn sparse_counts<K: Ord>(keys: impl IntoIterator<Item = K>) -> BTreeMap<K, u64> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Counts observed keys onto a fixed, complete key list, in list order.
/// Every fixed key yields exactly one row, zero-filled when absent from the
/// data; observed keys outside the list are dropped.
pub fn dense_counts<'k>(
    fixed_keys: &'k [String],
    observed: impl IntoIterator<Item = impl AsRef<str>>,
) -> Vec<(&'k str, u64)> {
    let index: HashMap<&str, usize> = fixed_keys
        .iter()
        .enumerate()
        .map(|(position, key)| (key.as_str(), position))
        .collect();

    let mut counts = vec![0u64; fixed_keys.len()];
    for key in observed {
        if let Some(&position) = index.get(key.as_ref()) {
            counts[position] += 1;
        }
    }

    fixed_keys
        .iter()
        .map(String::as_str)
        .zip(counts)
        .collect()
}
