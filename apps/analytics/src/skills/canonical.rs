//! Synonym Canonicalizer — merges alias skill labels into canonical buckets.

use std::collections::HashMap;

use crate::config::AnalyticsConfig;

/// Folds raw per-skill counts through the synonym table.
///
/// Keys with a registered alias entry are re-credited to their canonical
/// label by summing; everything else passes through unchanged. The table is
/// consulted by exact match on the counted key, never on description text,
/// so an alias spelling that is not itself a vocabulary token never reaches
/// this function and its rule never fires. With the default tables that is
/// every rule — see [`AnalyticsConfig::reachable_synonyms`].
pub fn canonicalize_counts(
    raw: HashMap<String, u64>,
    config: &AnalyticsConfig,
) -> HashMap<String, u64> {
    let mut merged: HashMap<String, u64> = HashMap::with_capacity(raw.len());
    for (label, count) in raw {
        let bucket = match config.synonyms.get(&label) {
            Some(canonical) => canonical.clone(),
            None => label,
        };
        *merged.entry(bucket).or_insert(0) += count;
    }
    merged
}
