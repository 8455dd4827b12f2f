//! Observed-key categorical tables: employment-type counts and the
//! experience-share breakdown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sparse_counts;
use crate::models::JobPosting;

/// One row of a single-key count table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Posting count per employment type, ascending by label. Types with no
/// postings are omitted — the bar chart draws observed categories only.
pub fn employment_type_counts(records: &[JobPosting]) -> Vec<CategoryCount> {
    sparse_counts(records.iter().map(|posting| posting.employment_type.clone()))
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// One row of the two-key share table: an (employment type, experience)
/// combination, its count, and its percentage of that employment type's
/// counted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceShare {
    pub employment_type: String,
    pub experience_years: u32,
    pub count: u64,
    /// Percentage of this employment type's counted postings. Within one
    /// employment type the shares sum to 100, up to floating-point rounding.
    pub share_pct: f64,
}

/// Experience-requirement share per employment type.
///
/// Records without a numeric experience value are excluded before grouping,
/// so an employment type whose postings never state experience numerically
/// (typically "Internship") surfaces with no rows at all. Rows order by
/// employment type, then by experience years.
pub fn experience_share_by_employment(records: &[JobPosting]) -> Vec<ExperienceShare> {
    let mut excluded = 0u64;
    let pairs = records.iter().filter_map(|posting| {
        match posting.experience_years {
            Some(years) => Some((posting.employment_type.clone(), years)),
            None => {
                excluded += 1;
                None
            }
        }
    });
    let combos = sparse_counts(pairs);
    if excluded > 0 {
        debug!(
            excluded,
            "records without a numeric experience value left out of the share table"
        );
    }

    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for ((employment_type, _), count) in &combos {
        *totals.entry(employment_type.clone()).or_insert(0) += count;
    }

    combos
        .into_iter()
        .map(|((employment_type, experience_years), count)| {
            let share_pct = 100.0 * count as f64 / totals[&employment_type] as f64;
            ExperienceShare {
                employment_type,
                experience_years,
                count,
                share_pct,
            }
        })
        .collect()
}
