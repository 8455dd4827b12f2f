//! Process-wide analysis constants, carried as one immutable value.
//!
//! Everything the aggregations treat as fixed — the skill vocabulary, the
//! synonym table, the boundary rules, the region list, the log-scale offset —
//! lives in [`AnalyticsConfig`] and is injected into each entry point instead
//! of sitting in module-level state. Tests run against custom tables without
//! touching anything shared.

use std::collections::{HashMap, HashSet};

use crate::errors::ConfigError;

// ────────────────────────────────────────────────────────────────────────────
// Boundary rules
// ────────────────────────────────────────────────────────────────────────────

/// One boundary-aware match predicate. A token counts as mentioned in a
/// record iff at least one rule accepts an occurrence in the normalized
/// description, which rejects tokens embedded in longer words ("java" inside
/// "javascript") while accepting punctuation-adjacent and pluralized
/// occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// The decorated form `{prefix}{token}{suffix}` occurs anywhere in the
    /// text, as a literal substring.
    Affix {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// The token occurs pluralized: followed by an `s` that ends the word
    /// (no further letter). The word-end check keeps "javas" inside
    /// "javascript" from counting as a plural of "java".
    Plural,
}

/// The twelve boundary predicates a token may satisfy: surrounded by spaces,
/// next to `/` `.` `,` `(` `)` `[` `]`, or pluralized with a trailing `s`.
pub const BOUNDARY_RULES: [BoundaryRule; 12] = [
    BoundaryRule::Affix { prefix: " ", suffix: " " },
    BoundaryRule::Affix { prefix: "/", suffix: "" },
    BoundaryRule::Affix { prefix: "", suffix: "/" },
    BoundaryRule::Affix { prefix: "", suffix: "." },
    BoundaryRule::Affix { prefix: ".", suffix: "" },
    BoundaryRule::Affix { prefix: ",", suffix: "" },
    BoundaryRule::Affix { prefix: "", suffix: "," },
    BoundaryRule::Affix { prefix: "(", suffix: "" },
    BoundaryRule::Affix { prefix: "", suffix: ")" },
    BoundaryRule::Affix { prefix: "[", suffix: "" },
    BoundaryRule::Affix { prefix: "", suffix: "]" },
    BoundaryRule::Plural,
];

// ────────────────────────────────────────────────────────────────────────────
// Default constant tables
// ────────────────────────────────────────────────────────────────────────────

/// Lower-case skill tokens scanned for in description text. Unordered — the
/// matcher's output is sorted at the end, never by vocabulary order.
const SKILL_VOCABULARY: [&str; 28] = [
    "python",
    "sql",
    "ml",
    "ai",
    "java",
    "cloud",
    "agile",
    "aws",
    "linux",
    "javascript",
    "finance",
    "statistics",
    "powerbi",
    "mathematics",
    "spark",
    "etl",
    "tableau",
    "dl",
    "hadoop",
    "sap",
    "uat",
    "sas",
    "microsoft office",
    "erp",
    "economics",
    "vba",
    "microsoft excel",
    "google sheet",
];

/// Alias → canonical label. Consulted by exact match on counted keys, never
/// on description text. None of these aliases are vocabulary members, so
/// with the default tables no rule can fire; see
/// [`AnalyticsConfig::reachable_synonyms`].
const SKILL_SYNONYMS: [(&str, &str); 4] = [
    ("artificial intelligence", "ai"),
    ("power bi", "powerbi"),
    ("machine learning", "ml"),
    ("deep learning", "dl"),
];

/// Complete region list for the posting map, in presentation order. The geo
/// table carries exactly one row per entry, and the names must match the
/// boundary-geometry mapping's keys verbatim.
const REGIONS: [&str; 17] = [
    "Selangor",
    "Johor",
    "Kuala Lumpur",
    "Malacca",
    "Negeri Sembilan",
    "Sabah",
    "Sarawak",
    "Kelantan",
    "Putrajaya",
    "Terengganu",
    "Pahang",
    "Kedah",
    "Perlis",
    "Perak",
    "Penang",
    "Labuan",
    "Singapore",
];

/// Added to every region count before log10 (log of zero is undefined) and
/// subtracted back out before a count is shown to anyone.
const GEO_LOG_OFFSET: f64 = 0.1;

/// Variances below this floor render at this band width on the ridgeline.
const MIN_BAND_WIDTH: f64 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// AnalyticsConfig
// ────────────────────────────────────────────────────────────────────────────

/// Immutable configuration injected into every aggregation entry point.
///
/// [`AnalyticsConfig::default`] carries the production tables; tests build
/// smaller ones by hand.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Lower-case skill tokens the matcher scans for.
    pub vocabulary: HashSet<String>,
    /// Alias → canonical skill label.
    pub synonyms: HashMap<String, String>,
    /// Decorations that qualify a token occurrence as a word-level match.
    pub boundary_rules: Vec<BoundaryRule>,
    /// Full region list, in map presentation order.
    pub regions: Vec<String>,
    /// Log-scale shift for zero-count regions.
    pub geo_log_offset: f64,
    /// Ridgeline band-width floor.
    pub min_band_width: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            vocabulary: SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            synonyms: SKILL_SYNONYMS
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
            boundary_rules: BOUNDARY_RULES.to_vec(),
            regions: REGIONS.iter().map(|s| s.to_string()).collect(),
            geo_log_offset: GEO_LOG_OFFSET,
            min_band_width: MIN_BAND_WIDTH,
        }
    }
}

impl AnalyticsConfig {
    /// Checks the constant tables for the mistakes that would corrupt every
    /// downstream table. The default configuration validates cleanly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vocabulary.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        let mut seen = HashSet::new();
        for region in &self.regions {
            if !seen.insert(region.as_str()) {
                return Err(ConfigError::DuplicateRegion(region.clone()));
            }
        }
        for (alias, canonical) in &self.synonyms {
            if alias == canonical {
                return Err(ConfigError::SelfReferentialSynonym(alias.clone()));
            }
        }
        Ok(())
    }

    /// Synonym aliases that are themselves vocabulary members — the only
    /// aliases the canonicalizer can ever see, since it reads counted keys
    /// rather than raw text. Empty with the default tables: every default
    /// alias is a multi-word phrase the matcher never counts.
    pub fn reachable_synonyms(&self) -> Vec<&str> {
        let mut reachable: Vec<&str> = self
            .synonyms
            .keys()
            .filter(|alias| self.vocabulary.contains(alias.as_str()))
            .map(|alias| alias.as_str())
            .collect();
        reachable.sort_unstable();
        reachable
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
