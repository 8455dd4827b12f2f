//! Keyword Match Engine — presence counts for a fixed skill vocabulary.
//!
//! Matching is literal substring search over boundary-decorated forms of
//! each token, precompiled once per configuration. No tokenizer, no stemming:
//! the vocabulary is small enough that scanning every (record × skill) pair
//! stays a bounded single pass.

use std::collections::HashMap;

use tracing::debug;

use crate::config::{AnalyticsConfig, BoundaryRule};
use crate::models::JobPosting;

/// A skill token with every boundary predicate precompiled: affix rules
/// become literal needles, the plural rule becomes a word-end scan.
#[derive(Debug, Clone)]
struct CompiledSkill {
    label: String,
    /// Decorated forms searched for as plain substrings.
    needles: Vec<String>,
    /// `{token}s`, accepted only where the `s` ends the word.
    plural: Option<String>,
}

impl CompiledSkill {
    /// True iff any boundary predicate accepts an occurrence in the
    /// normalized text. A bare token with no qualifying boundary — "java"
    /// inside "javascript", or a token flush against the start of the
    /// text — does not count.
    fn is_mentioned_in(&self, text: &str) -> bool {
        if self
            .needles
            .iter()
            .any(|needle| text.contains(needle.as_str()))
        {
            return true;
        }
        self.plural
            .as_deref()
            .is_some_and(|plural| plural_occurs(text, plural))
    }
}

/// Scans for `plural` occurrences whose trailing `s` ends the word. A
/// further letter right after the `s` means the hit sits inside a longer
/// word and is rejected.
fn plural_occurs(text: &str, plural: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = text[from..].find(plural) {
        let end = from + pos + plural.len();
        match text[end..].chars().next() {
            Some(next) if next.is_alphabetic() => from = from + pos + 1,
            _ => return true,
        }
    }
    false
}

/// The skill vocabulary with boundary predicates applied, built once per
/// configuration and reused across scans.
#[derive(Debug, Clone)]
pub struct CompiledVocabulary {
    skills: Vec<CompiledSkill>,
}

impl CompiledVocabulary {
    pub fn compile(config: &AnalyticsConfig) -> Self {
        let skills = config
            .vocabulary
            .iter()
            .map(|token| {
                let mut needles = Vec::new();
                let mut plural = None;
                for rule in &config.boundary_rules {
                    match rule {
                        BoundaryRule::Affix { prefix, suffix } => {
                            needles.push(format!("{prefix}{token}{suffix}"));
                        }
                        BoundaryRule::Plural => plural = Some(format!("{token}s")),
                    }
                }
                CompiledSkill {
                    label: token.clone(),
                    needles,
                    plural,
                }
            })
            .collect();
        Self { skills }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Joins description fragments with a single space and lower-cases the
/// result, the only normalization matching relies on.
fn normalize(description: &[String]) -> String {
    description.join(" ").to_lowercase()
}

/// Counts, per vocabulary skill, the number of records that mention it.
///
/// Presence count, not mention count: a record contributes at most 1 to each
/// skill no matter how many times or in how many decorated forms the token
/// occurs in its text. Skills mentioned in no record are omitted from the
/// result rather than zero-filled. The mapping is independent of vocabulary
/// iteration order.
pub fn skill_mention_counts(
    records: &[JobPosting],
    vocabulary: &CompiledVocabulary,
) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for posting in records {
        let text = normalize(&posting.description);
        for skill in &vocabulary.skills {
            if skill.is_mentioned_in(&text) {
                *counts.entry(skill.label.clone()).or_insert(0) += 1;
            }
        }
    }

    debug!(
        records = records.len(),
        skills_mentioned = counts.len(),
        "skill scan complete"
    );
    counts
}
