// Skill-mention pipeline: boundary-aware matching, synonym merge, ranked output.

pub mod canonical;
pub mod matcher;

pub use canonical::canonicalize_counts;
pub use matcher::{skill_mention_counts, CompiledVocabulary};

use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::models::JobPosting;

/// How many descending ranks fall in each emphasis band.
const TOP_BAND_LEN: usize = 5;
const NOTABLE_BAND_LEN: usize = 10;

/// Emphasis band assigned from descending rank, so the renderer colors the
/// bar chart without re-deriving thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBand {
    Top,
    Notable,
    Tail,
}

impl RankBand {
    /// Band for a zero-based descending rank: 0–4 top, 5–14 notable, rest tail.
    pub fn for_rank(rank: usize) -> Self {
        if rank < TOP_BAND_LEN {
            RankBand::Top
        } else if rank < TOP_BAND_LEN + NOTABLE_BAND_LEN {
            RankBand::Notable
        } else {
            RankBand::Tail
        }
    }
}

/// One row of the ranked skill table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    /// Number of records mentioning the skill (presence count).
    pub count: u64,
    pub band: RankBand,
}

/// The complete skill table: presence counts over the vocabulary, folded
/// through the synonym table, sorted descending by count. Ties break on the
/// skill label so reruns over an unchanged store are bit-identical.
pub fn ranked_skill_table(records: &[JobPosting], config: &AnalyticsConfig) -> Vec<SkillCount> {
    let vocabulary = CompiledVocabulary::compile(config);
    let merged = canonicalize_counts(skill_mention_counts(records, &vocabulary), config);

    let mut rows: Vec<(String, u64)> = merged.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    rows.into_iter()
        .enumerate()
        .map(|(rank, (skill, count))| SkillCount {
            skill,
            count,
            band: RankBand::for_rank(rank),
        })
        .collect()
}
