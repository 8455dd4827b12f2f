//! Analytics core for the scraped job-posting dashboard.
//!
//! Turns an immutable collection of scraped postings into the derived tables
//! the rendering layer draws: the ranked skill-mention table, the
//! employment-type counts, the experience share per employment type, the
//! per-seniority experience profiles, and the region posting counts prepared
//! for a log-scale map. Every table is recomputed from scratch on demand —
//! nothing here caches, mutates shared state, or performs I/O, so concurrent
//! computations over one store are safe by construction.

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod models;
pub mod skills;
pub mod store;

// Re-export the tables and types the embedding dashboard consumes.
pub use aggregate::categorical::{
    employment_type_counts, experience_share_by_employment, CategoryCount, ExperienceShare,
};
pub use aggregate::experience::{experience_distribution, ExperienceProfile};
pub use aggregate::geo::{region_posting_table, LogTick, RegionPostings, LOG_TICKS};
pub use config::{AnalyticsConfig, BoundaryRule, BOUNDARY_RULES};
pub use errors::ConfigError;
pub use models::{JobPosting, SeniorityLevel};
pub use skills::{ranked_skill_table, RankBand, SkillCount};
pub use store::RecordStore;

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        let records: Vec<JobPosting> = serde_json::from_str(
            r#"[
                {
                    "title": "Data Analyst",
                    "seniority": "Entry level",
                    "experience_years": 1,
                    "employment_type": "Full-time",
                    "location": "Kuala Lumpur",
                    "description": ["Solid sql, and python, skills expected."]
                },
                {
                    "title": "Data Scientist",
                    "seniority": "Mid-Senior level",
                    "experience_years": 3,
                    "employment_type": "Full-time",
                    "location": "Singapore",
                    "description": ["Deploys on aws/cloud infrastructure."]
                },
                {
                    "title": null,
                    "seniority": "Internship",
                    "experience_years": null,
                    "employment_type": "Internship",
                    "location": "Remote",
                    "description": ["Fresh graduates welcome."]
                }
            ]"#,
        )
        .unwrap();
        RecordStore::new(records)
    }

    #[test]
    fn test_all_tables_compute_from_one_store() {
        let config = AnalyticsConfig::default();
        config.validate().unwrap();
        let store = store();

        let skills = ranked_skill_table(store.records(), &config);
        assert_eq!(skills.len(), 4);

        let types = employment_type_counts(store.records());
        assert_eq!(types.len(), 2);

        let shares = experience_share_by_employment(store.records());
        assert!(shares.iter().all(|row| row.employment_type == "Full-time"));

        let profiles = experience_distribution(store.records(), &config);
        assert_eq!(profiles.len(), 2);

        let map = region_posting_table(store.records(), &config);
        assert_eq!(map.len(), 17);
        let placed: u64 = map.iter().map(|row| row.count).sum();
        assert_eq!(placed, 2); // "Remote" is not a mapped region
    }
}
