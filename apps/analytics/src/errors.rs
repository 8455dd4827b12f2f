use thiserror::Error;

/// Configuration-construction error.
///
/// Aggregations never fail — every malformed record is recoverable by
/// exclusion — so the only fallible surface is assembling the constant
/// tables in [`crate::config::AnalyticsConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("skill vocabulary is empty")]
    EmptyVocabulary,

    #[error("region '{0}' appears more than once in the region list")]
    DuplicateRegion(String),

    #[error("synonym alias '{0}' maps to itself")]
    SelfReferentialSynonym(String),
}
