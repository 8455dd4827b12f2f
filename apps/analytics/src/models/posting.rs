use serde::{Deserialize, Serialize};

/// Seniority level as labeled by the job board. Closed set — the scraper
/// normalizes everything else to `NotApplicable` before records reach us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Internship,
    #[serde(rename = "Entry level")]
    EntryLevel,
    Associate,
    #[serde(rename = "Mid-Senior level")]
    MidSenior,
    Executive,
    Director,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl SeniorityLevel {
    /// Presentation order for the experience ridgeline: junior to senior,
    /// catch-all last.
    pub const ORDERED: [SeniorityLevel; 7] = [
        SeniorityLevel::Internship,
        SeniorityLevel::EntryLevel,
        SeniorityLevel::Associate,
        SeniorityLevel::MidSenior,
        SeniorityLevel::Executive,
        SeniorityLevel::Director,
        SeniorityLevel::NotApplicable,
    ];

    /// The label the job board uses for this level.
    pub fn label(self) -> &'static str {
        match self {
            SeniorityLevel::Internship => "Internship",
            SeniorityLevel::EntryLevel => "Entry level",
            SeniorityLevel::Associate => "Associate",
            SeniorityLevel::MidSenior => "Mid-Senior level",
            SeniorityLevel::Executive => "Executive",
            SeniorityLevel::Director => "Director",
            SeniorityLevel::NotApplicable => "Not Applicable",
        }
    }
}

/// One scraped job posting. Loaded once by the (external) dataset loader and
/// read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: Option<String>,
    pub seniority: Option<SeniorityLevel>,
    /// `None` means no numeric experience value was extractable from the
    /// source text — distinct from zero years.
    pub experience_years: Option<u32>,
    pub employment_type: String,
    /// Region name. Values outside the configured region list are dropped by
    /// the geo aggregation, nowhere else.
    pub location: String,
    /// Ordered paragraph/sentence fragments; joined with a single space
    /// before skill matching.
    pub description: Vec<String>,
}
