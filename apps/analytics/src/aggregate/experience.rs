//! Seniority-level experience profiles for the ridgeline view.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::models::{JobPosting, SeniorityLevel};

/// Experience profile for one seniority level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    pub seniority: SeniorityLevel,
    /// Numeric experience values, in record order.
    pub samples: Vec<u32>,
    pub mean: f64,
    /// Sample variance (n − 1 denominator). `None` for a single sample.
    pub variance: Option<f64>,
    /// Ridgeline band width: sqrt(variance) when the variance is at least
    /// the configured floor, otherwise the floor itself. The comparison is
    /// on the variance, so widths between √floor and floor do occur.
    pub band_width: f64,
}

/// Per-seniority experience profiles, in the fixed seniority order.
///
/// Only records stating both a seniority level and a numeric experience
/// value contribute; levels with no qualifying record are omitted entirely
/// rather than zero-filled.
pub fn experience_distribution(
    records: &[JobPosting],
    config: &AnalyticsConfig,
) -> Vec<ExperienceProfile> {
    let mut profiles = Vec::new();
    let mut excluded = 0u64;

    for seniority in SeniorityLevel::ORDERED {
        let samples: Vec<u32> = records
            .iter()
            .filter(|posting| posting.seniority == Some(seniority))
            .filter_map(|posting| posting.experience_years)
            .collect();
        if samples.is_empty() {
            continue;
        }

        let mean = sample_mean(&samples);
        let variance = sample_variance(&samples, mean);
        let band_width = match variance {
            Some(v) if v >= config.min_band_width => v.sqrt(),
            _ => config.min_band_width,
        };

        profiles.push(ExperienceProfile {
            seniority,
            samples,
            mean,
            variance,
            band_width,
        });
    }

    for posting in records {
        if posting.seniority.is_none() || posting.experience_years.is_none() {
            excluded += 1;
        }
    }
    if excluded > 0 {
        debug!(
            excluded,
            "records without seniority or numeric experience left out of the distribution"
        );
    }

    profiles
}

fn sample_mean(samples: &[u32]) -> f64 {
    samples.iter().map(|&value| value as f64).sum::<f64>() / samples.len() as f64
}

/// Sample variance with an n − 1 denominator; undefined for fewer than two
/// samples.
fn sample_variance(samples: &[u32], mean: f64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let sum_sq: f64 = samples
        .iter()
        .map(|&value| (value as f64 - mean).powi(2))
        .sum();
    Some(sum_sq / (samples.len() - 1) as f64)
}
