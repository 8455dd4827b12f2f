//! Region fill-join and log-scale preparation for the posting map.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dense_counts;
use crate::config::AnalyticsConfig;
use crate::models::JobPosting;

/// A fixed colorbar tick: the log-transformed position and the label showing
/// the un-transformed count at that position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogTick {
    pub value: f64,
    pub label: &'static str,
}

/// Colorbar ticks for the log-scale map. A fixed lookup rather than a
/// data-derived range, so the scale reads the same across datasets. The
/// -1 position is where a zero count lands after the 0.1 offset.
pub const LOG_TICKS: [LogTick; 5] = [
    LogTick { value: -1.0, label: "0" },
    LogTick { value: 0.0, label: "1" },
    LogTick { value: 1.0, label: "10" },
    LogTick { value: 2.0, label: "100" },
    LogTick { value: 3.0, label: "1000" },
];

/// One row of the dense region table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPostings {
    pub region: String,
    /// Exact posting count. The log-transform offset is already subtracted
    /// back out, so this is what a hover label shows.
    pub count: u64,
    /// log10(count + offset) — what the choropleth color scale encodes.
    pub log_value: f64,
}

/// Posting counts joined onto the full region list.
///
/// Exactly one row per configured region, in list order; regions with no
/// postings appear with count 0. Locations outside the list are dropped
/// without being merged or reported.
pub fn region_posting_table(
    records: &[JobPosting],
    config: &AnalyticsConfig,
) -> Vec<RegionPostings> {
    let rows = dense_counts(
        &config.regions,
        records.iter().map(|posting| posting.location.as_str()),
    );

    let placed: u64 = rows.iter().map(|(_, count)| count).sum();
    let dropped = records.len() as u64 - placed;
    if dropped > 0 {
        debug!(dropped, "postings outside the region list left off the map");
    }

    rows.into_iter()
        .map(|(region, count)| {
            let shifted = count as f64 + config.geo_log_offset;
            RegionPostings {
                region: region.to_string(),
                count,
                log_value: shifted.log10(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(location: &str) -> JobPosting {
        JobPosting {
            title: Some("Data Analyst".to_string()),
            seniority: None,
            experience_years: None,
            employment_type: "Full-time".to_string(),
            location: location.to_string(),
            description: vec![],
        }
    }

    #[test]
    fn test_always_exactly_seventeen_rows_in_list_order() {
        let config = AnalyticsConfig::default();
        let table = region_posting_table(&[posting("Johor")], &config);
        assert_eq!(table.len(), 17);
        let regions: Vec<&str> = table.iter().map(|row| row.region.as_str()).collect();
        let expected: Vec<&str> = config.regions.iter().map(String::as_str).collect();
        assert_eq!(regions, expected);

        // Even an empty store paints the whole map.
        assert_eq!(region_posting_table(&[], &config).len(), 17);
    }

    #[test]
    fn test_zero_count_region_log_value_and_recovery() {
        let config = AnalyticsConfig::default();
        let table = region_posting_table(&[], &config);
        for row in &table {
            assert_eq!(row.count, 0);
            assert_eq!(row.log_value, (0.0_f64 + config.geo_log_offset).log10());
            // Subtracting the offset from the shifted value recovers exactly 0.
            let shifted = row.count as f64 + config.geo_log_offset;
            assert_eq!(shifted - config.geo_log_offset, 0.0);
        }
    }

    #[test]
    fn test_present_regions_carry_their_posting_counts() {
        let config = AnalyticsConfig::default();
        let records = vec![
            posting("Kuala Lumpur"),
            posting("Kuala Lumpur"),
            posting("Singapore"),
        ];
        let table = region_posting_table(&records, &config);
        let kl = table.iter().find(|row| row.region == "Kuala Lumpur").unwrap();
        assert_eq!(kl.count, 2);
        assert!((kl.log_value - (2.1_f64).log10()).abs() < 1e-12);
        let sg = table.iter().find(|row| row.region == "Singapore").unwrap();
        assert_eq!(sg.count, 1);
    }

    #[test]
    fn test_locations_outside_the_list_are_dropped_silently() {
        let config = AnalyticsConfig::default();
        let records = vec![posting("Johor"), posting("Bangkok"), posting("Remote")];
        let table = region_posting_table(&records, &config);
        let total: u64 = table.iter().map(|row| row.count).sum();
        assert_eq!(total, 1);
        assert!(table.iter().all(|row| row.region != "Bangkok"));
    }

    #[test]
    fn test_tick_lookup_is_fixed() {
        let values: Vec<f64> = LOG_TICKS.iter().map(|tick| tick.value).collect();
        let labels: Vec<&str> = LOG_TICKS.iter().map(|tick| tick.label).collect();
        assert_eq!(values, vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(labels, vec!["0", "1", "10", "100", "1000"]);
    }

    #[test]
    fn test_rerun_is_bit_identical() {
        let config = AnalyticsConfig::default();
        let records = vec![posting("Penang"), posting("Sabah"), posting("Penang")];
        assert_eq!(
            region_posting_table(&records, &config),
            region_posting_table(&records, &config)
        );
    }
}
