use chrono::Utc;

use super::super::calculator::aggregate::round1;
use super::super::domain::{IndicatorKind, SeverityLevel};
use super::views::{CalculationResult, PovertyDistribution, SummaryStatistics};

/// Fold per-location results into the dataset-level statistics the dashboard
/// header and severity legend consume.
pub(crate) fn summarize(
    results: &[CalculationResult],
    active_layers: &[IndicatorKind],
) -> SummaryStatistics {
    let mut distribution = PovertyDistribution::default();
    let mut sum = 0.0_f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for result in results {
        sum += result.poverty_index;
        min = min.min(result.poverty_index);
        max = max.max(result.poverty_index);
        match SeverityLevel::from_score(result.poverty_index) {
            SeverityLevel::Critical => distribution.critical += 1,
            SeverityLevel::High => distribution.high += 1,
            SeverityLevel::Moderate => distribution.moderate += 1,
            SeverityLevel::Low => distribution.low += 1,
        }
    }

    let total_locations = results.len();
    let (average, min, max) = if total_locations == 0 {
        (0.0, 0.0, 0.0)
    } else {
        (round1(sum / total_locations as f64), min, max)
    };

    SummaryStatistics {
        total_locations,
        average_poverty_index: average,
        min_poverty_index: min,
        max_poverty_index: max,
        poverty_distribution: distribution,
        active_layers: active_layers.to_vec(),
        generated_at: Utc::now(),
    }
}
