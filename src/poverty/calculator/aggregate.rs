use super::super::domain::{IndicatorKind, LocationRecord};
use super::super::registry::IndicatorRegistry;
use super::normalize::normalize;

/// Round to the single decimal the dashboard displays.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Per-indicator scoring row. Weights stay fractional here; formatting into
/// "NN.N%" strings happens at the view boundary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IndicatorScore {
    pub(crate) kind: IndicatorKind,
    pub(crate) is_active: bool,
    pub(crate) raw: Option<f64>,
    pub(crate) adjusted: f64,
    /// Base weight renormalized over the effective active subset; 0 for
    /// inactive rows.
    pub(crate) weight: f64,
    pub(crate) contribution: f64,
}

/// Full aggregation output for one location under one layer snapshot.
///
/// `index` carries the unrounded value so counterfactual probes do not
/// accumulate display rounding.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Aggregation {
    pub(crate) scores: Vec<IndicatorScore>,
    pub(crate) index: f64,
    pub(crate) confidence: f64,
    pub(crate) active: Vec<IndicatorKind>,
    pub(crate) insufficient_data: bool,
}

/// Weighted aggregation over the effectively active indicators.
///
/// Effective activity means nominally selected AND carrying usable data. When
/// the whole selection lacks data the primary indicator substitutes; when even
/// that is missing the location scores 0 with zero confidence and the
/// insufficient-data flag set, never an error.
pub(crate) fn aggregate(
    registry: &IndicatorRegistry,
    layers: &[IndicatorKind],
    location: &LocationRecord,
) -> Aggregation {
    let readings: Vec<_> = registry
        .definitions()
        .iter()
        .map(|definition| (definition, normalize(definition, location.get(definition.kind))))
        .collect();

    let mut active: Vec<IndicatorKind> = readings
        .iter()
        .filter(|(definition, reading)| layers.contains(&definition.kind) && reading.usable)
        .map(|(definition, _)| definition.kind)
        .collect();

    let mut insufficient_data = false;
    if active.is_empty() {
        let primary = registry.primary();
        let primary_usable = readings
            .iter()
            .any(|(definition, reading)| definition.kind == primary && reading.usable);
        if primary_usable {
            active.push(primary);
        } else {
            insufficient_data = true;
        }
    }

    let total_weight: f64 = readings
        .iter()
        .filter(|(definition, _)| active.contains(&definition.kind))
        .map(|(definition, _)| definition.base_weight)
        .sum();

    let scores: Vec<IndicatorScore> = readings
        .iter()
        .map(|(definition, reading)| {
            let is_active = active.contains(&definition.kind);
            let weight = if is_active {
                definition.base_weight / total_weight
            } else {
                0.0
            };
            IndicatorScore {
                kind: definition.kind,
                is_active,
                raw: reading.raw,
                adjusted: reading.adjusted,
                weight,
                contribution: reading.adjusted * weight,
            }
        })
        .collect();

    let index = if insufficient_data {
        0.0
    } else {
        scores
            .iter()
            .map(|score| score.contribution)
            .sum::<f64>()
            .clamp(0.0, 100.0)
    };

    let confidence = if insufficient_data {
        0.0
    } else {
        confidence(active.len(), registry.len())
    };

    Aggregation {
        scores,
        index,
        confidence,
        active,
        insufficient_data,
    }
}

/// Coverage ratio expressed as a percentage with one decimal.
pub(crate) fn confidence(active_count: usize, total_count: usize) -> f64 {
    if total_count == 0 {
        // Unreachable with a validated registry; scored as no coverage.
        return 0.0;
    }
    round1(active_count as f64 / total_count as f64 * 100.0)
}

/// Recompute the index with a single adjusted value overridden, leaving the
/// aggregation itself untouched. Counterfactual probes lean on this so every
/// probe sees the same snapshot.
pub(crate) fn probe_index(aggregation: &Aggregation, target: IndicatorKind, adjusted: f64) -> f64 {
    aggregation
        .scores
        .iter()
        .filter(|score| score.is_active)
        .map(|score| {
            if score.kind == target {
                adjusted * score.weight
            } else {
                score.contribution
            }
        })
        .sum::<f64>()
        .clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poverty::domain::IndicatorKind;

    fn record(values: &[(IndicatorKind, f64)]) -> LocationRecord {
        values.iter().copied().collect()
    }

    #[test]
    fn renormalized_weights_sum_to_one_over_the_active_subset() {
        let registry = IndicatorRegistry::standard();
        let location = record(&[
            (IndicatorKind::PovertyIncidence, 55.0),
            (IndicatorKind::EducationAccess, 70.0),
            (IndicatorKind::WaterAccess, 30.0),
        ]);
        let layers = [
            IndicatorKind::PovertyIncidence,
            IndicatorKind::EducationAccess,
            IndicatorKind::WaterAccess,
        ];

        let aggregation = aggregate(&registry, &layers, &location);

        let weight_sum: f64 = aggregation
            .scores
            .iter()
            .filter(|score| score.is_active)
            .map(|score| score.weight)
            .sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn contributions_sum_to_the_index() {
        let registry = IndicatorRegistry::standard();
        let location = record(&[
            (IndicatorKind::PovertyIncidence, 62.0),
            (IndicatorKind::HealthVulnerability, 48.0),
            (IndicatorKind::EmploymentRate, 35.0),
        ]);
        let layers: Vec<_> = IndicatorKind::ALL.to_vec();

        let aggregation = aggregate(&registry, &layers, &location);

        let contribution_sum: f64 = aggregation
            .scores
            .iter()
            .filter(|score| score.is_active)
            .map(|score| score.contribution)
            .sum();
        assert!((contribution_sum - aggregation.index).abs() < 1e-6);
    }

    #[test]
    fn nominally_active_indicators_without_data_drop_out_for_the_call() {
        let registry = IndicatorRegistry::standard();
        let location = record(&[(IndicatorKind::HealthVulnerability, 40.0)]);
        let layers = [
            IndicatorKind::EducationAccess,
            IndicatorKind::HealthVulnerability,
        ];

        let aggregation = aggregate(&registry, &layers, &location);

        assert_eq!(aggregation.active, [IndicatorKind::HealthVulnerability]);
        let education = aggregation
            .scores
            .iter()
            .find(|score| score.kind == IndicatorKind::EducationAccess)
            .expect("education row present");
        assert!(!education.is_active);
        assert_eq!(education.adjusted, 0.0);
        assert_eq!(education.contribution, 0.0);
        assert_eq!(aggregation.index, 40.0);
    }

    #[test]
    fn missing_selection_data_falls_back_to_the_primary_indicator() {
        let registry = IndicatorRegistry::standard();
        let location = record(&[(IndicatorKind::PovertyIncidence, 66.0)]);
        let layers = [IndicatorKind::EducationAccess, IndicatorKind::WaterAccess];

        let aggregation = aggregate(&registry, &layers, &location);

        assert_eq!(aggregation.active, [IndicatorKind::PovertyIncidence]);
        assert!(!aggregation.insufficient_data);
        assert_eq!(aggregation.index, 66.0);
    }

    #[test]
    fn unusable_primary_fallback_scores_zero_with_the_flag_set() {
        let registry = IndicatorRegistry::standard();
        let location = record(&[(IndicatorKind::EmploymentRate, f64::NAN)]);
        let layers = [IndicatorKind::EmploymentRate];

        let aggregation = aggregate(&registry, &layers, &location);

        assert!(aggregation.insufficient_data);
        assert!(aggregation.active.is_empty());
        assert_eq!(aggregation.index, 0.0);
        assert_eq!(aggregation.confidence, 0.0);
    }

    #[test]
    fn confidence_reflects_coverage_with_one_decimal() {
        assert_eq!(confidence(2, 5), 40.0);
        assert_eq!(confidence(5, 5), 100.0);
        assert_eq!(confidence(1, 3), 33.3);
        assert_eq!(confidence(0, 0), 0.0);
    }

    #[test]
    fn probe_index_leaves_the_aggregation_unchanged() {
        let registry = IndicatorRegistry::standard();
        let location = record(&[
            (IndicatorKind::PovertyIncidence, 50.0),
            (IndicatorKind::HealthVulnerability, 80.0),
        ]);
        let layers = [
            IndicatorKind::PovertyIncidence,
            IndicatorKind::HealthVulnerability,
        ];

        let aggregation = aggregate(&registry, &layers, &location);
        let before = aggregation.clone();
        let probed = probe_index(&aggregation, IndicatorKind::HealthVulnerability, 60.0);

        assert!(probed < aggregation.index);
        assert_eq!(aggregation, before);
    }
}
