use super::common::*;
use crate::poverty::domain::{IndicatorKind, LocationRecord};

fn dataset() -> Vec<LocationRecord> {
    vec![
        location(&[(IndicatorKind::PovertyIncidence, 85.0)]),
        location(&[(IndicatorKind::PovertyIncidence, 55.0)]),
        location(&[(IndicatorKind::PovertyIncidence, 35.0)]),
        location(&[(IndicatorKind::PovertyIncidence, 10.0)]),
    ]
}

#[test]
fn batch_results_keep_one_entry_per_location() {
    let mut calculator = standard_calculator();
    calculator.update_active_layers([IndicatorKind::PovertyIncidence]);

    let results = calculator.recalculate_all(&dataset());

    assert_eq!(results.len(), 4);
    let indices: Vec<_> = results.iter().map(|result| result.poverty_index).collect();
    assert_eq!(indices, [85.0, 55.0, 35.0, 10.0]);
}

#[test]
fn summary_folds_distribution_and_extremes() {
    let mut calculator = standard_calculator();
    calculator.update_active_layers([IndicatorKind::PovertyIncidence]);

    let summary = calculator.summary_statistics(&dataset());

    assert_eq!(summary.total_locations, 4);
    assert_eq!(summary.average_poverty_index, 46.3);
    assert_eq!(summary.min_poverty_index, 10.0);
    assert_eq!(summary.max_poverty_index, 85.0);
    assert_eq!(summary.poverty_distribution.critical, 1);
    assert_eq!(summary.poverty_distribution.high, 1);
    assert_eq!(summary.poverty_distribution.moderate, 1);
    assert_eq!(summary.poverty_distribution.low, 1);
    assert_eq!(summary.active_layers, [IndicatorKind::PovertyIncidence]);
}

#[test]
fn empty_datasets_summarize_to_zeroes() {
    let calculator = standard_calculator();

    let summary = calculator.summary_statistics(&[]);

    assert_eq!(summary.total_locations, 0);
    assert_eq!(summary.average_poverty_index, 0.0);
    assert_eq!(summary.min_poverty_index, 0.0);
    assert_eq!(summary.max_poverty_index, 0.0);
    assert_eq!(summary.poverty_distribution.critical, 0);
    assert_eq!(summary.poverty_distribution.low, 0);
}

#[test]
fn unusable_records_degrade_inside_a_batch_instead_of_failing() {
    let mut calculator = standard_calculator();
    calculator.update_active_layers([IndicatorKind::PovertyIncidence]);

    let mut locations = dataset();
    locations.push(LocationRecord::named("Unsurveyed"));

    let results = calculator.recalculate_all(&locations);

    assert_eq!(results.len(), 5);
    let degraded = &results[4];
    assert_eq!(degraded.poverty_index, 0.0);
    assert_eq!(degraded.confidence_score, 0.0);
    assert!(degraded.explainability.narratives[0].contains("Insufficient indicator data"));
}

#[test]
fn every_location_in_a_batch_is_scored_under_the_same_layers() {
    let mut calculator = standard_calculator();
    calculator.update_active_layers([
        IndicatorKind::EducationAccess,
        IndicatorKind::WaterAccess,
    ]);

    let locations = vec![full_coverage_location(), example_location()];
    let results = calculator.recalculate_all(&locations);

    for result in &results {
        assert!(result
            .active_layers
            .iter()
            .all(|kind| matches!(
                kind,
                IndicatorKind::EducationAccess | IndicatorKind::WaterAccess
            )));
    }
}
