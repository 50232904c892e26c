use crate::poverty::domain::{IndicatorKind, LocationRecord};
use crate::poverty::{CalculatorConfig, PovertyIndexCalculator};

pub(super) fn standard_calculator() -> PovertyIndexCalculator {
    PovertyIndexCalculator::standard()
}

pub(super) fn calculator_with_step(step: f64) -> PovertyIndexCalculator {
    PovertyIndexCalculator::new(
        crate::poverty::IndicatorRegistry::standard(),
        CalculatorConfig {
            counterfactual_step: step,
            ..CalculatorConfig::default()
        },
    )
}

pub(super) fn location(values: &[(IndicatorKind, f64)]) -> LocationRecord {
    values.iter().copied().collect()
}

/// The worked dashboard example: education at 80 (inverted to 20) and health
/// at 40 under equal base weights.
pub(super) fn example_location() -> LocationRecord {
    LocationRecord::named("Example Area")
        .with_value(IndicatorKind::EducationAccess, 80.0)
        .with_value(IndicatorKind::HealthVulnerability, 40.0)
        .with_value(IndicatorKind::WaterAccess, 60.0)
}

pub(super) fn full_coverage_location() -> LocationRecord {
    LocationRecord::named("Fully Surveyed")
        .with_value(IndicatorKind::PovertyIncidence, 58.0)
        .with_value(IndicatorKind::EducationAccess, 47.0)
        .with_value(IndicatorKind::HealthVulnerability, 63.0)
        .with_value(IndicatorKind::WaterAccess, 52.0)
        .with_value(IndicatorKind::EmploymentRate, 41.0)
}
