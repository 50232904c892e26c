//! The dynamic poverty index workflow: registry, layer activation, weighted
//! aggregation, attribution, counterfactual simulation, and reporting.

pub mod calculator;
pub mod dataset;
pub mod domain;
mod layers;
pub mod registry;
pub mod report;

#[cfg(test)]
mod tests;

pub use calculator::{CalculationError, CalculatorConfig, PovertyIndexCalculator};
pub use dataset::{DatasetImportError, LocationDatasetImporter};
pub use domain::{IndicatorKind, LocationRecord, SeverityLevel};
pub use registry::{IndicatorDefinition, IndicatorRegistry, RegistryError};
pub use report::views::{
    BreakdownEntry, CalculationResult, CounterfactualHighlights, CounterfactualScenario,
    Explainability, PovertyDistribution, SeverityView, SummaryStatistics, TopContributor,
};

/// Severity classification for a poverty index score, shared with the map
/// legend and the batch distribution buckets.
pub fn poverty_level(score: f64) -> SeverityLevel {
    SeverityLevel::from_score(score)
}
