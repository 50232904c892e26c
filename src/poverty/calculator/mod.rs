pub(crate) mod aggregate;
pub(crate) mod attribution;
pub(crate) mod counterfactual;
pub(crate) mod normalize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{IndicatorKind, LocationRecord};
use super::layers::ActiveLayerSet;
use super::registry::IndicatorRegistry;
use super::report;
use super::report::views::{CalculationResult, SummaryStatistics};

/// Tunables for the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Adjusted-scale points applied by each counterfactual probe.
    pub counterfactual_step: f64,
    /// How many ranked contributors the narrative generator describes.
    pub max_narrative_contributors: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            counterfactual_step: 20.0,
            max_narrative_contributors: 3,
        }
    }
}

/// Raised by the single-location entry point for records that carry nothing
/// to compute. Missing individual indicators and empty layer selections are
/// absorbed instead, because the dashboard renders results unconditionally.
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("location record carries no recognized indicator values")]
    NoUsableData,
}

/// The dynamic poverty index engine.
///
/// Owns the registry, the active-layer selection, and the tunables; every
/// calculation returns a fresh [`CalculationResult`] and the engine keeps no
/// reference to it. Construct one calculator per dashboard session rather
/// than sharing a global.
pub struct PovertyIndexCalculator {
    registry: IndicatorRegistry,
    layers: ActiveLayerSet,
    config: CalculatorConfig,
}

impl PovertyIndexCalculator {
    /// Calculator over the standard dashboard registry with default tunables.
    pub fn standard() -> Self {
        Self::new(IndicatorRegistry::standard(), CalculatorConfig::default())
    }

    pub fn new(registry: IndicatorRegistry, config: CalculatorConfig) -> Self {
        let layers = ActiveLayerSet::all_of(&registry);
        Self {
            registry,
            layers,
            config,
        }
    }

    pub fn registry(&self) -> &IndicatorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn active_layers(&self) -> &[IndicatorKind] {
        self.layers.kinds()
    }

    /// Whether an indicator is part of the persisted selection. Data gaps do
    /// not show up here; they only exclude an indicator per calculation.
    pub fn is_layer_active(&self, kind: IndicatorKind) -> bool {
        self.layers.is_active(kind)
    }

    /// Replace the active-layer selection wholesale, e.g. from the map's
    /// layer checkboxes. Unknown indicators are ignored; an empty selection
    /// falls back to the primary indicator.
    pub fn update_active_layers<I>(&mut self, kinds: I)
    where
        I: IntoIterator<Item = IndicatorKind>,
    {
        self.layers.set_active(&self.registry, kinds);
        debug!(layers = ?self.layers.kinds(), "active layers updated");
    }

    /// Score one location under the current layer selection.
    pub fn calculate(
        &self,
        location: &LocationRecord,
    ) -> Result<CalculationResult, CalculationError> {
        if location.is_empty() {
            return Err(CalculationError::NoUsableData);
        }
        Ok(self.score(location, self.layers.kinds()))
    }

    /// Score every location independently under a snapshot of the active
    /// layers taken up front, so one batch sees one configuration. Records
    /// without any usable data degrade to the insufficient-data result here
    /// instead of erroring, keeping one result per location.
    pub fn recalculate_all(&self, locations: &[LocationRecord]) -> Vec<CalculationResult> {
        let snapshot = self.layers.snapshot();
        debug!(locations = locations.len(), "recalculating dataset");
        locations
            .iter()
            .map(|location| self.score(location, &snapshot))
            .collect()
    }

    /// Aggregate severity buckets and distribution statistics for a dataset.
    pub fn summary_statistics(&self, locations: &[LocationRecord]) -> SummaryStatistics {
        let results = self.recalculate_all(locations);
        report::summary::summarize(&results, self.layers.kinds())
    }

    fn score(&self, location: &LocationRecord, layers: &[IndicatorKind]) -> CalculationResult {
        let aggregation = aggregate::aggregate(&self.registry, layers, location);
        let ranked = attribution::rank(&aggregation);
        let simulation = counterfactual::simulate(&aggregation, self.config.counterfactual_step);
        report::build_result(location, &aggregation, &ranked, &simulation, &self.config)
    }
}
