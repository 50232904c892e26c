//! View assembly for calculation results: formatting, narratives, and the
//! dataset-level summary.

pub(crate) mod narrative;
pub(crate) mod summary;
pub mod views;

use super::calculator::aggregate::{round1, Aggregation};
use super::calculator::attribution::RankedContributor;
use super::calculator::counterfactual::{Scenario, SimulationOutcome};
use super::calculator::CalculatorConfig;
use super::domain::{LocationRecord, SeverityLevel};
use views::{
    percent_string, BreakdownEntry, CalculationResult, CounterfactualHighlights,
    CounterfactualScenario, Explainability, TopContributor,
};

/// Fold the aggregation, ranking, and simulation into the result object the
/// dashboard renders. All display rounding and percent formatting happens
/// here, on the way out.
pub(crate) fn build_result(
    location: &LocationRecord,
    aggregation: &Aggregation,
    ranked: &[RankedContributor],
    simulation: &SimulationOutcome,
    config: &CalculatorConfig,
) -> CalculationResult {
    let breakdown = aggregation
        .scores
        .iter()
        .map(|score| {
            (
                score.kind,
                BreakdownEntry {
                    is_active: score.is_active,
                    raw_value: score.raw,
                    adjusted_value: score.adjusted,
                    weight_percentage: percent_string(score.weight * 100.0),
                    contribution: score.contribution,
                },
            )
        })
        .collect();

    let top_contributors: Vec<TopContributor> = ranked
        .iter()
        .map(|entry| TopContributor {
            indicator: entry.kind,
            label: entry.kind.label(),
            adjusted_value: entry.adjusted,
            weight_percentage: percent_string(entry.weight * 100.0),
            share_percentage: percent_string(entry.share),
        })
        .collect();

    let counterfactuals = CounterfactualHighlights {
        priority_action: simulation.priority_action.as_ref().map(scenario_view),
        risk_alert: simulation.risk_alert.as_ref().map(scenario_view),
    };

    let narratives = narrative::generate(
        aggregation,
        &top_contributors,
        &counterfactuals,
        config.max_narrative_contributors,
    );

    let poverty_index = round1(aggregation.index);
    CalculationResult {
        location: location.name.clone(),
        poverty_index,
        severity: SeverityLevel::from_score(poverty_index).into(),
        breakdown,
        active_layers: aggregation.active.clone(),
        confidence_score: aggregation.confidence,
        explainability: Explainability {
            top_contributors,
            narratives,
            counterfactuals,
        },
    }
}

fn scenario_view(scenario: &Scenario) -> CounterfactualScenario {
    CounterfactualScenario {
        indicator: scenario.kind,
        label: scenario.kind.label(),
        delta: scenario.delta,
        target_value: scenario.target_value,
        poverty_index: round1(scenario.index),
        impact: round1(scenario.impact),
    }
}
