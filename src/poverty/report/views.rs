use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{IndicatorKind, SeverityLevel};

/// Render a percentage value as the "NN.N%" string the dashboard displays.
/// Weights and shares are carried as floats everywhere else.
pub(crate) fn percent_string(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Severity bucket plus the legend color the map shades with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityView {
    pub level: &'static str,
    pub color: &'static str,
}

impl From<SeverityLevel> for SeverityView {
    fn from(level: SeverityLevel) -> Self {
        Self {
            level: level.label(),
            color: level.color(),
        }
    }
}

/// Per-indicator slice of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<f64>,
    pub adjusted_value: f64,
    pub weight_percentage: String,
    pub contribution: f64,
}

/// Ranked attribution entry surfaced under `explainability`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopContributor {
    pub indicator: IndicatorKind,
    pub label: &'static str,
    pub adjusted_value: f64,
    pub weight_percentage: String,
    pub share_percentage: String,
}

/// One simulated single-indicator change, already rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterfactualScenario {
    pub indicator: IndicatorKind,
    pub label: &'static str,
    pub delta: f64,
    pub target_value: f64,
    pub poverty_index: f64,
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterfactualHighlights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_action: Option<CounterfactualScenario>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_alert: Option<CounterfactualScenario>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explainability {
    pub top_contributors: Vec<TopContributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub narratives: Vec<String>,
    pub counterfactuals: CounterfactualHighlights,
}

/// Everything the dashboard needs to render one location. Created fresh on
/// every call and never retained by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub poverty_index: f64,
    pub severity: SeverityView,
    pub breakdown: BTreeMap<IndicatorKind, BreakdownEntry>,
    pub active_layers: Vec<IndicatorKind>,
    pub confidence_score: f64,
    pub explainability: Explainability,
}

/// Severity bucket counts across a dataset; thresholds match the map legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PovertyDistribution {
    pub critical: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total_locations: usize,
    pub average_poverty_index: f64,
    pub min_poverty_index: f64,
    pub max_poverty_index: f64,
    pub poverty_distribution: PovertyDistribution,
    pub active_layers: Vec<IndicatorKind>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_strings_carry_one_decimal() {
        assert_eq!(percent_string(50.0), "50.0%");
        assert_eq!(percent_string(33.333), "33.3%");
        assert_eq!(percent_string(0.0), "0.0%");
    }

    #[test]
    fn severity_view_carries_label_and_legend_color() {
        let view = SeverityView::from(SeverityLevel::Critical);
        assert_eq!(view.level, "Critical");
        assert_eq!(view.color, "#d32f2f");
    }
}
