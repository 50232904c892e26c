use super::super::calculator::aggregate::Aggregation;
use super::views::{CounterfactualHighlights, TopContributor};

/// Render the numeric artifacts into the short strings the detailed area
/// report displays. Pure templating; degrades to an empty list when there is
/// nothing to describe.
pub(crate) fn generate(
    aggregation: &Aggregation,
    top_contributors: &[TopContributor],
    counterfactuals: &CounterfactualHighlights,
    contributor_limit: usize,
) -> Vec<String> {
    if aggregation.insufficient_data {
        return vec![
            "Insufficient indicator data to score this location; the index defaults to 0."
                .to_string(),
        ];
    }

    let mut narratives = Vec::new();

    if let Some(leader) = top_contributors.first() {
        narratives.push(format!(
            "{} is the largest driver of poverty here, contributing {} of the weighted score.",
            leader.label, leader.share_percentage
        ));
    }

    for contributor in top_contributors
        .iter()
        .skip(1)
        .take(contributor_limit.saturating_sub(1))
    {
        narratives.push(format!(
            "{} adds another {} at {} of the active weight.",
            contributor.label, contributor.share_percentage, contributor.weight_percentage
        ));
    }

    if let Some(action) = &counterfactuals.priority_action {
        if action.impact > 0.0 {
            narratives.push(format!(
                "Improving {} by {:.0} points would lower the poverty index to {:.1}%.",
                action.label,
                action.delta.abs(),
                action.poverty_index
            ));
        }
    }

    if let Some(alert) = &counterfactuals.risk_alert {
        if alert.impact > 0.0 {
            narratives.push(format!(
                "If {} worsens by {:.0} points, the poverty index would climb to {:.1}%.",
                alert.label, alert.delta, alert.poverty_index
            ));
        }
    }

    narratives
}
