use std::cmp::Ordering;

use super::super::domain::IndicatorKind;
use super::aggregate::Aggregation;

/// One active indicator ranked by its weighted impact on the index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankedContributor {
    pub(crate) kind: IndicatorKind,
    pub(crate) adjusted: f64,
    pub(crate) weight: f64,
    pub(crate) contribution: f64,
    /// Percentage share of the total weighted impact; 0 when the index is 0.
    pub(crate) share: f64,
}

/// Active indicators sorted by contribution, largest first. The sort is
/// stable, so ties keep registry order and the ranking stays deterministic.
pub(crate) fn rank(aggregation: &Aggregation) -> Vec<RankedContributor> {
    let mut ranked: Vec<RankedContributor> = aggregation
        .scores
        .iter()
        .filter(|score| score.is_active)
        .map(|score| RankedContributor {
            kind: score.kind,
            adjusted: score.adjusted,
            weight: score.weight,
            contribution: score.contribution,
            share: if aggregation.index > 0.0 {
                score.contribution / aggregation.index * 100.0
            } else {
                0.0
            },
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
