use super::super::domain::IndicatorKind;
use super::aggregate::{probe_index, Aggregation};

/// Impact comparisons tolerate this much floating-point noise before two
/// scenarios count as tied.
const IMPACT_TOLERANCE: f64 = 1e-9;

/// One simulated single-indicator change.
///
/// `delta` is the signed change actually applied on the adjusted scale after
/// clamping to [0,100], and `impact` is oriented so that bigger is always the
/// stronger effect: index reduction for improvements, index increase for
/// degradations. Both are non-negative.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scenario {
    pub(crate) kind: IndicatorKind,
    pub(crate) delta: f64,
    pub(crate) target_value: f64,
    /// Unrounded probe index; rounded at the view boundary.
    pub(crate) index: f64,
    pub(crate) impact: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimulationOutcome {
    /// Improvement with the largest index reduction, if anything is active.
    pub(crate) priority_action: Option<Scenario>,
    /// Degradation with the largest index increase, if anything is active.
    pub(crate) risk_alert: Option<Scenario>,
}

/// Probe every active indicator in both directions against the same frozen
/// aggregation snapshot. 2×N probes for N active indicators; nothing in the
/// real breakdown is mutated while probing.
///
/// Ties resolve toward the higher current contribution, then registry order.
pub(crate) fn simulate(aggregation: &Aggregation, step: f64) -> SimulationOutcome {
    let mut priority: Option<(Scenario, f64)> = None;
    let mut risk: Option<(Scenario, f64)> = None;

    for score in aggregation.scores.iter().filter(|score| score.is_active) {
        let improved = (score.adjusted - step).max(0.0);
        let improved_index = probe_index(aggregation, score.kind, improved);
        consider(
            &mut priority,
            Scenario {
                kind: score.kind,
                delta: improved - score.adjusted,
                target_value: improved,
                index: improved_index,
                impact: aggregation.index - improved_index,
            },
            score.contribution,
        );

        let worsened = (score.adjusted + step).min(100.0);
        let worsened_index = probe_index(aggregation, score.kind, worsened);
        consider(
            &mut risk,
            Scenario {
                kind: score.kind,
                delta: worsened - score.adjusted,
                target_value: worsened,
                index: worsened_index,
                impact: worsened_index - aggregation.index,
            },
            score.contribution,
        );
    }

    SimulationOutcome {
        priority_action: priority.map(|(scenario, _)| scenario),
        risk_alert: risk.map(|(scenario, _)| scenario),
    }
}

fn consider(best: &mut Option<(Scenario, f64)>, candidate: Scenario, contribution: f64) {
    match best {
        None => *best = Some((candidate, contribution)),
        Some((current, current_contribution)) => {
            let wins = candidate.impact > current.impact + IMPACT_TOLERANCE
                || ((candidate.impact - current.impact).abs() <= IMPACT_TOLERANCE
                    && contribution > *current_contribution + IMPACT_TOLERANCE);
            if wins {
                *best = Some((candidate, contribution));
            }
        }
    }
}
