use std::collections::BTreeSet;

use tracing::warn;

use super::domain::IndicatorKind;
use super::registry::IndicatorRegistry;

/// Ordered set of the indicators currently included in aggregation.
///
/// Owned by the calculator and mutated only through [`set_active`]; the
/// scoring path never touches it. Kept in registry order so every downstream
/// iteration stays deterministic.
///
/// [`set_active`]: ActiveLayerSet::set_active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLayerSet {
    active: Vec<IndicatorKind>,
}

impl ActiveLayerSet {
    /// Start with every registered indicator switched on, matching the
    /// dashboard's initial checkbox state.
    pub fn all_of(registry: &IndicatorRegistry) -> Self {
        Self {
            active: registry
                .definitions()
                .iter()
                .map(|definition| definition.kind)
                .collect(),
        }
    }

    /// Replace the selection wholesale. Indicators missing from the registry
    /// are dropped with a warning, and an empty selection falls back to the
    /// registry's primary indicator so aggregation never divides by zero.
    pub fn set_active<I>(&mut self, registry: &IndicatorRegistry, kinds: I)
    where
        I: IntoIterator<Item = IndicatorKind>,
    {
        let requested: BTreeSet<IndicatorKind> = kinds.into_iter().collect();

        for kind in &requested {
            if !registry.contains(*kind) {
                warn!(indicator = kind.key(), "ignoring unregistered indicator in layer update");
            }
        }

        let mut next: Vec<IndicatorKind> = registry
            .definitions()
            .iter()
            .map(|definition| definition.kind)
            .filter(|kind| requested.contains(kind))
            .collect();

        if next.is_empty() {
            let primary = registry.primary();
            warn!(
                indicator = primary.key(),
                "empty layer selection, falling back to the primary indicator"
            );
            next.push(primary);
        }

        self.active = next;
    }

    pub fn is_active(&self, kind: IndicatorKind) -> bool {
        self.active.contains(&kind)
    }

    pub fn kinds(&self) -> &[IndicatorKind] {
        &self.active
    }

    /// Owned copy taken at the start of a batch so every location in that
    /// batch is scored under the same configuration.
    pub fn snapshot(&self) -> Vec<IndicatorKind> {
        self.active.clone()
    }
}
