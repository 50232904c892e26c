use serde::{Deserialize, Serialize};

use super::domain::IndicatorKind;

/// Static description of one indicator: its base weight and orientation.
///
/// `inverted` marks indicators where a higher raw value means *less*
/// deprivation (education or water access), so normalization flips them onto
/// the shared higher-is-worse scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub kind: IndicatorKind,
    pub base_weight: f64,
    pub inverted: bool,
}

impl IndicatorDefinition {
    pub const fn new(kind: IndicatorKind, base_weight: f64, inverted: bool) -> Self {
        Self {
            kind,
            base_weight,
            inverted,
        }
    }
}

/// Raised while building a registry. Misconfiguration is fatal at startup and
/// never a per-calculation condition.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("indicator '{}' registered twice", .0.key())]
    DuplicateIndicator(IndicatorKind),
    #[error("indicator '{key}' requires a positive base weight, got {weight}")]
    NonPositiveWeight { key: &'static str, weight: f64 },
    #[error("registry requires at least one indicator")]
    Empty,
}

/// Immutable, insertion-ordered table of the indicators a calculator scores.
///
/// The first registered indicator is the primary one: empty layer selections
/// fall back to it so the dashboard always has a number to render.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRegistry {
    definitions: Vec<IndicatorDefinition>,
}

impl IndicatorRegistry {
    pub fn new(definitions: Vec<IndicatorDefinition>) -> Result<Self, RegistryError> {
        if definitions.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (position, definition) in definitions.iter().enumerate() {
            if !(definition.base_weight > 0.0) || !definition.base_weight.is_finite() {
                return Err(RegistryError::NonPositiveWeight {
                    key: definition.kind.key(),
                    weight: definition.base_weight,
                });
            }
            if definitions[..position]
                .iter()
                .any(|earlier| earlier.kind == definition.kind)
            {
                return Err(RegistryError::DuplicateIndicator(definition.kind));
            }
        }

        Ok(Self { definitions })
    }

    /// The indicator table shipped with the dashboard.
    pub fn standard() -> Self {
        Self {
            definitions: vec![
                IndicatorDefinition::new(IndicatorKind::PovertyIncidence, 1.5, false),
                IndicatorDefinition::new(IndicatorKind::EducationAccess, 1.0, true),
                IndicatorDefinition::new(IndicatorKind::HealthVulnerability, 1.0, false),
                IndicatorDefinition::new(IndicatorKind::WaterAccess, 1.0, true),
                IndicatorDefinition::new(IndicatorKind::EmploymentRate, 0.5, true),
            ],
        }
    }

    pub fn get(&self, kind: IndicatorKind) -> Option<&IndicatorDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.kind == kind)
    }

    pub fn contains(&self, kind: IndicatorKind) -> bool {
        self.get(kind).is_some()
    }

    /// Definitions in insertion order, the deterministic iteration order for
    /// breakdowns and tie-breaking.
    pub fn definitions(&self) -> &[IndicatorDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The fallback indicator substituted for empty layer selections.
    pub fn primary(&self) -> IndicatorKind {
        // Registries are validated non-empty at construction.
        self.definitions[0].kind
    }
}
