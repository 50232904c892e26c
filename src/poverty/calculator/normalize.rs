use super::super::registry::IndicatorDefinition;

/// One raw reading mapped onto the shared deprivation scale.
///
/// `usable` is false when the reading is absent or non-finite; such
/// indicators drop out of the active set for the current calculation only,
/// without touching the caller's persisted layer selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NormalizedReading {
    pub(crate) raw: Option<f64>,
    pub(crate) adjusted: f64,
    pub(crate) usable: bool,
}

/// Clamp to [0,100] and flip inverted indicators so that every adjusted value
/// reads "higher = more deprived".
pub(crate) fn normalize(definition: &IndicatorDefinition, raw: Option<f64>) -> NormalizedReading {
    match raw {
        Some(value) if value.is_finite() => {
            let clamped = value.clamp(0.0, 100.0);
            let adjusted = if definition.inverted {
                100.0 - clamped
            } else {
                clamped
            };
            NormalizedReading {
                raw: Some(value),
                adjusted,
                usable: true,
            }
        }
        _ => NormalizedReading {
            raw: None,
            adjusted: 0.0,
            usable: false,
        },
    }
}
