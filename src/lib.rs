//! Deterministic scoring engine behind the poverty mapping dashboard.
//!
//! The crate aggregates heterogeneous socio-economic indicators into a single
//! 0-100 poverty index under a dynamically selectable set of active layers,
//! scores confidence from indicator coverage, ranks indicators by
//! attribution, and runs single-indicator counterfactual simulations. The
//! surrounding application (map rendering, charts, report export) consumes
//! the structured results; nothing here performs network I/O or persists
//! state.
//!
//! ```
//! use poverty_index::{IndicatorKind, LocationRecord, PovertyIndexCalculator};
//!
//! let mut calculator = PovertyIndexCalculator::standard();
//! calculator.update_active_layers([
//!     IndicatorKind::EducationAccess,
//!     IndicatorKind::HealthVulnerability,
//! ]);
//!
//! let location = LocationRecord::named("Riverside District")
//!     .with_value(IndicatorKind::EducationAccess, 80.0)
//!     .with_value(IndicatorKind::HealthVulnerability, 40.0);
//!
//! let result = calculator.calculate(&location).expect("location has data");
//! assert_eq!(result.poverty_index, 30.0);
//! ```

pub mod config;
pub mod error;
pub mod poverty;
pub mod telemetry;

pub use error::AppError;
pub use poverty::{
    poverty_level, BreakdownEntry, CalculationError, CalculationResult, CalculatorConfig,
    CounterfactualHighlights, CounterfactualScenario, DatasetImportError, Explainability,
    IndicatorDefinition, IndicatorKind, IndicatorRegistry, LocationDatasetImporter,
    LocationRecord, PovertyDistribution, PovertyIndexCalculator, RegistryError, SeverityLevel,
    SeverityView, SummaryStatistics, TopContributor,
};
