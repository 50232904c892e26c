use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Socio-economic indicators known to the scoring engine.
///
/// Variants are declared in registry order; the first one is the primary
/// poverty indicator used as the fallback when a layer selection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    #[serde(rename = "poverty_index")]
    PovertyIncidence,
    #[serde(rename = "education_access")]
    EducationAccess,
    #[serde(rename = "health_vulnerability")]
    HealthVulnerability,
    #[serde(rename = "water_access")]
    WaterAccess,
    #[serde(rename = "employment_rate")]
    EmploymentRate,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::PovertyIncidence,
        IndicatorKind::EducationAccess,
        IndicatorKind::HealthVulnerability,
        IndicatorKind::WaterAccess,
        IndicatorKind::EmploymentRate,
    ];

    /// Canonical key used by dashboard payloads and dataset columns.
    pub const fn key(self) -> &'static str {
        match self {
            IndicatorKind::PovertyIncidence => "poverty_index",
            IndicatorKind::EducationAccess => "education_access",
            IndicatorKind::HealthVulnerability => "health_vulnerability",
            IndicatorKind::WaterAccess => "water_access",
            IndicatorKind::EmploymentRate => "employment_rate",
        }
    }

    /// Display name rendered by the dashboard legend and narratives.
    pub const fn label(self) -> &'static str {
        match self {
            IndicatorKind::PovertyIncidence => "Poverty Incidence",
            IndicatorKind::EducationAccess => "Education Access",
            IndicatorKind::HealthVulnerability => "Health Vulnerability",
            IndicatorKind::WaterAccess => "Water & Sanitation Access",
            IndicatorKind::EmploymentRate => "Employment Rate",
        }
    }

    /// Resolve a canonical key or one of the well-known aliases used by older
    /// dataset exports. Unknown keys resolve to `None` and are skipped by
    /// callers rather than rejected.
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "poverty_index" | "poverty" | "poverty_rate" | "poverty_incidence" => {
                Some(IndicatorKind::PovertyIncidence)
            }
            "education_access" | "education" | "school_access" => {
                Some(IndicatorKind::EducationAccess)
            }
            "health_vulnerability" | "health" => Some(IndicatorKind::HealthVulnerability),
            "water_access" | "water" | "water_sanitation" => Some(IndicatorKind::WaterAccess),
            "employment_rate" | "employment" => Some(IndicatorKind::EmploymentRate),
            _ => None,
        }
    }
}

/// Severity bucket shared with the dashboard map legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Critical,
    High,
    Moderate,
    Low,
}

impl SeverityLevel {
    /// Thresholds must stay aligned with the map legend: critical >= 70,
    /// high >= 50, moderate >= 30, low below.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            SeverityLevel::Critical
        } else if score >= 50.0 {
            SeverityLevel::High
        } else if score >= 30.0 {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SeverityLevel::Critical => "Critical",
            SeverityLevel::High => "High",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Low => "Low",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            SeverityLevel::Critical => "#d32f2f",
            SeverityLevel::High => "#f57c00",
            SeverityLevel::Moderate => "#fbc02d",
            SeverityLevel::Low => "#388e3c",
        }
    }
}

/// Raw indicator readings for one mapped location.
///
/// Supplied by the caller and read-only to the engine; calculations return
/// fresh result objects instead of annotating this record. Values outside
/// [0,100] are clamped during normalization, and non-finite values count as
/// missing data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationRecord {
    pub name: Option<String>,
    values: BTreeMap<IndicatorKind, f64>,
}

impl LocationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert used by tests and the demo dataset.
    pub fn with_value(mut self, kind: IndicatorKind, value: f64) -> Self {
        self.values.insert(kind, value);
        self
    }

    pub fn set(&mut self, kind: IndicatorKind, value: f64) {
        self.values.insert(kind, value);
    }

    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        self.values.get(&kind).copied()
    }

    /// True when the record carries no recognized indicator values at all,
    /// the one malformed-input condition surfaced as an error.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &BTreeMap<IndicatorKind, f64> {
        &self.values
    }
}

impl FromIterator<(IndicatorKind, f64)> for LocationRecord {
    fn from_iter<I: IntoIterator<Item = (IndicatorKind, f64)>>(iter: I) -> Self {
        Self {
            name: None,
            values: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for LocationRecord {
    /// Accepts the flat JSON objects the dashboard ships: indicator keys (or
    /// aliases) mapped to numbers, plus an optional `name`. Unknown keys and
    /// non-numeric values are skipped, never rejected.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut record = LocationRecord::new();

        for (key, value) in raw {
            if key.eq_ignore_ascii_case("name") || key.eq_ignore_ascii_case("location") {
                if let Value::String(name) = value {
                    record.name = Some(name);
                }
                continue;
            }

            let Some(kind) = IndicatorKind::from_key(&key) else {
                continue;
            };
            if let Some(number) = value.as_f64() {
                record.set(kind, number);
            }
        }

        Ok(record)
    }
}
