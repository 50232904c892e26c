use std::env;
use std::fmt;

use crate::poverty::CalculatorConfig;

/// Top-level configuration for the engine and its CLI surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub calculator: CalculatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("POVERTY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = CalculatorConfig::default();
        let counterfactual_step = match env::var("POVERTY_SIM_STEP") {
            Err(_) => defaults.counterfactual_step,
            Ok(raw) => {
                let parsed = raw
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidSimulationStep { value: raw.clone() })?;
                if !(parsed > 0.0 && parsed <= 100.0) {
                    return Err(ConfigError::InvalidSimulationStep { value: raw });
                }
                parsed
            }
        };

        let max_narrative_contributors = match env::var("POVERTY_NARRATIVE_CONTRIBUTORS") {
            Err(_) => defaults.max_narrative_contributors,
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidContributorLimit { value: raw })?,
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            calculator: CalculatorConfig {
                counterfactual_step,
                max_narrative_contributors,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSimulationStep { value: String },
    InvalidContributorLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSimulationStep { value } => write!(
                f,
                "POVERTY_SIM_STEP must be a number in (0, 100], got '{}'",
                value
            ),
            ConfigError::InvalidContributorLimit { value } => write!(
                f,
                "POVERTY_NARRATIVE_CONTRIBUTORS must be a non-negative integer, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("POVERTY_LOG_LEVEL");
        env::remove_var("POVERTY_SIM_STEP");
        env::remove_var("POVERTY_NARRATIVE_CONTRIBUTORS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        let config = AppConfig::load().expect("config loads with defaults");

        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.calculator.counterfactual_step, 20.0);
        assert_eq!(config.calculator.max_narrative_contributors, 3);
    }

    #[test]
    fn simulation_step_can_be_overridden() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POVERTY_SIM_STEP", "12.5");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.calculator.counterfactual_step, 12.5);

        reset_env();
    }

    #[test]
    fn out_of_range_simulation_step_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        for raw in ["0", "-4", "250", "lots"] {
            env::set_var("POVERTY_SIM_STEP", raw);
            let error = AppConfig::load().expect_err("step must be rejected");
            assert!(matches!(
                error,
                ConfigError::InvalidSimulationStep { .. }
            ));
        }

        reset_env();
    }
}
