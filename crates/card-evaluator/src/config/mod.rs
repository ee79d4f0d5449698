use std::env;
use std::fmt;
use std::str::FromStr;

use crate::applications::EvaluationConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the evaluator and its front ends.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
    pub validator: ValidatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CARD_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("CARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            young_applicant_age: numeric_var(
                "CARD_YOUNG_APPLICANT_AGE",
                defaults.young_applicant_age,
            )?,
            detailed_lookup_age: numeric_var(
                "CARD_DETAILED_LOOKUP_AGE",
                defaults.detailed_lookup_age,
            )?,
            low_income_threshold: numeric_var(
                "CARD_LOW_INCOME_THRESHOLD",
                defaults.low_income_threshold,
            )?,
            high_income_threshold: numeric_var(
                "CARD_HIGH_INCOME_THRESHOLD",
                defaults.high_income_threshold,
            )?,
        };

        if evaluation.low_income_threshold >= evaluation.high_income_threshold {
            return Err(ConfigError::InvalidThresholds {
                low: evaluation.low_income_threshold,
                high: evaluation.high_income_threshold,
            });
        }

        let license_key = env::var("CARD_VALIDATOR_LICENSE").unwrap_or_else(|_| "OK".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation,
            validator: ValidatorConfig { license_key },
        })
    }
}

fn numeric_var<T: FromStr>(variable: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { variable, value }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the bundled offline frequent-flyer validator.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub license_key: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        variable: &'static str,
        value: String,
    },
    InvalidThresholds {
        low: u64,
        high: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be a non-negative integer (got '{value}')")
            }
            ConfigError::InvalidThresholds { low, high } => write!(
                f,
                "CARD_LOW_INCOME_THRESHOLD ({low}) must be below CARD_HIGH_INCOME_THRESHOLD ({high})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
