mod config;
mod policy;

pub use config::EvaluationConfig;
pub use policy::{ApplicationDecision, DecisionRule};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{CreditCardApplication, ValidationMode};
use super::fraud::{DefaultFraudLookup, FraudLookup, FraudLookupError};
use super::validator::FrequentFlyerNumberValidator;

/// License key a validator must report before its answers are trusted.
pub const ACTIVE_LICENSE_KEY: &str = "OK";

/// Evaluator combining applicant attributes with the validator and fraud policy.
///
/// Owns the collaborators it was built with and counts the lookups the validator reports.
pub struct ApplicationEvaluator<V, F = DefaultFraudLookup> {
    validator: Option<V>,
    fraud_lookup: F,
    config: EvaluationConfig,
    lookups: Arc<AtomicU64>,
}

impl<V, F> ApplicationEvaluator<V, F>
where
    V: FrequentFlyerNumberValidator,
    F: FraudLookup,
{
    /// Builds the evaluator and subscribes to the validator's lookup notifications.
    ///
    /// A `None` validator is accepted; evaluations that need it fail with
    /// [`EvaluationError::MissingValidator`].
    pub fn new(mut validator: Option<V>, fraud_lookup: F, config: EvaluationConfig) -> Self {
        let lookups = Arc::new(AtomicU64::new(0));

        if let Some(validator) = validator.as_mut() {
            let counter = Arc::clone(&lookups);
            validator.on_lookup_performed(Box::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }));
        }

        Self {
            validator,
            fraud_lookup,
            config,
            lookups,
        }
    }

    pub fn evaluate(
        &mut self,
        application: &CreditCardApplication,
    ) -> Result<ApplicationDecision, EvaluationError> {
        self.assess(application).map(|outcome| outcome.decision)
    }

    /// Evaluates the application and reports which rule decided it.
    pub fn assess(
        &mut self,
        application: &CreditCardApplication,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let rule = self.decide(application)?;
        let decision = rule.decision();

        debug!(
            rule = rule.label(),
            decision = decision.label(),
            age = application.age,
            "credit card application evaluated"
        );

        Ok(EvaluationOutcome {
            decision,
            rule,
            summary: rule.summary(&self.config),
        })
    }

    fn decide(
        &mut self,
        application: &CreditCardApplication,
    ) -> Result<DecisionRule, EvaluationError> {
        let config = &self.config;

        if application.age < config.young_applicant_age {
            return Ok(DecisionRule::YoungApplicant);
        }

        if self.fraud_lookup.is_fraud_risk(application)? {
            return Ok(DecisionRule::FraudRisk);
        }

        if application.gross_annual_income >= config.high_income_threshold {
            return Ok(DecisionRule::HighIncome);
        }

        let validator = self
            .validator
            .as_mut()
            .ok_or(EvaluationError::MissingValidator)?;

        let mode = if application.age >= config.detailed_lookup_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Basic
        };
        validator.set_validation_mode(mode);

        if validator.service_information().license.license_key != ACTIVE_LICENSE_KEY {
            return Ok(DecisionRule::LicenseInactive);
        }

        // Validator failures degrade to a referral and are not surfaced.
        match validator.is_valid(application.frequent_flyer_number.as_deref()) {
            Ok(true) => {}
            Ok(false) => return Ok(DecisionRule::InvalidFrequentFlyerNumber),
            Err(_) => return Ok(DecisionRule::ValidatorFailure),
        }

        if application.gross_annual_income < config.low_income_threshold {
            return Ok(DecisionRule::LowIncome);
        }

        Ok(DecisionRule::Standard)
    }

    /// Number of lookups the validator has reported since construction.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn validator(&self) -> Option<&V> {
        self.validator.as_ref()
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }
}

/// Decision plus the audit trail explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: ApplicationDecision,
    pub rule: DecisionRule,
    pub summary: String,
}

/// Failures that abort an evaluation instead of producing a decision.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("frequent-flyer validator required but none was configured")]
    MissingValidator,
    #[error(transparent)]
    FraudLookup(#[from] FraudLookupError),
}
