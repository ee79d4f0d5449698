//! Credit-card application evaluation and its collaborators.
//!
//! The evaluator consults a fraud policy and a frequent-flyer number validator in a fixed
//! order. Both collaborators are traits so deployments and tests can substitute their own.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod intake;
pub mod report;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{CreditCardApplication, LicenseData, ServiceInformation, ValidationMode};
pub use evaluation::{
    ApplicationDecision, ApplicationEvaluator, DecisionRule, EvaluationConfig, EvaluationError,
    EvaluationOutcome, ACTIVE_LICENSE_KEY,
};
pub use fraud::{DefaultFraudLookup, FraudLookup, FraudLookupError, WatchlistFraudLookup};
pub use intake::{read_applications, read_applications_from_path, IntakeError, IntakeRecord};
pub use report::{BatchEntry, BatchReport, DecisionTally};
pub use validator::{
    FrequentFlyerNumberValidator, LookupListener, OfflineValidator, ValidatorError,
};
