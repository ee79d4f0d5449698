use serde::{Deserialize, Serialize};

use super::config::EvaluationConfig;

/// Outcome of a credit-card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl ApplicationDecision {
    pub const ALL: [ApplicationDecision; 4] = [
        ApplicationDecision::AutoAccepted,
        ApplicationDecision::AutoDeclined,
        ApplicationDecision::ReferredToHuman,
        ApplicationDecision::ReferredToHumanFraudRisk,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationDecision::AutoAccepted => "auto_accepted",
            ApplicationDecision::AutoDeclined => "auto_declined",
            ApplicationDecision::ReferredToHuman => "referred_to_human",
            ApplicationDecision::ReferredToHumanFraudRisk => "referred_to_human_fraud_risk",
        }
    }
}

/// Step of the decision procedure that produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionRule {
    YoungApplicant,
    FraudRisk,
    HighIncome,
    LicenseInactive,
    ValidatorFailure,
    InvalidFrequentFlyerNumber,
    LowIncome,
    Standard,
}

impl DecisionRule {
    pub const fn decision(self) -> ApplicationDecision {
        match self {
            DecisionRule::FraudRisk => ApplicationDecision::ReferredToHumanFraudRisk,
            DecisionRule::YoungApplicant
            | DecisionRule::LicenseInactive
            | DecisionRule::ValidatorFailure
            | DecisionRule::InvalidFrequentFlyerNumber => ApplicationDecision::ReferredToHuman,
            DecisionRule::LowIncome => ApplicationDecision::AutoDeclined,
            DecisionRule::HighIncome | DecisionRule::Standard => ApplicationDecision::AutoAccepted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DecisionRule::YoungApplicant => "young_applicant",
            DecisionRule::FraudRisk => "fraud_risk",
            DecisionRule::HighIncome => "high_income",
            DecisionRule::LicenseInactive => "license_inactive",
            DecisionRule::ValidatorFailure => "validator_failure",
            DecisionRule::InvalidFrequentFlyerNumber => "invalid_frequent_flyer_number",
            DecisionRule::LowIncome => "low_income",
            DecisionRule::Standard => "standard",
        }
    }

    pub fn summary(self, config: &EvaluationConfig) -> String {
        match self {
            DecisionRule::YoungApplicant => format!(
                "applicant younger than {} referred for manual review",
                config.young_applicant_age
            ),
            DecisionRule::FraudRisk => "fraud policy flagged the application".to_string(),
            DecisionRule::HighIncome => format!(
                "income at or above {} accepted without frequent-flyer lookup",
                config.high_income_threshold
            ),
            DecisionRule::LicenseInactive => {
                "frequent-flyer validator license inactive".to_string()
            }
            DecisionRule::ValidatorFailure => "frequent-flyer validator failed".to_string(),
            DecisionRule::InvalidFrequentFlyerNumber => {
                "frequent-flyer number failed validation".to_string()
            }
            DecisionRule::LowIncome => format!(
                "income below {} declined",
                config.low_income_threshold
            ),
            DecisionRule::Standard => "application meets standard criteria".to_string(),
        }
    }
}
