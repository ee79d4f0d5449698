use serde::{Deserialize, Serialize};

/// Age and income boundaries steering the decision procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Applicants younger than this are always referred.
    pub young_applicant_age: u8,
    /// Applicants at or above this age get a detailed frequent-flyer lookup.
    pub detailed_lookup_age: u8,
    /// Validated applicants earning less than this are declined.
    pub low_income_threshold: u64,
    /// Applicants earning at least this are accepted without a lookup.
    pub high_income_threshold: u64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            young_applicant_age: 25,
            detailed_lookup_age: 30,
            low_income_threshold: 20_000,
            high_income_threshold: 100_000,
        }
    }
}
