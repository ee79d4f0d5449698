use std::collections::BTreeSet;

use super::domain::CreditCardApplication;

/// Error raised by a fraud policy. Not contained by the evaluator.
#[derive(Debug, thiserror::Error)]
pub enum FraudLookupError {
    #[error("fraud service unavailable: {0}")]
    Unavailable(String),
}

/// Fraud-risk policy consulted before any other credit check.
///
/// Deployments replace the policy by overriding [`check_application`](Self::check_application);
/// callers always go through [`is_fraud_risk`](Self::is_fraud_risk).
pub trait FraudLookup {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> Result<bool, FraudLookupError> {
        self.check_application(application)
    }

    fn check_application(
        &self,
        _application: &CreditCardApplication,
    ) -> Result<bool, FraudLookupError> {
        Ok(false)
    }
}

/// Policy that never flags an application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFraudLookup;

impl FraudLookup for DefaultFraudLookup {}

/// Flags applications whose frequent-flyer number is on a watchlist.
#[derive(Debug, Clone, Default)]
pub struct WatchlistFraudLookup {
    flagged: BTreeSet<String>,
}

impl WatchlistFraudLookup {
    pub fn new<I, S>(flagged: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flagged: flagged.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }
}

impl FraudLookup for WatchlistFraudLookup {
    fn check_application(
        &self,
        application: &CreditCardApplication,
    ) -> Result<bool, FraudLookupError> {
        Ok(application
            .frequent_flyer_number
            .as_ref()
            .is_some_and(|number| self.flagged.contains(number)))
    }
}
