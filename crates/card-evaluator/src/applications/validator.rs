use super::domain::{ServiceInformation, ValidationMode};

/// Callback invoked once for every lookup a validator performs.
pub type LookupListener = Box<dyn Fn() + Send + Sync>;

/// Error raised while a validator computes validity.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("validator service unavailable: {0}")]
    Unavailable(String),
    #[error("validator lookup failed: {0}")]
    Lookup(String),
}

/// Frequent-flyer number verification service consumed by the evaluator.
///
/// The evaluator writes the validation mode before asking for validity, reads the
/// license from [`service_information`](Self::service_information) to decide whether the
/// answer can be trusted, and subscribes to lookup notifications to count lookups.
pub trait FrequentFlyerNumberValidator {
    /// Implementations notify every registered listener synchronously, once per lookup.
    fn is_valid(&self, frequent_flyer_number: Option<&str>) -> Result<bool, ValidatorError>;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
    fn service_information(&self) -> &ServiceInformation;
    fn on_lookup_performed(&mut self, listener: LookupListener);
}

/// Local validator that checks number formats without calling a loyalty program.
pub struct OfflineValidator {
    service: ServiceInformation,
    mode: ValidationMode,
    listeners: Vec<LookupListener>,
}

impl OfflineValidator {
    pub fn new(license_key: impl Into<String>) -> Self {
        Self {
            service: ServiceInformation::with_license_key(license_key),
            mode: ValidationMode::default(),
            listeners: Vec::new(),
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

impl std::fmt::Debug for OfflineValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfflineValidator")
            .field("service", &self.service)
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FrequentFlyerNumberValidator for OfflineValidator {
    fn is_valid(&self, frequent_flyer_number: Option<&str>) -> Result<bool, ValidatorError> {
        let valid = frequent_flyer_number
            .map(|number| matches_format(number, self.mode))
            .unwrap_or(false);
        self.notify();
        Ok(valid)
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    fn service_information(&self) -> &ServiceInformation {
        &self.service
    }

    fn on_lookup_performed(&mut self, listener: LookupListener) {
        self.listeners.push(listener);
    }
}

fn matches_format(number: &str, mode: ValidationMode) -> bool {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    match mode {
        ValidationMode::None | ValidationMode::Basic => true,
        ValidationMode::Detailed => {
            // Two-letter carrier prefix, then the member digits.
            let (carrier, member) = number.split_at(2.min(number.len()));
            carrier.len() == 2
                && carrier.chars().all(|c| c.is_ascii_alphabetic())
                && (6..=10).contains(&member.len())
                && member.chars().all(|c| c.is_ascii_digit())
        }
    }
}
