use std::collections::VecDeque;
use std::sync::Mutex;

use crate::applications::domain::{CreditCardApplication, ServiceInformation, ValidationMode};
use crate::applications::fraud::{FraudLookup, FraudLookupError};
use crate::applications::validator::{
    FrequentFlyerNumberValidator, LookupListener, ValidatorError,
};
use crate::applications::{ApplicationEvaluator, DefaultFraudLookup, EvaluationConfig};

type Answer = Box<dyn Fn(Option<&str>) -> Result<bool, ValidatorError> + Send + Sync>;

/// Validator double with scripted answers that records every number it is asked about.
pub(super) struct ScriptedValidator {
    service: ServiceInformation,
    mode: ValidationMode,
    mode_writes: Vec<ValidationMode>,
    queued: Mutex<VecDeque<Result<bool, ValidatorError>>>,
    fallback: Answer,
    calls: Mutex<Vec<Option<String>>>,
    listeners: Vec<LookupListener>,
    notify: bool,
}

impl ScriptedValidator {
    pub(super) fn licensed(license_key: &str) -> Self {
        Self {
            service: ServiceInformation::with_license_key(license_key),
            mode: ValidationMode::None,
            mode_writes: Vec::new(),
            queued: Mutex::new(VecDeque::new()),
            fallback: Box::new(|_| Ok(false)),
            calls: Mutex::new(Vec::new()),
            listeners: Vec::new(),
            notify: true,
        }
    }

    pub(super) fn answering<A>(mut self, answer: A) -> Self
    where
        A: Fn(Option<&str>) -> Result<bool, ValidatorError> + Send + Sync + 'static,
    {
        self.fallback = Box::new(answer);
        self
    }

    pub(super) fn then_answer(self, answer: Result<bool, ValidatorError>) -> Self {
        self.queued
            .lock()
            .expect("queue mutex poisoned")
            .push_back(answer);
        self
    }

    pub(super) fn failing() -> Self {
        Self::licensed("OK")
            .answering(|_| Err(ValidatorError::Unavailable("loyalty service down".to_string())))
    }

    pub(super) fn silent(mut self) -> Self {
        self.notify = false;
        self
    }

    pub(super) fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(super) fn mode_writes(&self) -> &[ValidationMode] {
        &self.mode_writes
    }

    pub(super) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl FrequentFlyerNumberValidator for ScriptedValidator {
    fn is_valid(&self, frequent_flyer_number: Option<&str>) -> Result<bool, ValidatorError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(frequent_flyer_number.map(str::to_string));

        if self.notify {
            for listener in &self.listeners {
                listener();
            }
        }

        let queued = self.queued.lock().expect("queue mutex poisoned").pop_front();
        match queued {
            Some(answer) => answer,
            None => (self.fallback)(frequent_flyer_number),
        }
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode_writes.push(mode);
        self.mode = mode;
    }

    fn service_information(&self) -> &ServiceInformation {
        &self.service
    }

    fn on_lookup_performed(&mut self, listener: LookupListener) {
        self.listeners.push(listener);
    }
}

/// Fraud policy that flags every application.
pub(super) struct FlagEverything;

impl FraudLookup for FlagEverything {
    fn check_application(
        &self,
        _application: &CreditCardApplication,
    ) -> Result<bool, FraudLookupError> {
        Ok(true)
    }
}

/// Fraud policy whose backend is down.
pub(super) struct BrokenFraudService;

impl FraudLookup for BrokenFraudService {
    fn check_application(
        &self,
        _application: &CreditCardApplication,
    ) -> Result<bool, FraudLookupError> {
        Err(FraudLookupError::Unavailable("timeout".to_string()))
    }
}

/// Matches numbers containing a lowercase ASCII letter, i.e. the `[a-z]` pattern.
pub(super) fn contains_lowercase(number: Option<&str>) -> Result<bool, ValidatorError> {
    Ok(number.is_some_and(|value| value.chars().any(|c| c.is_ascii_lowercase())))
}

pub(super) fn evaluator(validator: ScriptedValidator) -> ApplicationEvaluator<ScriptedValidator> {
    ApplicationEvaluator::new(
        Some(validator),
        DefaultFraudLookup,
        EvaluationConfig::default(),
    )
}

pub(super) fn evaluator_without_validator() -> ApplicationEvaluator<ScriptedValidator> {
    ApplicationEvaluator::new(None, DefaultFraudLookup, EvaluationConfig::default())
}

pub(super) fn low_income_application() -> CreditCardApplication {
    CreditCardApplication::new(42, 19_999).with_frequent_flyer_number("y")
}

pub(super) fn scripted<F: FraudLookup>(
    evaluator: &ApplicationEvaluator<ScriptedValidator, F>,
) -> &ScriptedValidator {
    evaluator.validator().expect("validator configured")
}
