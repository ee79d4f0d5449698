use serde::{Deserialize, Serialize};

/// Applicant snapshot submitted for a credit-card decision.
///
/// Missing fields default to zero or absent, mirroring a blank application form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    #[serde(default)]
    pub age: u8,
    /// Whole currency units.
    #[serde(default)]
    pub gross_annual_income: u64,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
}

impl CreditCardApplication {
    pub fn new(age: u8, gross_annual_income: u64) -> Self {
        Self {
            age,
            gross_annual_income,
            frequent_flyer_number: None,
        }
    }

    pub fn with_frequent_flyer_number(mut self, number: impl Into<String>) -> Self {
        self.frequent_flyer_number = Some(number.into());
        self
    }
}

/// Lookup depth requested from the frequent-flyer validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    #[default]
    None,
    Basic,
    Detailed,
}

impl ValidationMode {
    pub const fn label(self) -> &'static str {
        match self {
            ValidationMode::None => "none",
            ValidationMode::Basic => "basic",
            ValidationMode::Detailed => "detailed",
        }
    }
}

/// License details published by a validator service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseData {
    pub license_key: String,
}

/// Service metadata exposed by a validator so callers can decide whether to trust it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInformation {
    pub license: LicenseData,
}

impl ServiceInformation {
    pub fn with_license_key(license_key: impl Into<String>) -> Self {
        Self {
            license: LicenseData {
                license_key: license_key.into(),
            },
        }
    }
}
