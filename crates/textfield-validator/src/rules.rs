//! Validation rules, modes and the rule evaluator

use crate::error::ConfigError;
use crate::traits::TextValidator;
use crate::validators::{EmailValidator, NumericValidator, PatternValidator, RequiredValidator};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static REQUIRED: RequiredValidator = RequiredValidator;
static NUMERIC: NumericValidator = NumericValidator;
static EMAIL: Lazy<EmailValidator> = Lazy::new(EmailValidator::new);
static ALPHANUMERIC: Lazy<PatternValidator> = Lazy::new(PatternValidator::alphanumeric);
static PHONE_NUMBER: Lazy<PatternValidator> = Lazy::new(PatternValidator::phone_number);

/// The closed set of checks a field can be validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Passes when the text is NOT empty.
    ///
    /// The name describes the failure case rather than the passing one. It is
    /// kept as-is so existing configurations keep their meaning.
    #[default]
    Empty,
    /// `local@domain.tld` shape, matched against the whole text
    Email,
    /// ASCII letters and digits only; the empty string passes
    Alphanumeric,
    /// Parses as a finite floating-point number
    Numeric,
    /// Exactly ten ASCII digits
    PhoneNumber,
}

impl ValidationRule {
    /// Every rule, in declaration order
    pub const ALL: [ValidationRule; 5] = [
        ValidationRule::Empty,
        ValidationRule::Email,
        ValidationRule::Alphanumeric,
        ValidationRule::Numeric,
        ValidationRule::PhoneNumber,
    ];

    /// The validator backing this rule
    pub fn validator(self) -> &'static dyn TextValidator {
        match self {
            ValidationRule::Empty => &REQUIRED,
            ValidationRule::Email => &*EMAIL,
            ValidationRule::Alphanumeric => &*ALPHANUMERIC,
            ValidationRule::Numeric => &NUMERIC,
            ValidationRule::PhoneNumber => &*PHONE_NUMBER,
        }
    }

    /// Configuration name of the rule
    pub fn name(self) -> &'static str {
        match self {
            ValidationRule::Empty => "empty",
            ValidationRule::Email => "email",
            ValidationRule::Alphanumeric => "alphanumeric",
            ValidationRule::Numeric => "numeric",
            ValidationRule::PhoneNumber => "phone_number",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidationRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        ValidationRule::ALL
            .into_iter()
            .find(|rule| rule.name() == normalized)
            .ok_or_else(|| ConfigError::unknown_rule(s))
    }
}

/// When a field's rule gets applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Re-evaluate on every text change
    #[default]
    OnChange,
    /// Evaluate only when the trigger signal turns true
    OnDemand,
}

impl ValidationMode {
    /// Configuration name of the mode
    pub fn name(self) -> &'static str {
        match self {
            ValidationMode::OnChange => "on_change",
            ValidationMode::OnDemand => "on_demand",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "on_change" => Ok(ValidationMode::OnChange),
            "on_demand" => Ok(ValidationMode::OnDemand),
            _ => Err(ConfigError::unknown_mode(s)),
        }
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('-', "_")
}

/// Check `text` against `rule`.
///
/// Pure and total: the same input always gives the same answer, and
/// malformed text is simply invalid.
pub fn evaluate(text: &str, rule: ValidationRule) -> bool {
    rule.validator().is_valid(text)
}
