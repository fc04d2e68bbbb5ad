//! Numeric text validator

use crate::traits::TextValidator;

/// Validator for text that parses as a finite floating-point number
///
/// Accepts anything `f64::from_str` accepts (`42`, `-3.14`, `+.5`, `1e-9`)
/// except values that come out infinite or NaN, such as `inf`, `NaN` or
/// `1e400`. No trimming is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericValidator;

impl NumericValidator {
    /// Create a new numeric validator
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` into a finite number
    pub fn parse(&self, text: &str) -> Option<f64> {
        text.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

impl TextValidator for NumericValidator {
    fn is_valid(&self, text: &str) -> bool {
        self.parse(text).is_some()
    }

    fn rule_name(&self) -> &'static str {
        "numeric"
    }
}
