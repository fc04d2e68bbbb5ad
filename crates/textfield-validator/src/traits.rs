//! Core validation traits

use crate::rules::{ValidationMode, ValidationRule};

/// Check that every built-in validator implements
pub trait TextValidator: Send + Sync {
    /// Whether `text` satisfies this validator
    fn is_valid(&self, text: &str) -> bool;

    /// Get the validation rule name
    fn rule_name(&self) -> &'static str;
}

/// Read access to a validated field's state
pub trait FieldValidation {
    /// Current text of the field
    fn text(&self) -> String;

    /// Result of the last completed evaluation
    fn is_valid(&self) -> bool;

    /// Rule applied to the field
    fn rule(&self) -> ValidationRule;

    /// When the rule is applied
    fn mode(&self) -> ValidationMode;
}
