//! Non-empty text validator

use crate::traits::TextValidator;

/// Validator that passes any text with at least one character
///
/// Whitespace counts as content: `" "` is valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    /// Create a new required validator
    pub fn new() -> Self {
        Self
    }
}

impl TextValidator for RequiredValidator {
    fn is_valid(&self, text: &str) -> bool {
        !text.is_empty()
    }

    fn rule_name(&self) -> &'static str {
        "empty"
    }
}
