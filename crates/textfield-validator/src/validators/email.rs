//! Email format validator

use crate::traits::TextValidator;
use crate::validators::pattern::PatternValidator;

/// Local part, `@`, a domain, a dot, then a 2 to 64 letter top-level domain.
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";

/// Validator for email address format
///
/// This is a shape check, not RFC 5322: consecutive dots or a leading dot
/// in the domain are accepted as long as the overall layout matches.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: PatternValidator,
}

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        let pattern = match PatternValidator::new("email", EMAIL_PATTERN) {
            Ok(pattern) => pattern,
            Err(e) => panic!("email pattern is invalid: {}", e),
        };
        Self { pattern }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextValidator for EmailValidator {
    fn is_valid(&self, text: &str) -> bool {
        self.pattern.is_valid(text)
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
