//! Pattern-based validators using regular expressions

use crate::traits::TextValidator;
use regex::Regex;

/// Validator for whole-string regular expression matches
///
/// The pattern is anchored on construction, so `abc` only accepts exactly
/// `abc` and never a string merely containing it.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    name: &'static str,
}

impl PatternValidator {
    /// Create a new pattern validator reporting under `name`
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{})$", pattern);
        Ok(Self {
            pattern: Regex::new(&anchored)?,
            name,
        })
    }

    /// Letters and digits only; the empty string passes
    pub fn alphanumeric() -> Self {
        Self::from_static("alphanumeric", "[a-zA-Z0-9]*")
    }

    /// Exactly ten ASCII digits
    pub fn phone_number() -> Self {
        Self::from_static("phone_number", "[0-9]{10}")
    }

    // Built-in patterns are literals; failing to compile one is a bug.
    fn from_static(name: &'static str, pattern: &'static str) -> Self {
        match Self::new(name, pattern) {
            Ok(validator) => validator,
            Err(e) => panic!("built-in pattern '{}' is invalid: {}", pattern, e),
        }
    }

    /// Get the anchored pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }
}

impl TextValidator for PatternValidator {
    fn is_valid(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn rule_name(&self) -> &'static str {
        self.name
    }
}
