//! Validator configuration
//!
//! A field's rule and mode can come from code, from a JSON document, or from
//! the environment (`FIELD_VALIDATION_RULE`, `FIELD_VALIDATION_MODE`).

use crate::error::ConfigResult;
use crate::rules::{ValidationMode, ValidationRule};
use serde::{Deserialize, Serialize};
use std::env;

pub const RULE_ENV_VAR: &str = "FIELD_VALIDATION_RULE";
pub const MODE_ENV_VAR: &str = "FIELD_VALIDATION_MODE";

/// Rule and mode for one validated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Check applied to the text
    pub rule: ValidationRule,
    /// When the check runs
    pub mode: ValidationMode,
}

impl ValidatorConfig {
    /// Create a configuration from a rule and a mode
    pub fn new(rule: ValidationRule, mode: ValidationMode) -> Self {
        Self { rule, mode }
    }

    /// Decode a configuration such as `{"rule": "email", "mode": "on_demand"}`.
    ///
    /// Missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset variables
    pub fn from_vars<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let rule = match lookup(RULE_ENV_VAR) {
            Some(value) => value.parse::<ValidationRule>()?,
            None => defaults.rule,
        };
        let mode = match lookup(MODE_ENV_VAR) {
            Some(value) => value.parse::<ValidationMode>()?,
            None => defaults.mode,
        };

        Ok(Self { rule, mode })
    }
}
