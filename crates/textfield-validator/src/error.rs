//! Configuration error types
//!
//! Rule evaluation itself never fails: text either satisfies a rule or it
//! does not. Errors only arise where rules and modes are read from outside
//! the type system (names, JSON, environment).

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building a validator from external configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule name does not match any known validation rule
    #[error("unknown validation rule '{value}' (expected one of: empty, email, alphanumeric, numeric, phone_number)")]
    UnknownRule { value: String },

    /// The mode name does not match any known validation mode
    #[error("unknown validation mode '{value}' (expected one of: on_change, on_demand)")]
    UnknownMode { value: String },

    /// The JSON document could not be decoded
    #[error("invalid validator configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// On-demand validation was configured without a trigger binding
    #[error("on-demand validation requires a trigger binding")]
    MissingTrigger,
}

impl ConfigError {
    /// Create an unknown rule error
    pub fn unknown_rule(value: impl Into<String>) -> Self {
        Self::UnknownRule {
            value: value.into(),
        }
    }

    /// Create an unknown mode error
    pub fn unknown_mode(value: impl Into<String>) -> Self {
        Self::UnknownMode {
            value: value.into(),
        }
    }
}
