//! # textfield-validator
//!
//! Validation attachment for text-entry fields. A host binds a text value,
//! a validity flag and (optionally) a trigger flag; a
//! [`ValidationController`] checks the text against one of a fixed set of
//! [`ValidationRule`]s either on every edit or when the trigger fires.
//!
//! ```
//! use textfield_validator::{Binding, ValidationController, ValidationMode, ValidationRule};
//!
//! let text = Binding::new(String::new());
//! let is_valid = Binding::new(false);
//! let field = ValidationController::attach(
//!     text.clone(),
//!     is_valid.clone(),
//!     ValidationRule::Email,
//!     ValidationMode::OnChange,
//!     None,
//! )
//! .observe();
//!
//! text.set("user@example.com".to_string());
//! assert!(is_valid.get());
//! # drop(field);
//! ```

pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod rules;
pub mod scheduler;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use binding::{Binding, Subscription};
pub use config::ValidatorConfig;
pub use controller::{ObservedController, ValidationController};
pub use error::{ConfigError, ConfigResult};
pub use rules::{evaluate, ValidationMode, ValidationRule};
pub use scheduler::{DeferredQueue, LocalTaskScheduler, Scheduler};
pub use traits::{FieldValidation, TextValidator};

// Built-in validators
pub use validators::{EmailValidator, NumericValidator, PatternValidator, RequiredValidator};
