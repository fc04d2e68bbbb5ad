//! Built-in validators backing each validation rule

pub mod email;
pub mod numeric;
pub mod pattern;
pub mod required;

pub use email::EmailValidator;
pub use numeric::NumericValidator;
pub use pattern::PatternValidator;
pub use required::RequiredValidator;
