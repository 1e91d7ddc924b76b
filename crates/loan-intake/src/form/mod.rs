//! Application draft, field-level validation, and input normalization.

pub mod domain;
pub mod normalizer;
pub mod validator;

pub use domain::{ApplicationForm, FieldErrorMap, FormField};
pub use normalizer::{parse_amount, strip_non_digits, AmountParseError};
pub use validator::validate;
