//! src/validators/mod.rs

mod composite;
pub(crate) mod email_format;
mod empty;
pub(crate) mod password;

pub use composite::{BoxedValidator, CompositeValidator};
pub use email_format::EmailFormatValidator;
pub use empty::EmptyStringValidator;
pub use password::{
    ContainsNumberValidator, LowercaseLetterValidator, PasswordLengthValidator,
    UppercaseLetterValidator, DEFAULT_PASSWORD_MIN_LENGTH,
};

use crate::domain::ValidationOutcome;
use std::sync::Arc;

/// Anything that maps a string to a [`ValidationOutcome`].
///
/// Implementations must be pure: the same input always yields the same
/// outcome and validating never mutates shared state. Atomic checks and
/// [`CompositeValidator`] implement this trait alike, so composites nest.
pub trait Validator {
    /// Closed reason enumeration reported on failure.
    type Reason;

    fn validate(&self, input: &str) -> ValidationOutcome<Self::Reason>;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Reason = V::Reason;

    fn validate(&self, input: &str) -> ValidationOutcome<Self::Reason> {
        (**self).validate(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Reason = V::Reason;

    fn validate(&self, input: &str) -> ValidationOutcome<Self::Reason> {
        (**self).validate(input)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    type Reason = V::Reason;

    fn validate(&self, input: &str) -> ValidationOutcome<Self::Reason> {
        (**self).validate(input)
    }
}
