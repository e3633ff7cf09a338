//! src/functional.rs
//!
//! Closure-based validators composed with an associative combinator.
//!
//! ```
//! use composite_validation::domain::{PasswordError, ValidationOutcome};
//! use composite_validation::functional::{contains_number, empty_string, password_length};
//!
//! let validator = empty_string(PasswordError::EmptyPassword)
//!     & password_length(8)
//!     & contains_number();
//! assert_eq!(
//!     validator.call("password"),
//!     ValidationOutcome::Invalid(PasswordError::MissingDigit)
//! );
//! ```

use crate::domain::{EmailError, PasswordError, ValidationOutcome};
use crate::validators::email_format::is_well_formed_email;
use crate::validators::password::{has_digit, has_lowercase, has_min_length, has_uppercase};
use crate::validators::Validator;
use std::ops::BitAnd;
use std::sync::Arc;

type ValidatorFn<R> = dyn Fn(&str) -> ValidationOutcome<R> + Send + Sync;

/// A pure function from string to [`ValidationOutcome`].
///
/// Cloning is cheap and shares the wrapped closure.
pub struct FnValidator<R> {
    f: Arc<ValidatorFn<R>>,
}

impl<R> Clone for FnValidator<R> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<R> std::fmt::Debug for FnValidator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnValidator")
    }
}

impl<R: 'static> FnValidator<R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> ValidationOutcome<R> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Wrap any [`Validator`] as a closure.
    pub fn from_validator<V>(validator: V) -> Self
    where
        V: Validator<Reason = R> + Send + Sync + 'static,
    {
        Self::new(move |input| validator.validate(input))
    }

    pub fn call(&self, input: &str) -> ValidationOutcome<R> {
        (self.f)(input)
    }

    /// Validator running `self` then `other` and combining both outcomes
    /// with [`combine`]. Both closures run on every call.
    pub fn and(self, other: Self) -> Self {
        Self::new(move |input| combine(self.call(input), other.call(input)))
    }
}

impl<R: 'static> Validator for FnValidator<R> {
    type Reason = R;

    fn validate(&self, input: &str) -> ValidationOutcome<R> {
        self.call(input)
    }
}

impl<R: 'static> BitAnd for FnValidator<R> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

/// Left-biased outcome combination: the first `Invalid` wins.
pub fn combine<R>(
    first: ValidationOutcome<R>,
    second: ValidationOutcome<R>,
) -> ValidationOutcome<R> {
    first.combine(second)
}

/// Identity of [`FnValidator::and`].
pub fn always_valid<R: 'static>() -> FnValidator<R> {
    FnValidator::new(|_| ValidationOutcome::Valid)
}

/// Chain `validators` in order with [`FnValidator::and`].
pub fn all<R, I>(validators: I) -> FnValidator<R>
where
    R: 'static,
    I: IntoIterator<Item = FnValidator<R>>,
{
    let mut validators = validators.into_iter();
    match validators.next() {
        Some(first) => validators.fold(first, FnValidator::and),
        None => always_valid(),
    }
}

fn predicate<R, P>(passes: P, reason: R) -> FnValidator<R>
where
    R: Clone + Send + Sync + 'static,
    P: Fn(&str) -> bool + Send + Sync + 'static,
{
    FnValidator::new(move |input| {
        if passes(input) {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(reason.clone())
        }
    })
}

pub fn empty_string<R>(reason: R) -> FnValidator<R>
where
    R: Clone + Send + Sync + 'static,
{
    predicate(|input| !input.is_empty(), reason)
}

pub fn email_format() -> FnValidator<EmailError> {
    predicate(is_well_formed_email, EmailError::InvalidEmailFormat)
}

pub fn password_length(min_length: usize) -> FnValidator<PasswordError> {
    predicate(
        move |input| has_min_length(input, min_length),
        PasswordError::PasswordTooShort,
    )
}

pub fn uppercase_letter() -> FnValidator<PasswordError> {
    predicate(has_uppercase, PasswordError::MissingUppercase)
}

pub fn lowercase_letter() -> FnValidator<PasswordError> {
    predicate(has_lowercase, PasswordError::MissingLowercase)
}

pub fn contains_number() -> FnValidator<PasswordError> {
    predicate(has_digit, PasswordError::MissingDigit)
}
