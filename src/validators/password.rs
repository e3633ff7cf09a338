//! src/validators/password.rs

use crate::domain::{PasswordError, ValidationOutcome};
use crate::validators::Validator;

pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

fn check(passed: bool, reason: PasswordError) -> ValidationOutcome<PasswordError> {
    if passed {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(reason)
    }
}

pub(crate) fn has_min_length(input: &str, min_length: usize) -> bool {
    // length in chars, not in bytes
    input.chars().count() >= min_length
}

pub(crate) fn has_uppercase(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

/// Requires at least `min_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordLengthValidator {
    min_length: usize,
}

impl PasswordLengthValidator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for PasswordLengthValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_MIN_LENGTH)
    }
}

impl Validator for PasswordLengthValidator {
    type Reason = PasswordError;

    fn validate(&self, input: &str) -> ValidationOutcome<PasswordError> {
        check(
            has_min_length(input, self.min_length),
            PasswordError::PasswordTooShort,
        )
    }
}

/// Requires one of `A`-`Z` anywhere in the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UppercaseLetterValidator;

impl Validator for UppercaseLetterValidator {
    type Reason = PasswordError;

    fn validate(&self, input: &str) -> ValidationOutcome<PasswordError> {
        check(has_uppercase(input), PasswordError::MissingUppercase)
    }
}

/// Requires one of `a`-`z` anywhere in the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LowercaseLetterValidator;

impl Validator for LowercaseLetterValidator {
    type Reason = PasswordError;

    fn validate(&self, input: &str) -> ValidationOutcome<PasswordError> {
        check(has_lowercase(input), PasswordError::MissingLowercase)
    }
}

/// Requires one of `0`-`9` anywhere in the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContainsNumberValidator;

impl Validator for ContainsNumberValidator {
    type Reason = PasswordError;

    fn validate(&self, input: &str) -> ValidationOutcome<PasswordError> {
        check(has_digit(input), PasswordError::MissingDigit)
    }
}
