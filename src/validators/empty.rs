//! src/validators/empty.rs

use crate::domain::ValidationOutcome;
use crate::validators::Validator;

/// Rejects the empty string with a reason chosen at construction.
///
/// One implementation serves every domain: the email policy builds it with
/// `EmailError::EmptyEmail`, the password policy with
/// `PasswordError::EmptyPassword`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStringValidator<R> {
    reason: R,
}

impl<R> EmptyStringValidator<R> {
    pub fn new(reason: R) -> Self {
        Self { reason }
    }
}

impl<R: Clone> Validator for EmptyStringValidator<R> {
    type Reason = R;

    fn validate(&self, input: &str) -> ValidationOutcome<R> {
        // zero chars and zero bytes coincide, no need to count
        if input.is_empty() {
            ValidationOutcome::Invalid(self.reason.clone())
        } else {
            ValidationOutcome::Valid
        }
    }
}
