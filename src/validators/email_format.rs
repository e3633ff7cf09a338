//! src/validators/email_format.rs

use crate::domain::{EmailError, ValidationOutcome};
use crate::validators::Validator;
use once_cell::sync::Lazy;
use regex::Regex;

/// Simplified RFC 5322 address: a local part of the allowed characters, `@`,
/// then dot-separated DNS labels of 1 to 63 alphanumerics with inner hyphens.
pub(crate) const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Returns true if the whole input matches [`EMAIL_PATTERN`].
pub(crate) fn is_well_formed_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmailFormatValidator;

impl Validator for EmailFormatValidator {
    type Reason = EmailError;

    fn validate(&self, input: &str) -> ValidationOutcome<EmailError> {
        if is_well_formed_email(input) {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(EmailError::InvalidEmailFormat)
        }
    }
}
