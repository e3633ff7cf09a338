//! src/configurator.rs
//!
//! Factories for the built-in email and password policies, in both the
//! sequence style and the closure style. Both styles check the same rules
//! in the same order:
//!
//! - email: not empty, well formed
//! - password: not empty, long enough, uppercase, lowercase, digit

use crate::configuration::PolicySettings;
use crate::domain::{EmailError, PasswordError};
use crate::functional::{self, FnValidator};
use crate::validators::{
    CompositeValidator, ContainsNumberValidator, EmailFormatValidator, EmptyStringValidator,
    LowercaseLetterValidator, PasswordLengthValidator, UppercaseLetterValidator,
};

#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigurator {
    settings: PolicySettings,
}

impl ValidatorConfigurator {
    pub fn new(settings: PolicySettings) -> Self {
        Self { settings }
    }

    pub fn email_validator(&self) -> CompositeValidator<EmailError> {
        CompositeValidator::default()
            .with(EmptyStringValidator::new(EmailError::EmptyEmail))
            .with(EmailFormatValidator)
    }

    pub fn password_validator(&self) -> CompositeValidator<PasswordError> {
        CompositeValidator::default()
            .with(EmptyStringValidator::new(PasswordError::EmptyPassword))
            .with(PasswordLengthValidator::new(
                self.settings.password_min_length,
            ))
            .with(UppercaseLetterValidator)
            .with(LowercaseLetterValidator)
            .with(ContainsNumberValidator)
    }

    pub fn email_fn_validator(&self) -> FnValidator<EmailError> {
        functional::empty_string(EmailError::EmptyEmail) & functional::email_format()
    }

    pub fn password_fn_validator(&self) -> FnValidator<PasswordError> {
        functional::empty_string(PasswordError::EmptyPassword)
            & functional::password_length(self.settings.password_min_length)
            & functional::uppercase_letter()
            & functional::lowercase_letter()
            & functional::contains_number()
    }
}

/// Email policy with default settings.
pub fn email_validator() -> CompositeValidator<EmailError> {
    ValidatorConfigurator::default().email_validator()
}

/// Password policy with default settings.
pub fn password_validator() -> CompositeValidator<PasswordError> {
    ValidatorConfigurator::default().password_validator()
}
