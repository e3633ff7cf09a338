//! src/harness.rs

use crate::configuration::{SampleSettings, Settings};
use crate::configurator::ValidatorConfigurator;
use crate::domain::{EmailError, PasswordError, ValidationOutcome};
use crate::validators::{CompositeValidator, Validator};
use secrecy::ExposeSecret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Email,
    Password,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Email => "email",
            Policy::Password => "password",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one sample, safe to print: passwords are masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub policy: Policy,
    pub sample: String,
    pub outcome: String,
    pub valid: bool,
}

impl SampleReport {
    fn new<R: std::fmt::Display>(
        policy: Policy,
        sample: String,
        outcome: &ValidationOutcome<R>,
    ) -> Self {
        Self {
            policy,
            sample,
            outcome: outcome.to_string(),
            valid: outcome.is_valid(),
        }
    }
}

impl std::fmt::Display for SampleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}: {}", self.policy, self.sample, self.outcome)
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// Runs the configured samples through both policies.
pub struct Harness {
    email_validator: CompositeValidator<EmailError>,
    password_validator: CompositeValidator<PasswordError>,
    samples: SampleSettings,
}

impl Harness {
    pub fn build(settings: Settings) -> Self {
        let configurator = ValidatorConfigurator::new(settings.policy);
        Self {
            email_validator: configurator.email_validator(),
            password_validator: configurator.password_validator(),
            samples: settings.samples,
        }
    }

    #[tracing::instrument(name = "Run validation samples", skip(self))]
    pub fn run(&self) -> Vec<SampleReport> {
        let emails = self.samples.emails.iter().map(|email| {
            let outcome = self.email_validator.validate(email);
            tracing::info!(policy = %Policy::Email, sample = %email, outcome = %outcome);
            SampleReport::new(Policy::Email, email.to_owned(), &outcome)
        });
        let passwords = self.samples.passwords.iter().map(|password| {
            let outcome = self.password_validator.validate(password.expose_secret());
            let masked = mask(password.expose_secret());
            tracing::info!(policy = %Policy::Password, sample = %masked, outcome = %outcome);
            SampleReport::new(Policy::Password, masked, &outcome)
        });
        emails.chain(passwords).collect()
    }
}
