//! tests/api/configuration.rs

use composite_validation::configuration::get_configuration;
use composite_validation::configurator::ValidatorConfigurator;
use composite_validation::validators::Validator;
use secrecy::ExposeSecret;

#[test]
fn base_configuration_is_loaded() {
    let configuration = get_configuration().expect("Failed to read configuration.");

    assert_eq!(configuration.application.name, "composite_validation");
    assert_eq!(configuration.policy.password_min_length, 8);
    assert_eq!(configuration.samples.emails.len(), 3);
    assert_eq!(configuration.samples.passwords.len(), 4);
}

#[test]
fn configured_samples_cover_every_scenario() {
    let configuration = get_configuration().expect("Failed to read configuration.");
    let configurator = ValidatorConfigurator::new(configuration.policy);
    let password = configurator.password_validator();

    let valid_passwords = configuration
        .samples
        .passwords
        .iter()
        .filter(|p| password.validate(p.expose_secret()).is_valid())
        .count();
    assert_eq!(valid_passwords, 1);
}
