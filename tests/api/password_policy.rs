//! tests/api/password_policy.rs

use crate::helpers::SAMPLE_INPUTS;
use claims::{assert_err_eq, assert_ok};
use composite_validation::configurator::password_validator;
use composite_validation::domain::PasswordError;
use composite_validation::validators::Validator;

#[test]
fn password_policy_reports_first_broken_rule() {
    let test_cases = vec![
        ("", PasswordError::EmptyPassword),
        ("pa$$", PasswordError::PasswordTooShort),
        ("passw0rd", PasswordError::MissingUppercase),
        ("PASSW0RD", PasswordError::MissingLowercase),
        ("paSSword", PasswordError::MissingDigit),
    ];
    let validator = password_validator();

    for (input, expected) in test_cases {
        assert_err_eq!(
            validator.validate(input).into_result(),
            expected,
            "Unexpected outcome for password {:?}.",
            input
        );
    }
}

#[test]
fn strong_password_is_accepted() {
    assert_ok!(password_validator().validate("paSSw0rd").into_result());
}

#[test]
fn short_password_is_too_short_even_without_other_classes() {
    // "a" lacks uppercase and digit as well, the length check comes first
    assert_err_eq!(
        password_validator().validate("a").into_result(),
        PasswordError::PasswordTooShort
    );
}

#[test]
fn validating_twice_gives_the_same_outcome() {
    let validator = password_validator();
    for input in SAMPLE_INPUTS {
        assert_eq!(validator.validate(input), validator.validate(input));
    }
}

#[quickcheck_macros::quickcheck]
fn empty_check_wins_over_every_other_rule(input: String) -> bool {
    let is_reported_empty =
        password_validator().validate(&input).reason() == Some(&PasswordError::EmptyPassword);
    is_reported_empty == input.is_empty()
}
