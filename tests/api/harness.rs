//! tests/api/harness.rs

use crate::helpers::{init_tracing, test_settings};
use composite_validation::harness::{Harness, Policy};

#[test]
fn harness_reports_every_sample_in_order() {
    init_tracing();
    let settings = test_settings(
        &["", "invalidEmail@", "validEmail@validDomain.com"],
        &["", "pa$$", "passw0rd", "paSSw0rd"],
    );

    let reports = Harness::build(settings).run();

    let summary: Vec<_> = reports
        .iter()
        .map(|r| (r.policy, r.sample.as_str(), r.valid))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Policy::Email, "", false),
            (Policy::Email, "invalidEmail@", false),
            (Policy::Email, "validEmail@validDomain.com", true),
            (Policy::Password, "", false),
            (Policy::Password, "****", false),
            (Policy::Password, "********", false),
            (Policy::Password, "********", true),
        ]
    );
}

#[test]
fn harness_reports_reason_messages() {
    init_tracing();
    let settings = test_settings(&[""], &["passw0rd"]);

    let reports = Harness::build(settings).run();

    assert_eq!(reports[0].outcome, "invalid: The email address is empty.");
    assert_eq!(
        reports[1].outcome,
        "invalid: The password must contain an uppercase letter."
    );
}

#[test]
fn passwords_never_appear_in_reports() {
    init_tracing();
    let settings = test_settings(&[], &["paSSw0rd"]);

    let reports = Harness::build(settings).run();

    assert!(reports.iter().all(|r| !r.to_string().contains("paSSw0rd")));
}

fn email_policy_never_reports_password_masks(input: String) -> bool {
    !Harness::build(test_settings(&[input.as_str()], &[]))
        .run()
        .iter()
        .any(|r| r.policy == Policy::Password)
}

#[test]
fn tracing_initializes_after_quickcheck_installed_its_logger() {
    // quickcheck sets `env_logger` as the global `log` logger on first use
    let property: fn(String) -> bool = email_policy_never_reports_password_masks;
    quickcheck::quickcheck(property);
    init_tracing();
    let settings = test_settings(&["validEmail@validDomain.com"], &[]);

    let reports = Harness::build(settings).run();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].valid);
}
