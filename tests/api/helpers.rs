//! tests/api/helpers.rs

use composite_validation::configuration::{
    ApplicationSettings, PolicySettings, SampleSettings, Settings,
};
use composite_validation::telemetry::{get_subscriber, init_subscriber};
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use once_cell::sync::Lazy;
use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;
use secrecy::Secret;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so both
    // branches have to initialize on their own.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialize tracing.");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialize tracing.");
    }
});

/// Initialize tracing once for the whole test binary.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn test_settings(emails: &[&str], passwords: &[&str]) -> Settings {
    Settings {
        application: ApplicationSettings {
            name: "test".into(),
            log_level: "info".into(),
        },
        policy: PolicySettings::default(),
        samples: SampleSettings {
            emails: emails.iter().map(|e| e.to_string()).collect(),
            passwords: passwords
                .iter()
                .map(|p| Secret::new(p.to_string()))
                .collect(),
        },
    }
}

/// Inputs used for table driven checks.
pub const SAMPLE_INPUTS: &[&str] = &[
    "",
    " ",
    "invalidEmail@",
    "@validDomain.com",
    "validEmail@validDomain.com",
    "valid.email+tag@sub.valid-domain.org",
    "pa$$",
    "passw0rd",
    "PASSW0RD",
    "paSSword",
    "paSSw0rd",
    "ПАРОЛЬпароль1",
];

#[derive(Debug, Clone)]
pub struct ValidEmailFixture(pub String);

impl Arbitrary for ValidEmailFixture {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let email = SafeEmail().fake_with_rng(&mut rng);
        Self(email)
    }
}
