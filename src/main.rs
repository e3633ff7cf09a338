//! main.rs

use composite_validation::configuration::get_configuration;
use composite_validation::error::{AppResult, Error};
use composite_validation::harness::Harness;
use composite_validation::telemetry::{get_subscriber, init_subscriber};

fn main() -> AppResult<()> {
    let configuration = get_configuration()?;

    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber).map_err(Error::TelemetryError)?;

    let harness = Harness::build(configuration);
    let reports = harness.run();
    for report in &reports {
        println!("{}", report);
    }
    tracing::info!(
        samples = reports.len(),
        valid = reports.iter().filter(|r| r.valid).count(),
        "Validation samples finished"
    );

    Ok(())
}
