//! src/error.rs

pub type AppResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Failures of the process around the validators. Rejected input is never
/// an `Error`, it is a `ValidationOutcome::Invalid`.
#[derive(thiserror::Error)]
pub enum Error {
    #[error("Failed to read configuration")]
    ConfigurationError(#[from] config::ConfigError),
    #[error("Failed to set up telemetry")]
    TelemetryError(#[source] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
