use crate::config::ConfigError;
use crate::controller::SubmitError;
use crate::submission::ClientBuildError;
use crate::telemetry::TelemetryError;

/// Top-level error for binaries built on this crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("client error: {0}")]
    Client(#[from] ClientBuildError),
    #[error("submission not attempted: {0}")]
    Submit(#[from] SubmitError),
}
