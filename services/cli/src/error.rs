use medpay::config::ConfigError;
use medpay::tariff::ScheduleError;
use medpay::telemetry::TelemetryError;
use std::fmt;

/// Top-level error surfaced by the CLI shell.
#[derive(Debug)]
pub(crate) enum CliError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Schedule(ScheduleError),
    Validation(ValidationError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "configuration error: {}", err),
            CliError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            CliError::Schedule(err) => write!(f, "tariff schedule error: {}", err),
            CliError::Validation(err) => write!(f, "invalid input: {}", err),
            CliError::Json(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(err) => Some(err),
            CliError::Telemetry(err) => Some(err),
            CliError::Schedule(err) => Some(err),
            CliError::Validation(err) => Some(err),
            CliError::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for CliError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<ScheduleError> for CliError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

impl From<ValidationError> for CliError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Input rejected before it ever reaches the calculators. The engine
/// would degrade such inputs to "not assessable"; the shell owes the
/// user a concrete message instead.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("a settlement amount is required when an agreement was reached on a monetary dispute")]
    MissingSettlementAmount,
    #[error("a start date is required unless --list is given")]
    MissingStartDate,
    #[error("unknown dispute track '{0}'; use --list to see the configured tracks")]
    UnknownTrack(String),
}
