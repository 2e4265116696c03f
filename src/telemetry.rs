use crate::config::{AppEnvironment, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { value: String, source: ParseError },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { value, .. } => {
                write!(f, "invalid log filter '{}' from APP_LOG_LEVEL", value)
            }
            TelemetryError::Install(err) => {
                write!(f, "failed to install tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber for the capability service. Report
/// endpoints and the CLI both log through this; compact single-line
/// output with no ANSI so container log collectors stay parseable.
pub fn init(environment: AppEnvironment, config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = resolve_filter(environment, config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Install)
}

/// Filter precedence: `RUST_LOG`, then `APP_LOG_LEVEL`, then the
/// environment default (debug in development, info in production).
fn resolve_filter(
    environment: AppEnvironment,
    config: &TelemetryConfig,
) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    match &config.log_level {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
                value: level.clone(),
                source,
            })
        }
        None => Ok(EnvFilter::new(environment.default_log_filter())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn rust_log_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn explicit_level_beats_the_environment_default() {
        let _lock = rust_log_guard().lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        let config = TelemetryConfig {
            log_level: Some("warn".to_string()),
        };
        let filter =
            resolve_filter(AppEnvironment::Development, &config).expect("filter builds");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn development_falls_back_to_debug() {
        let _lock = rust_log_guard().lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        let config = TelemetryConfig { log_level: None };
        let filter =
            resolve_filter(AppEnvironment::Development, &config).expect("filter builds");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn invalid_configured_filter_is_rejected() {
        let _lock = rust_log_guard().lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        let config = TelemetryConfig {
            log_level: Some("foo=bar=baz".to_string()),
        };
        let err =
            resolve_filter(AppEnvironment::Production, &config).expect_err("bad filter rejected");
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
    }
}
