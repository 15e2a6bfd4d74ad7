//! Logging setup.
//!
//! The library only emits `tracing` events: one `debug` event per rejected
//! board and `trace` events while ships are attributed. Binaries and test
//! harnesses that want to see them call [`init_tracing`] once at startup.

use crate::errors::BattlefieldError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Installs a global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `default_filter`
/// (e.g. `"battlefield=debug"`) when the variable is unset or invalid.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str, format: LogFormat) -> Result<(), BattlefieldError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| BattlefieldError::Internal(format!("failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_fails() {
        let _ = init_tracing("battlefield=debug", LogFormat::Text);
        let err = init_tracing("battlefield=debug", LogFormat::Json).unwrap_err();
        assert_eq!(err.code(), "INTERNAL-001");
    }

    #[test]
    fn test_log_format_serialize() {
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), r#""json""#);
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
