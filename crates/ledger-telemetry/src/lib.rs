//! # Ledger Telemetry
//!
//! Structured logging for task-ledger clients, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config).expect("Failed to init telemetry");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `task-ledger` | Service name attached to every log line |
//! | `TL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `TL_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `TL_CONSOLE_OUTPUT` | `true` | Write logs to stdout at all |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_for_tests, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize logging for the process.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_tracing(config)?;
    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}
