//! # SPV Telemetry
//!
//! Structured logging for the SPV header sync crates.
//!
//! The library crates only emit `tracing` events; a binary or test harness
//! calls [`init_logging`] once to decide where they go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spv_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> Result<(), spv_telemetry::TelemetryError> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Header sync events are now printed
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SPV_SERVICE_NAME` | `spv-sync` | Service name in the startup line |
//! | `SPV_LOG_LEVEL` | `info` | Log filter, falls back to `RUST_LOG` |
//! | `SPV_JSON_LOGS` | `false` | JSON output for log shippers |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Failed to install subscriber: {0}")]
    AlreadyInitialized(String),

    /// The log filter could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for a span tagged with the sync component.
///
/// # Example
///
/// ```rust,ignore
/// let _span = spv_telemetry::sync_span!("process_headers", peer = "peer-1").entered();
/// ```
#[macro_export]
macro_rules! sync_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name, component = "header-sync" $(, $($field)*)?)
    };
}
