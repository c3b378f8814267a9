//! Subscriber installation.
//!
//! JSON output carries these fields for log shippers:
//! - `timestamp`, `level`, `target`
//! - `fields.message` plus any structured fields from the call site
//! - `span` context when inside an instrumented span

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the level filter from the config.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level {:?}: {}", config.log_level, e)))
}

/// Install the global subscriber.
///
/// Fails with `TelemetryError::AlreadyInitialized` if another subscriber was
/// installed first.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(config.ansi);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        filter = %config.log_level,
        "Logging initialized"
    );

    Ok(())
}

/// Log a header-related event with standard fields.
#[macro_export]
macro_rules! log_header_event {
    ($level:ident, $msg:expr, $height:expr, $hash:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            block_height = $height,
            block_hash = %$hash,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a peer-related event with standard fields.
#[macro_export]
macro_rules! log_peer_event {
    ($level:ident, $msg:expr, $peer_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            peer_id = %$peer_id,
            $($($field)*,)?
            $msg
        )
    };
}
