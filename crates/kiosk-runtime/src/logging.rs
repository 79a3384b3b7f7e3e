//! Logging setup

use tracing_subscriber::EnvFilter;

use kiosk_core::{KioskError, KioskResult};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "KIOSK_LOG";

/// Filter from `KIOSK_LOG`, `info` when unset or invalid
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber, optionally emitting JSON lines.
/// Fails if a subscriber is already installed.
pub fn init_logging(json: bool) -> KioskResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(log_filter());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| KioskError::InvalidConfig(format!("logging: {}", e)))
}
