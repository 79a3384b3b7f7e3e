//! Error types for the kiosk dashboard

use thiserror::Error;

use crate::SurfaceId;

/// Kiosk dashboard errors
#[derive(Error, Debug)]
pub enum KioskError {
    // Surface errors
    #[error("Surface not found: {0}")]
    SurfaceMissing(SurfaceId),

    // Formatting errors
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    // Animation errors
    #[error("Illegal transition: {transition} while {state}")]
    IllegalTransition {
        state: &'static str,
        transition: &'static str,
    },

    // Weather errors
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("Payload parse failed: {0}")]
    PayloadParse(String),

    // Setup errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for kiosk operations
pub type KioskResult<T> = Result<T, KioskError>;
