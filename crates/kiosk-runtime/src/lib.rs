//! Kiosk Runtime - runs the dashboard
//!
//! This crate provides:
//! - Dashboard configuration
//! - Periodic renderers (clock, world clocks, calendar, weather)
//! - The dashboard dispatcher: timers and interactions in, surface writes out
//! - The tokio driver loop
//! - Logging setup

pub mod config;
pub mod render;
pub mod dashboard;
pub mod driver;
pub mod logging;

pub use config::*;
pub use render::*;
pub use dashboard::*;
pub use driver::*;
pub use logging::*;
