//! Kiosk Time - everything the dashboard derives from the wall clock
//!
//! This crate implements:
//! - Wall-clock sources (system, manual)
//! - Display formatters (zero padding, digital time, localized dates)
//! - Analog hand angles
//! - Monday-first month grid
//! - Fixed-offset world clocks

pub mod clock;
pub mod format;
pub mod analog;
pub mod calendar;
pub mod world;

pub use clock::*;
pub use format::*;
pub use analog::*;
pub use calendar::*;
pub use world::*;
