//! Kiosk Scroll - paged scroll surface control
//!
//! This crate implements:
//! - Quadratic ease-in-out interpolation
//! - Snap target planning with a dead zone
//! - The Idle/Animating state machine
//! - The snap controller (scroll-settle debounce, touch-end settle, frames)
//! - The idle monitor (return to the first page after a quiet period)

pub mod easing;
pub mod snap;
pub mod animation;
pub mod controller;
pub mod idle;

pub use easing::*;
pub use snap::*;
pub use animation::*;
pub use controller::*;
pub use idle::*;
