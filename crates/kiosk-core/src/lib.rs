//! Kiosk Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every dashboard crate:
//! - Monotonic time (MonoTime)
//! - The scheduling port and its timer queue
//! - Display surface identifiers, the surface-tree port and in-memory test surfaces
//! - Interaction events
//! - The workspace error type

pub mod time;
pub mod timer;
pub mod surface;
pub mod event;
pub mod error;

pub use time::*;
pub use timer::*;
pub use surface::*;
pub use event::*;
pub use error::*;
