//! Kiosk Test Harness - deterministic dashboard simulation
//!
//! This crate provides:
//! - A virtual-time simulation of the whole dashboard
//! - A scripted weather transport
//! - Seeded gesture chaos with invariant checks
//! - End-to-end scenarios

pub mod transport;
pub mod simulator;
pub mod chaos;

#[cfg(test)]
mod scenarios;

pub use transport::*;
pub use simulator::*;
pub use chaos::*;
