//! Kiosk Weather - the dashboard's one outbound data source
//!
//! This crate implements:
//! - The forecast snapshot model (Open-Meteo JSON)
//! - WMO weather code icons and German descriptions
//! - The transport port and its reqwest implementation
//! - The secure-then-insecure fetch strategy
//! - Hourly and daily forecast alignment

pub mod model;
pub mod codes;
pub mod fetch;
pub mod http;
pub mod forecast;

pub use model::*;
pub use codes::*;
pub use fetch::*;
pub use http::*;
pub use forecast::*;
