#![warn(clippy::all, missing_docs)]

//! Core domain logic for the fleet tools.
//!
//! This crate hosts the passenger-vehicle models (buses, trams and
//! e-buses on scheduled routes), fleet loading and the configuration
//! used by the `fleet` binary and any future frontends.

pub mod config;
pub mod error;
pub mod fleet;
pub mod models;
pub mod vehicle;

pub use config::AppConfig;
pub use error::{FleetError, Result};
pub use fleet::Fleet;
pub use models::{Coordinates, RouteTransport, Transport, TransportInfo};
pub use vehicle::{Bus, EBus, Tram, Vehicle};
