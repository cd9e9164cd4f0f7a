//! Shared domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

mod route;

pub use route::RouteTransport;

/// Capability shared by every vehicle in the fleet.
///
/// `Display` yields the human-readable description; [`Transport::repr`]
/// yields a description listing every field in `name=value` form.
pub trait Transport: fmt::Display {
    /// Identifying and capacity data common to all vehicles.
    fn info(&self) -> &TransportInfo;

    /// Price of a single ride.
    fn fare(&self) -> f64;

    /// Reconstructable description, e.g. `Bus(service_org_code="AP-3", ...)`.
    fn repr(&self) -> String;
}

/// Current geographic position of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Build a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.latitude, self.longitude)
    }
}

/// Identifying and capacity data carried by every vehicle.
///
/// None of these fields are validated: a zero capacity or out-of-range
/// coordinates are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportInfo {
    /// Code of the organisation operating the vehicle.
    pub service_org_code: String,
    /// Identifier of the vehicle within the operator's fleet.
    pub fleet_number: String,
    /// Maximum number of passengers allowed on board.
    pub max_passenger_capacity: u32,
    /// Current position.
    pub coordinates: Coordinates,
}

impl TransportInfo {
    /// Build the base record.
    pub fn new(
        service_org_code: impl Into<String>,
        fleet_number: impl Into<String>,
        max_passenger_capacity: u32,
        coordinates: impl Into<Coordinates>,
    ) -> Self {
        Self {
            service_org_code: service_org_code.into(),
            fleet_number: fleet_number.into(),
            max_passenger_capacity,
            coordinates: coordinates.into(),
        }
    }

    /// Base fields in `name=value` form, without the enclosing type name.
    pub fn repr_fields(&self) -> String {
        format!(
            "service_org_code={:?}, fleet_number={:?}, max_passenger_capacity={}, coordinates={}",
            self.service_org_code, self.fleet_number, self.max_passenger_capacity, self.coordinates
        )
    }
}

impl fmt::Display for TransportInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transport: service organization code: {}, fleet number: {}, \
             max passenger capacity: {}, coordinates: {}",
            self.service_org_code, self.fleet_number, self.max_passenger_capacity, self.coordinates
        )
    }
}
