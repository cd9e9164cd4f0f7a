//! Concrete vehicle types and the closed [`Vehicle`] set over them.

mod bus;
mod ebus;
mod tram;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{RouteTransport, Transport, TransportInfo};

pub use bus::Bus;
pub use ebus::EBus;
pub use tram::Tram;

/// Any vehicle the fleet can hold.
///
/// Serialised with a `kind` tag of `bus`, `tram` or `ebus`. Deserialising
/// goes through the validated constructors, so out-of-range fuel or charge
/// values are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Vehicle {
    /// Diesel bus.
    Bus(Bus),
    /// Tram on the overhead line.
    Tram(Tram),
    /// Battery-electric bus.
    EBus(EBus),
}

impl Vehicle {
    /// Short lowercase name of the variant, matching the serialised tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Vehicle::Bus(_) => "bus",
            Vehicle::Tram(_) => "tram",
            Vehicle::EBus(_) => "ebus",
        }
    }

    /// Route and base data shared by all variants.
    pub fn route(&self) -> &RouteTransport {
        match self {
            Vehicle::Bus(bus) => &bus.route,
            Vehicle::Tram(tram) => &tram.route,
            Vehicle::EBus(ebus) => &ebus.route,
        }
    }

    /// Mutable access to the unvalidated route and base fields.
    pub fn route_mut(&mut self) -> &mut RouteTransport {
        match self {
            Vehicle::Bus(bus) => &mut bus.route,
            Vehicle::Tram(tram) => &mut tram.route,
            Vehicle::EBus(ebus) => &mut ebus.route,
        }
    }

    fn as_transport(&self) -> &dyn Transport {
        match self {
            Vehicle::Bus(bus) => bus,
            Vehicle::Tram(tram) => tram,
            Vehicle::EBus(ebus) => ebus,
        }
    }
}

impl Transport for Vehicle {
    fn info(&self) -> &TransportInfo {
        self.as_transport().info()
    }

    fn fare(&self) -> f64 {
        self.as_transport().fare()
    }

    fn repr(&self) -> String {
        self.as_transport().repr()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_transport(), f)
    }
}

impl From<Bus> for Vehicle {
    fn from(bus: Bus) -> Self {
        Vehicle::Bus(bus)
    }
}

impl From<Tram> for Vehicle {
    fn from(tram: Tram) -> Self {
        Vehicle::Tram(tram)
    }
}

impl From<EBus> for Vehicle {
    fn from(ebus: EBus) -> Self {
        Vehicle::EBus(ebus)
    }
}
