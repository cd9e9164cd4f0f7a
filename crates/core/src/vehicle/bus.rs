use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{FleetError, Result},
    models::{RouteTransport, Transport, TransportInfo},
};

/// Diesel bus with a fuel tank of fixed size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BusRecord")]
pub struct Bus {
    /// Route and base data.
    pub route: RouteTransport,
    fuel_remainder: f64,
}

#[derive(Deserialize)]
struct BusRecord {
    route: RouteTransport,
    fuel_remainder: f64,
}

impl TryFrom<BusRecord> for Bus {
    type Error = FleetError;

    fn try_from(record: BusRecord) -> Result<Self> {
        Bus::new(record.route, record.fuel_remainder)
    }
}

impl Bus {
    /// Tank volume in litres.
    pub const FUEL_CAPACITY: f64 = 200.0;
    /// Consumption in litres per 100 km.
    pub const FUEL_CONSUMPTION_RATE: f64 = 25.0;

    /// Build a bus, rejecting a fuel remainder outside the tank range.
    pub fn new(route: RouteTransport, fuel_remainder: f64) -> Result<Self> {
        Ok(Self {
            route,
            fuel_remainder: check_fuel(fuel_remainder)?,
        })
    }

    /// Litres currently in the tank.
    pub fn fuel_remainder(&self) -> f64 {
        self.fuel_remainder
    }

    /// Update the fuel level. On error the previous level is kept.
    pub fn set_fuel_remainder(&mut self, value: f64) -> Result<()> {
        self.fuel_remainder = check_fuel(value)?;
        Ok(())
    }

    /// Kilometres the bus can cover before it needs refuelling.
    pub fn calculate_distance_until_refueling(&self) -> f64 {
        (self.fuel_remainder / Self::FUEL_CONSUMPTION_RATE) * 100.0
    }
}

fn check_fuel(value: f64) -> Result<f64> {
    // NaN fails `contains` as well
    if (0.0..=Bus::FUEL_CAPACITY).contains(&value) {
        Ok(value)
    } else {
        Err(FleetError::FuelOutOfRange {
            value,
            capacity: Bus::FUEL_CAPACITY,
        })
    }
}

impl Transport for Bus {
    fn info(&self) -> &TransportInfo {
        &self.route.transport
    }

    fn fare(&self) -> f64 {
        self.route.fare()
    }

    fn repr(&self) -> String {
        format!(
            "Bus({}, fuel_remainder={:?})",
            self.route.repr_fields(),
            self.fuel_remainder
        )
    }
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, fuel remainder: {:?}", self.route, self.fuel_remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> RouteTransport {
        RouteTransport::new(
            TransportInfo::new("АП-3", "318И", 50, (55.7558, 37.6173)),
            "А12",
            true,
            "05:00",
            "23:30",
            55.0,
        )
    }

    #[test]
    fn distance_scales_with_fuel() -> Result<()> {
        let bus = Bus::new(route(), 150.0)?;
        assert_eq!(bus.calculate_distance_until_refueling(), 600.0);

        let empty = Bus::new(route(), 0.0)?;
        assert_eq!(empty.calculate_distance_until_refueling(), 0.0);

        let full = Bus::new(route(), Bus::FUEL_CAPACITY)?;
        assert_eq!(full.calculate_distance_until_refueling(), 800.0);
        Ok(())
    }

    #[test]
    fn fare_and_fields_read_back() -> Result<()> {
        let bus = Bus::new(route(), 100.0)?;
        assert_eq!(bus.fare(), 55.0);
        assert_eq!(bus.fuel_remainder(), 100.0);
        assert_eq!(bus.info().service_org_code, "АП-3");
        assert_eq!(bus.info().fleet_number, "318И");
        assert_eq!(bus.info().max_passenger_capacity, 50);
        assert_eq!(bus.route.route_number, "А12");
        assert!(bus.route.has_conductor);
        assert_eq!(bus.route.start_time, "05:00");
        assert_eq!(bus.route.end_time, "23:30");
        Ok(())
    }

    #[test]
    fn out_of_range_write_keeps_previous_level() -> Result<()> {
        let mut bus = Bus::new(route(), 100.0)?;

        bus.set_fuel_remainder(200.0)?;
        assert_eq!(bus.fuel_remainder(), 200.0);

        for value in [250.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                bus.set_fuel_remainder(value),
                Err(FleetError::FuelOutOfRange { .. })
            ));
            assert_eq!(bus.fuel_remainder(), 200.0);
        }
        Ok(())
    }

    #[test]
    fn construction_rejects_out_of_range_fuel() {
        let err = Bus::new(route(), 250.0).unwrap_err();
        assert_eq!(
            err,
            FleetError::FuelOutOfRange {
                value: 250.0,
                capacity: 200.0
            }
        );
    }

    #[test]
    fn descriptions_end_with_fuel() -> Result<()> {
        let bus = Bus::new(route(), 100.0)?;
        assert!(bus.to_string().ends_with("ticket price: 55.0, fuel remainder: 100.0"));
        assert!(bus.repr().starts_with("Bus(service_org_code=\"АП-3\""));
        assert!(bus.repr().ends_with("ticket_price=55.0, fuel_remainder=100.0)"));
        Ok(())
    }
}
