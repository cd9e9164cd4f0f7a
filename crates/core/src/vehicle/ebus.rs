use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{FleetError, Result},
    models::{RouteTransport, Transport, TransportInfo},
};

const FULL_CHARGE: f64 = 100.0;

/// Battery-electric bus that recharges from the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EBusRecord")]
pub struct EBus {
    /// Route and base data.
    pub route: RouteTransport,
    /// Whether the bus is connected to the grid (charging).
    pub contact_with_power_grid: bool,
    battery_charge_remainder: f64,
}

#[derive(Deserialize)]
struct EBusRecord {
    route: RouteTransport,
    contact_with_power_grid: bool,
    battery_charge_remainder: f64,
}

impl TryFrom<EBusRecord> for EBus {
    type Error = FleetError;

    fn try_from(record: EBusRecord) -> Result<Self> {
        EBus::new(
            record.route,
            record.contact_with_power_grid,
            record.battery_charge_remainder,
        )
    }
}

impl EBus {
    /// Kilometres covered on a full battery.
    pub const MAX_BATTERY_RANGE_KM: f64 = 30.0;

    /// Build an e-bus, rejecting a charge outside `0..=100` percent.
    pub fn new(
        route: RouteTransport,
        contact_with_power_grid: bool,
        battery_charge_remainder: f64,
    ) -> Result<Self> {
        Ok(Self {
            route,
            contact_with_power_grid,
            battery_charge_remainder: check_charge(battery_charge_remainder)?,
        })
    }

    /// Battery charge in percent.
    pub fn battery_charge_remainder(&self) -> f64 {
        self.battery_charge_remainder
    }

    /// Update the charge level. On error the previous level is kept.
    pub fn set_battery_charge_remainder(&mut self, value: f64) -> Result<()> {
        self.battery_charge_remainder = check_charge(value)?;
        Ok(())
    }

    /// Kilometres left on the battery.
    ///
    /// Zero while connected to the grid: the bus is charging, not running on
    /// the battery.
    pub fn calculate_remaining_battery_range(&self) -> f64 {
        if self.contact_with_power_grid {
            return 0.0;
        }
        (self.battery_charge_remainder / FULL_CHARGE) * Self::MAX_BATTERY_RANGE_KM
    }
}

fn check_charge(value: f64) -> Result<f64> {
    if (0.0..=FULL_CHARGE).contains(&value) {
        Ok(value)
    } else {
        Err(FleetError::BatteryChargeOutOfRange { value })
    }
}

impl Transport for EBus {
    fn info(&self) -> &TransportInfo {
        &self.route.transport
    }

    fn fare(&self) -> f64 {
        self.route.fare()
    }

    fn repr(&self) -> String {
        format!(
            "EBus({}, contact_with_power_grid={}, battery_charge_remainder={:?})",
            self.route.repr_fields(),
            self.contact_with_power_grid,
            self.battery_charge_remainder
        )
    }
}

impl fmt::Display for EBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, contact with power grid: {}, battery charge remainder: {:?}",
            self.route, self.contact_with_power_grid, self.battery_charge_remainder
        )
    }
}
