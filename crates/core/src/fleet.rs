//! Ordered collections of vehicles and their on-disk JSON form.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    models::{RouteTransport, Transport, TransportInfo},
    vehicle::{Bus, EBus, Tram, Vehicle},
};

/// Vehicles operated together, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Build a fleet from vehicles in the given order.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// One vehicle of each kind, as shown by the `fleet` binary when no
    /// fleet file is configured.
    pub fn demo() -> crate::Result<Self> {
        let bus = Bus::new(
            RouteTransport::new(
                TransportInfo::new("Автомобильный парк 3", "B1234", 60, (59.9386, 30.3141)),
                "А123",
                false,
                "06:00",
                "23:00",
                45.0,
            ),
            100.0,
        )?;
        let tram = Tram::new(
            RouteTransport::new(
                TransportInfo::new("CD456", "T5678", 100, (48.8566, 2.3522)),
                "3",
                true,
                "05:30",
                "01:00",
                2.25,
            ),
            true,
        );
        let ebus = EBus::new(
            RouteTransport::new(
                TransportInfo::new("EF789", "E9012", 50, (34.0522, -118.2437)),
                "E1",
                false,
                "04:00",
                "22:00",
                4.0,
            ),
            false,
            75.0,
        )?;
        Ok(Self::new(vec![bus.into(), tram.into(), ebus.into()]))
    }

    /// Load a fleet from a JSON document of the form `{"vehicles": [...]}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read fleet {}", path.display()))?;
        let fleet: Fleet = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse fleet {}", path.display()))?;
        info!("loaded {} vehicles from {}", fleet.len(), path.display());
        Ok(fleet)
    }

    /// Iterate over the vehicles in order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter()
    }

    /// Mutable iteration, for updating positions or levels in place.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> + '_ {
        self.vehicles.iter_mut()
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether the fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Find a vehicle by its fleet number.
    pub fn find(&self, fleet_number: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.info().fleet_number == fleet_number)
    }

    /// Sum of the maximum passenger capacities.
    pub fn total_passenger_capacity(&self) -> u64 {
        self.vehicles
            .iter()
            .map(|vehicle| u64::from(vehicle.info().max_passenger_capacity))
            .sum()
    }

    /// Trams that have lost contact with the grid.
    pub fn emergency_stops(&self) -> Vec<&Tram> {
        self.vehicles
            .iter()
            .filter_map(|vehicle| match vehicle {
                Vehicle::Tram(tram) if tram.is_emergency_stop() => Some(tram),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<Vehicle> for Fleet {
    fn from_iter<I: IntoIterator<Item = Vehicle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn demo_has_one_of_each_kind() -> Result<()> {
        let fleet = Fleet::demo()?;
        let kinds: Vec<&str> = fleet.iter().map(Vehicle::kind).collect();
        assert_eq!(kinds, vec!["bus", "tram", "ebus"]);
        assert_eq!(fleet.total_passenger_capacity(), 210);
        assert!(fleet.emergency_stops().is_empty());

        let bus = fleet.find("B1234").expect("demo bus");
        assert_eq!(bus.fare(), 45.0);
        match bus {
            Vehicle::Bus(bus) => assert_eq!(bus.calculate_distance_until_refueling(), 400.0),
            other => panic!("expected a bus, got {}", other.kind()),
        }
        Ok(())
    }

    #[test]
    fn emergency_stops_lists_trams_without_contact() -> Result<()> {
        let mut fleet = Fleet::demo()?;
        for vehicle in fleet.iter_mut() {
            if let Vehicle::Tram(tram) = vehicle {
                tram.contact_with_power_grid = false;
            }
        }
        let stopped = fleet.emergency_stops();
        assert_eq!(stopped.len(), 1);
        assert_eq!(stopped[0].route.transport.fleet_number, "T5678");
        Ok(())
    }

    #[test]
    fn load_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("fleet.json");
        let fleet = Fleet::demo()?;
        fs::write(&path, serde_json::to_vec_pretty(&fleet)?)?;

        let loaded = Fleet::load(&path)?;
        assert_eq!(loaded, fleet);
        assert_eq!(loaded.len(), 3);
        Ok(())
    }

    #[test]
    fn load_rejects_invalid_charge() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("fleet.json");
        let document = json!({
            "vehicles": [{
                "kind": "ebus",
                "route": {
                    "transport": {
                        "service_org_code": "EF789",
                        "fleet_number": "E9012",
                        "max_passenger_capacity": 50,
                        "coordinates": { "latitude": 34.0522, "longitude": -118.2437 }
                    },
                    "route_number": "E1",
                    "has_conductor": false,
                    "start_time": "04:00",
                    "end_time": "22:00",
                    "ticket_price": 4.0
                },
                "contact_with_power_grid": false,
                "battery_charge_remainder": 110.0
            }]
        });
        fs::write(&path, serde_json::to_vec(&document)?)?;

        let err = Fleet::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse fleet"));
        assert!(format!("{err:#}").contains("battery charge 110%"));
        Ok(())
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Fleet::load("/nonexistent/fleet.json").unwrap_err();
        assert!(err.to_string().contains("failed to read fleet"));
    }

    #[test]
    fn collects_from_vehicles() -> Result<()> {
        let fleet: Fleet = Fleet::demo()?
            .iter()
            .filter(|vehicle| vehicle.kind() != "tram")
            .cloned()
            .collect();
        assert_eq!(fleet.len(), 2);
        assert!(fleet.find("T5678").is_none());
        assert!(!fleet.is_empty());
        Ok(())
    }
}
