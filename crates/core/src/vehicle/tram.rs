use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{RouteTransport, Transport, TransportInfo};

/// Tram drawing power from the overhead line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tram {
    /// Route and base data.
    pub route: RouteTransport,
    /// Whether the pantograph is in contact with the grid.
    pub contact_with_power_grid: bool,
}

impl Tram {
    /// Build a tram.
    pub fn new(route: RouteTransport, contact_with_power_grid: bool) -> Self {
        Self {
            route,
            contact_with_power_grid,
        }
    }

    /// A tram without grid contact has come to an emergency stop.
    pub fn is_emergency_stop(&self) -> bool {
        !self.contact_with_power_grid
    }
}

impl Transport for Tram {
    fn info(&self) -> &TransportInfo {
        &self.route.transport
    }

    fn fare(&self) -> f64 {
        self.route.fare()
    }

    fn repr(&self) -> String {
        format!(
            "Tram({}, contact_with_power_grid={})",
            self.route.repr_fields(),
            self.contact_with_power_grid
        )
    }
}

impl fmt::Display for Tram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, contact with power grid: {}",
            self.route, self.contact_with_power_grid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tram(contact: bool) -> Tram {
        Tram::new(
            RouteTransport::new(
                TransportInfo::new("ГорЭлектроТранс", "303-1", 100, (48.8566, 2.3522)),
                "Е15",
                true,
                "06:00",
                "22:00",
                35.0,
            ),
            contact,
        )
    }

    #[test]
    fn emergency_stop_follows_grid_contact() {
        let mut tram = tram(true);
        assert!(!tram.is_emergency_stop());

        tram.contact_with_power_grid = false;
        assert!(tram.is_emergency_stop());
    }

    #[test]
    fn fare_is_ticket_price() {
        assert_eq!(tram(true).fare(), 35.0);
    }

    #[test]
    fn repr_lists_contact_last() {
        let tram = tram(false);
        assert_eq!(
            tram.repr(),
            "Tram(service_org_code=\"ГорЭлектроТранс\", fleet_number=\"303-1\", \
             max_passenger_capacity=100, coordinates=(48.8566, 2.3522), route_number=\"Е15\", \
             has_conductor=true, start_time=\"06:00\", end_time=\"22:00\", ticket_price=35.0, \
             contact_with_power_grid=false)"
        );
        assert!(tram.to_string().ends_with("contact with power grid: false"));
    }
}
