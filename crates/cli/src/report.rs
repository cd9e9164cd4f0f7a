//! Text rendering of vehicles for the terminal.

use fleet_core::{Bus, Transport, Vehicle};
use tracing::warn;

fn label(vehicle: &Vehicle) -> &'static str {
    match vehicle {
        Vehicle::Bus(_) => "Bus",
        Vehicle::Tram(_) => "Tram",
        Vehicle::EBus(_) => "EBus",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Description, reconstructable form, fare and the kind-specific figure.
pub fn describe(vehicle: &Vehicle, currency: &str) -> Vec<String> {
    let mut lines = vec![
        vehicle.to_string(),
        vehicle.repr(),
        format!("{} fare: {:.2} {currency}", label(vehicle), vehicle.fare()),
    ];

    lines.push(match vehicle {
        Vehicle::Bus(bus) => format!(
            "Distance until refueling: {:.2} km",
            bus.calculate_distance_until_refueling()
        ),
        Vehicle::Tram(tram) => format!(
            "Is there an emergency stop? {}",
            yes_no(tram.is_emergency_stop())
        ),
        Vehicle::EBus(ebus) => format!(
            "Remaining battery range: {:.2} km",
            ebus.calculate_remaining_battery_range()
        ),
    });

    if let Some((start, end)) = vehicle.route().service_window() {
        lines.push(format!(
            "Service hours: {}-{}",
            start.format("%H:%M"),
            end.format("%H:%M")
        ));
    }
    lines
}

/// Push every vehicle against its limits: overfill buses and e-buses (the
/// writes are rejected) and cut trams off the grid.
pub fn exercise_limits<'a>(vehicles: impl IntoIterator<Item = &'a mut Vehicle>) -> Vec<String> {
    let mut lines = Vec::new();
    for vehicle in vehicles {
        let fleet_number = vehicle.info().fleet_number.clone();
        match vehicle {
            Vehicle::Bus(bus) => {
                let attempt = Bus::FUEL_CAPACITY + 50.0;
                if let Err(err) = bus.set_fuel_remainder(attempt) {
                    warn!(%fleet_number, "{err}");
                    lines.push(format!(
                        "{fleet_number}: {err}; fuel remainder stays {:?} l",
                        bus.fuel_remainder()
                    ));
                }
            }
            Vehicle::Tram(tram) => {
                tram.contact_with_power_grid = false;
                lines.push(format!(
                    "{fleet_number}: emergency stop now? {}",
                    yes_no(tram.is_emergency_stop())
                ));
            }
            Vehicle::EBus(ebus) => {
                if let Err(err) = ebus.set_battery_charge_remainder(110.0) {
                    warn!(%fleet_number, "{err}");
                    lines.push(format!(
                        "{fleet_number}: {err}; battery charge stays {:?}%",
                        ebus.battery_charge_remainder()
                    ));
                }
            }
        }
    }
    lines
}
