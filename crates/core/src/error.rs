//! Errors raised by validated vehicle fields.

use thiserror::Error;

/// Rejection of a write that would break a vehicle invariant.
///
/// The vehicle keeps its previous value when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    /// Fuel remainder outside `0..=capacity` litres.
    #[error("fuel remainder {value} l is outside the tank range 0..={capacity} l")]
    FuelOutOfRange {
        /// Rejected value.
        value: f64,
        /// Tank capacity of the vehicle.
        capacity: f64,
    },
    /// Battery charge outside `0..=100` percent.
    #[error("battery charge {value}% is outside the range 0..=100%")]
    BatteryChargeOutOfRange {
        /// Rejected value.
        value: f64,
    },
}

/// Convenience alias for results carrying a [`FleetError`].
pub type Result<T> = std::result::Result<T, FleetError>;
