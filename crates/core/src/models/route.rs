use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{Transport, TransportInfo};

const CLOCK_FORMAT: &str = "%H:%M";

/// Vehicle serving a scheduled route with a fixed ticket price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTransport {
    /// Base identifying data.
    pub transport: TransportInfo,
    /// Route the vehicle runs on.
    pub route_number: String,
    /// Whether a conductor is on board.
    pub has_conductor: bool,
    /// Start of service, conventionally `HH:MM`. Stored as given.
    pub start_time: String,
    /// End of service, conventionally `HH:MM`. Stored as given.
    pub end_time: String,
    /// Price of one ticket.
    pub ticket_price: f64,
}

impl RouteTransport {
    /// Build a route vehicle on top of its base record.
    pub fn new(
        transport: TransportInfo,
        route_number: impl Into<String>,
        has_conductor: bool,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        ticket_price: f64,
    ) -> Self {
        Self {
            transport,
            route_number: route_number.into(),
            has_conductor,
            start_time: start_time.into(),
            end_time: end_time.into(),
            ticket_price,
        }
    }

    /// Route and base fields in `name=value` form, without the enclosing type name.
    pub fn repr_fields(&self) -> String {
        format!(
            "{}, route_number={:?}, has_conductor={}, start_time={:?}, end_time={:?}, ticket_price={:?}",
            self.transport.repr_fields(),
            self.route_number,
            self.has_conductor,
            self.start_time,
            self.end_time,
            self.ticket_price
        )
    }

    /// Parsed start and end of service, or `None` if either is not `HH:MM`.
    pub fn service_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = NaiveTime::parse_from_str(self.start_time.trim(), CLOCK_FORMAT).ok()?;
        let end = NaiveTime::parse_from_str(self.end_time.trim(), CLOCK_FORMAT).ok()?;
        Some((start, end))
    }

    /// Whether the route is in service at `time`, both ends inclusive.
    ///
    /// A window whose end precedes its start runs past midnight. Equal start
    /// and end mean round-the-clock service. Returns `None` when the stored
    /// times do not parse.
    pub fn operates_at(&self, time: NaiveTime) -> Option<bool> {
        let (start, end) = self.service_window()?;
        let running = if start == end {
            true
        } else if start < end {
            start <= time && time <= end
        } else {
            time >= start || time <= end
        };
        Some(running)
    }
}

impl Transport for RouteTransport {
    fn info(&self) -> &TransportInfo {
        &self.transport
    }

    fn fare(&self) -> f64 {
        self.ticket_price
    }

    fn repr(&self) -> String {
        format!("RouteTransport({})", self.repr_fields())
    }
}

impl fmt::Display for RouteTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, route number: {}, has conductor: {}, start time: {}, end time: {}, ticket price: {:?}",
            self.transport,
            self.route_number,
            self.has_conductor,
            self.start_time,
            self.end_time,
            self.ticket_price
        )
    }
}
