//! Vehicle identities and crossing events.

use chrono::{DateTime, Utc};

use crate::{Colour, VehicleType};

/// Which stream an event belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Incoming, Direction::Outgoing];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Incoming => "incoming",
            Direction::Outgoing => "outgoing",
        }
    }

    /// Relational table receiving this stream.
    pub fn table_name(self) -> &'static str {
        match self {
            Direction::Incoming => "vehicles_incoming",
            Direction::Outgoing => "vehicles_outgoing",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration data of one vehicle.
///
/// Standout-cohort members keep one identity for the whole run; baseline rows
/// get a fresh identity each.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct VehicleIdentity {
    /// Two-letter code at generation time, one letter after boundary encoding.
    pub country:      &'static str,
    /// `<country>-<2 letters><4 digits>`, e.g. `DE-AB0042`.
    pub plate:        String,
    pub vehicle_type: VehicleType,
    pub colour:       Colour,
    pub brand:        &'static str,
}

/// One detected crossing.  Column order matches the sink schema.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CrossingEvent {
    pub ts:       DateTime<Utc>,
    pub identity: VehicleIdentity,
    pub location: &'static str,
}

/// Column names written by every sink, in order.
pub const EVENT_COLUMNS: [&str; 7] = [
    "ts",
    "country_of_registration",
    "license_plate",
    "vehicle_type",
    "colour",
    "brand",
    "location_of_crossing",
];
