//! Flight entity <-> model mapper

use flightops_core::entities::{Flight, FlightStatus};
use flightops_core::value_objects::Snowflake;

use crate::models::FlightModel;

/// Convert FlightModel to Flight entity
impl From<FlightModel> for Flight {
    fn from(model: FlightModel) -> Self {
        Flight {
            id: Snowflake::new(model.id),
            flight_number: model.flight_number,
            origin: model.origin,
            destination: model.destination,
            scheduled_time: model.scheduled_time,
            // Stored values are constrained at write time
            status: model.status.parse().unwrap_or(FlightStatus::Planned),
            airline: model.airline,
            gate: model.gate,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Flight entity reference to values for database insertion/update
pub struct FlightInsert<'a> {
    pub id: i64,
    pub flight_number: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub scheduled_time: chrono::DateTime<chrono::Utc>,
    pub status: &'static str,
    pub airline: &'a str,
    pub gate: Option<&'a str>,
}

impl<'a> FlightInsert<'a> {
    pub fn new(flight: &'a Flight) -> Self {
        Self {
            id: flight.id.into_inner(),
            flight_number: &flight.flight_number,
            origin: &flight.origin,
            destination: &flight.destination,
            scheduled_time: flight.scheduled_time,
            status: flight.status.as_str(),
            airline: &flight.airline,
            gate: flight.gate.as_deref(),
        }
    }
}
