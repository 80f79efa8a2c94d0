//! Flight entity - a scheduled trip record with a status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Lifecycle status of a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    #[default]
    Planned,
    Delayed,
    Departed,
    Landed,
}

impl FlightStatus {
    /// All known statuses, in lifecycle order
    pub const ALL: [FlightStatus; 4] = [
        Self::Planned,
        Self::Delayed,
        Self::Departed,
        Self::Landed,
    ];

    /// Wire representation used in query parameters and storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Delayed => "delayed",
            Self::Departed => "departed",
            Self::Landed => "landed",
        }
    }
}

impl std::str::FromStr for FlightStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "delayed" => Ok(Self::Delayed),
            "departed" => Ok(Self::Departed),
            "landed" => Ok(Self::Landed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: Snowflake,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub scheduled_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub airline: String,
    pub gate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flight {
    /// Create a new Flight with required fields; airline defaults to "Unknown"
    pub fn new(
        id: Snowflake,
        flight_number: String,
        origin: String,
        destination: String,
        scheduled_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            flight_number,
            origin,
            destination,
            scheduled_time,
            status: FlightStatus::Planned,
            airline: "Unknown".to_string(),
            gate: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether persisting `new_status` over the current one must fire a
    /// delay notification: only a transition into `delayed` from any other
    /// status qualifies.
    #[must_use]
    pub fn becomes_delayed(&self, new_status: FlightStatus) -> bool {
        self.status != FlightStatus::Delayed && new_status == FlightStatus::Delayed
    }

    pub fn route(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_flight(status: FlightStatus) -> Flight {
        let mut flight = Flight::new(
            Snowflake::new(1),
            "TK1234".to_string(),
            "Ankara".to_string(),
            "Berlin".to_string(),
            Utc::now(),
        );
        flight.status = status;
        flight
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("planned".parse::<FlightStatus>().unwrap(), FlightStatus::Planned);
        assert_eq!("delayed".parse::<FlightStatus>().unwrap(), FlightStatus::Delayed);
        assert!("cancelled".parse::<FlightStatus>().is_err());
        assert!("PLANNED".parse::<FlightStatus>().is_err());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in FlightStatus::ALL {
            assert_eq!(status.as_str().parse::<FlightStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_defaults() {
        let flight = test_flight(FlightStatus::Planned);
        assert_eq!(flight.airline, "Unknown");
        assert_eq!(flight.gate, None);
        assert_eq!(flight.status, FlightStatus::Planned);
    }

    #[test]
    fn test_becomes_delayed_from_planned() {
        let flight = test_flight(FlightStatus::Planned);
        assert!(flight.becomes_delayed(FlightStatus::Delayed));
    }

    #[test]
    fn test_becomes_delayed_not_for_other_targets() {
        let flight = test_flight(FlightStatus::Planned);
        assert!(!flight.becomes_delayed(FlightStatus::Departed));
        assert!(!flight.becomes_delayed(FlightStatus::Landed));
        assert!(!flight.becomes_delayed(FlightStatus::Planned));
    }

    #[test]
    fn test_delayed_to_delayed_does_not_refire() {
        let flight = test_flight(FlightStatus::Delayed);
        assert!(!flight.becomes_delayed(FlightStatus::Delayed));
    }

    #[test]
    fn test_delayed_to_departed_does_not_fire() {
        let flight = test_flight(FlightStatus::Delayed);
        assert!(!flight.becomes_delayed(FlightStatus::Departed));
    }
}
