//! Flight list query - conjunctive filters, ordering, and pagination
//!
//! Any populated field narrows the result set; all filters are ANDed, except
//! `search` which is ORed across flight_number/origin/destination internally.

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::FlightStatus;
use crate::error::DomainError;

use super::page::PageRequest;

/// Whitelisted sort keys for the flight list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightOrderKey {
    #[default]
    ScheduledTime,
    FlightNumber,
    Origin,
    Destination,
    Status,
}

impl FlightOrderKey {
    /// Column name the key maps to; whitelisting happens at parse time so this
    /// can be interpolated into SQL safely.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::ScheduledTime => "scheduled_time",
            Self::FlightNumber => "flight_number",
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::Status => "status",
        }
    }
}

/// Requested ordering: a whitelisted key plus direction.
///
/// Parsed from the DRF-style `ordering` parameter where a leading `-` means
/// descending, e.g. `-scheduled_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightOrdering {
    pub key: FlightOrderKey,
    pub descending: bool,
}

impl Default for FlightOrdering {
    /// Most recent scheduled flight first
    fn default() -> Self {
        Self {
            key: FlightOrderKey::ScheduledTime,
            descending: true,
        }
    }
}

impl std::str::FromStr for FlightOrdering {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (descending, key) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let key = match key {
            "scheduled_time" => FlightOrderKey::ScheduledTime,
            "flight_number" => FlightOrderKey::FlightNumber,
            "origin" => FlightOrderKey::Origin,
            "destination" => FlightOrderKey::Destination,
            "status" => FlightOrderKey::Status,
            other => return Err(DomainError::InvalidOrdering(other.to_string())),
        };

        Ok(Self { key, descending })
    }
}

/// Fully parsed flight list query
#[derive(Debug, Clone, Default)]
pub struct FlightQuery {
    /// Case-insensitive substring match
    pub flight_number: Option<String>,
    /// Case-insensitive substring match
    pub origin: Option<String>,
    /// Case-insensitive substring match
    pub destination: Option<String>,
    /// Set membership; empty means no status filter
    pub statuses: Vec<FlightStatus>,
    /// Inclusive lower bound on scheduled_time
    pub scheduled_after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on scheduled_time
    pub scheduled_before: Option<DateTime<Utc>>,
    /// Exact calendar-date match on scheduled_time
    pub scheduled_date: Option<NaiveDate>,
    /// Free-text search across flight_number/origin/destination
    pub search: Option<String>,
    pub ordering: Option<FlightOrdering>,
    pub page: PageRequest,
}

impl FlightQuery {
    /// Effective ordering (default: scheduled_time descending)
    #[must_use]
    pub fn ordering(&self) -> FlightOrdering {
        self.ordering.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_parse_ascending() {
        let ordering: FlightOrdering = "origin".parse().unwrap();
        assert_eq!(ordering.key, FlightOrderKey::Origin);
        assert!(!ordering.descending);
    }

    #[test]
    fn test_ordering_parse_descending() {
        let ordering: FlightOrdering = "-scheduled_time".parse().unwrap();
        assert_eq!(ordering.key, FlightOrderKey::ScheduledTime);
        assert!(ordering.descending);
    }

    #[test]
    fn test_ordering_rejects_unknown_key() {
        assert!("id; DROP TABLE flights".parse::<FlightOrdering>().is_err());
        assert!("gate".parse::<FlightOrdering>().is_err());
    }

    #[test]
    fn test_default_ordering_is_scheduled_time_desc() {
        let query = FlightQuery::default();
        let ordering = query.ordering();
        assert_eq!(ordering.key, FlightOrderKey::ScheduledTime);
        assert!(ordering.descending);
    }
}
