//! CrewMember entity - a person assigned to exactly one flight

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Role of a crew member on a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrewRole {
    Pilot,
    Copilot,
    Attendant,
}

impl CrewRole {
    pub const ALL: [CrewRole; 3] = [Self::Pilot, Self::Copilot, Self::Attendant];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pilot => "pilot",
            Self::Copilot => "copilot",
            Self::Attendant => "attendant",
        }
    }
}

impl std::str::FromStr for CrewRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pilot" => Ok(Self::Pilot),
            "copilot" => Ok(Self::Copilot),
            "attendant" => Ok(Self::Attendant),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for CrewRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crew member entity; cascade-deleted with its flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    pub id: Snowflake,
    pub name: String,
    pub role: CrewRole,
    pub assigned_flight: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl CrewMember {
    pub fn new(id: Snowflake, name: String, role: CrewRole, assigned_flight: Snowflake) -> Self {
        Self {
            id,
            name,
            role,
            assigned_flight,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("pilot".parse::<CrewRole>().unwrap(), CrewRole::Pilot);
        assert_eq!("copilot".parse::<CrewRole>().unwrap(), CrewRole::Copilot);
        assert_eq!("attendant".parse::<CrewRole>().unwrap(), CrewRole::Attendant);
        assert!("navigator".parse::<CrewRole>().is_err());
    }

    #[test]
    fn test_role_roundtrip() {
        for role in CrewRole::ALL {
            assert_eq!(role.as_str().parse::<CrewRole>().unwrap(), role);
        }
    }
}
