//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Flight not found: {0}")]
    FlightNotFound(Snowflake),

    #[error("Crew member not found: {0}")]
    CrewMemberNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown status: {0}")]
    InvalidStatus(String),

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Unknown ordering key: {0}")]
    InvalidOrdering(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Flight number already in use: {0}")]
    DuplicateFlightNumber(String),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Assigned flight does not exist: {0}")]
    UnknownAssignedFlight(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::FlightNotFound(_) => "UNKNOWN_FLIGHT",
            Self::CrewMemberNotFound(_) => "UNKNOWN_CREW_MEMBER",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidOrdering(_) => "INVALID_ORDERING",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::DuplicateFlightNumber(_) => "DUPLICATE_FLIGHT_NUMBER",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UnknownAssignedFlight(_) => "UNKNOWN_ASSIGNED_FLIGHT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FlightNotFound(_) | Self::CrewMemberNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error (client-caused, reported as 400).
    ///
    /// Uniqueness violations are deliberately in this bucket: the store is the
    /// source of truth for conflicts and they surface as field-level
    /// validation failures, not 409s.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStatus(_)
                | Self::InvalidRole(_)
                | Self::InvalidOrdering(_)
                | Self::InvalidTimestamp(_)
                | Self::DuplicateFlightNumber(_)
                | Self::UsernameTaken
                | Self::EmailAlreadyExists
                | Self::UnknownAssignedFlight(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::FlightNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_FLIGHT");

        let err = DomainError::DuplicateFlightNumber("TK1234".to_string());
        assert_eq!(err.code(), "DUPLICATE_FLIGHT_NUMBER");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::FlightNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CrewMemberNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::InvalidStatus("x".to_string()).is_not_found());
    }

    #[test]
    fn test_uniqueness_is_validation_not_conflict() {
        assert!(DomainError::DuplicateFlightNumber("TK1".to_string()).is_validation());
        assert!(DomainError::UsernameTaken.is_validation());
        assert!(DomainError::EmailAlreadyExists.is_validation());
    }

    #[test]
    fn test_infrastructure_is_neither() {
        let err = DomainError::DatabaseError("boom".to_string());
        assert!(!err.is_not_found());
        assert!(!err.is_validation());
    }
}
