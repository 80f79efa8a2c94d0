//! Error handling utilities for repositories

use flightops_core::error::DomainError;
use flightops_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a user insert failure by constraint name: the users table carries two
/// unique constraints and the caller needs to know which one fired.
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_email_key") => DomainError::EmailAlreadyExists,
                _ => DomainError::UsernameTaken,
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation on the assigned flight
pub fn map_assigned_flight_violation(e: SqlxError, flight_id: Snowflake) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return DomainError::UnknownAssignedFlight(flight_id);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "flight not found" error
pub fn flight_not_found(id: Snowflake) -> DomainError {
    DomainError::FlightNotFound(id)
}

/// Create a "crew member not found" error
pub fn crew_member_not_found(id: Snowflake) -> DomainError {
    DomainError::CrewMemberNotFound(id)
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Escape LIKE metacharacters and wrap in wildcards for a case-insensitive
/// substring match.
pub fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
