//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Enum-valued fields arrive as strings and are parsed by the
//! services, so unknown values map to 400 with the offending value named.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Account role; defaults to `viewer`
    pub role: Option<String>,

    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    #[serde(default)]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Token obtain request (username + password)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

// ============================================================================
// Flight Requests
// ============================================================================

/// Create flight request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFlightRequest {
    #[validate(length(min = 1, max = 10, message = "Flight number must be 1-10 characters"))]
    pub flight_number: String,

    #[validate(length(min = 1, max = 100, message = "Origin must be 1-100 characters"))]
    pub origin: String,

    #[validate(length(min = 1, max = 100, message = "Destination must be 1-100 characters"))]
    pub destination: String,

    pub scheduled_time: DateTime<Utc>,

    /// Lifecycle status; defaults to `planned`
    pub status: Option<String>,

    /// Operating airline; defaults to `"Unknown"`
    #[validate(length(max = 100, message = "Airline must be at most 100 characters"))]
    pub airline: Option<String>,

    #[validate(length(max = 10, message = "Gate must be at most 10 characters"))]
    pub gate: Option<String>,
}

/// Update flight request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFlightRequest {
    #[validate(length(min = 1, max = 10, message = "Flight number must be 1-10 characters"))]
    pub flight_number: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Origin must be 1-100 characters"))]
    pub origin: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Destination must be 1-100 characters"))]
    pub destination: Option<String>,

    pub scheduled_time: Option<DateTime<Utc>>,

    pub status: Option<String>,

    #[validate(length(max = 100, message = "Airline must be at most 100 characters"))]
    pub airline: Option<String>,

    /// Double-option so `"gate": null` clears the gate while an absent field
    /// leaves it alone
    #[serde(default, deserialize_with = "double_option")]
    pub gate: Option<Option<String>>,
}

/// Distinguish an absent field (outer `None`) from an explicit JSON null
/// (inner `None`)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

// ============================================================================
// Crew Requests
// ============================================================================

/// Create crew member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCrewMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub role: String,

    /// Flight the member is assigned to (Snowflake ID as string)
    pub assigned_flight: String,
}

/// Update crew member request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCrewMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub role: Option<String>,

    pub assigned_flight: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update user request; the profile is never touched through this path
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub role: Option<String>,

    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: Option<String>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            username: "a".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            role: None,
            first_name: None,
            last_name: None,
        };
        assert!(request.validate().is_err());

        let request = RegisterRequest {
            username: "operator".to_string(),
            email: "ops@example.com".to_string(),
            password: "long-enough-secret".to_string(),
            role: Some("staff".to_string()),
            first_name: None,
            last_name: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_flight_gate_field_modes() {
        // Absent field: gate untouched
        let request: UpdateFlightRequest = serde_json::from_str(r#"{"status":"delayed"}"#).unwrap();
        assert_eq!(request.gate, None);

        // Explicit null: gate cleared
        let request: UpdateFlightRequest = serde_json::from_str(r#"{"gate":null}"#).unwrap();
        assert_eq!(request.gate, Some(None));

        // Value: gate replaced
        let request: UpdateFlightRequest = serde_json::from_str(r#"{"gate":"B7"}"#).unwrap();
        assert_eq!(request.gate, Some(Some("B7".to_string())));
    }
}
