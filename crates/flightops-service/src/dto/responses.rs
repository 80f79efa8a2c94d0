//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Common Response Types
// ============================================================================

/// Page-number pagination envelope: total match count plus links to the
/// adjacent pages (or null at either end)
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(
        results: Vec<T>,
        count: i64,
        next: Option<String>,
        previous: Option<String>,
    ) -> Self {
        Self {
            count,
            next,
            previous,
            results,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Token pair response for obtain and refresh
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(access: String, refresh: String, expires_in: i64) -> Self {
        Self {
            access,
            refresh,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

// ============================================================================
// Flight Responses
// ============================================================================

/// Flight response
///
/// `Deserialize` as well, so cached payloads and integration tests can read
/// it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightResponse {
    pub id: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub scheduled_time: DateTime<Utc>,
    pub status: String,
    pub airline: String,
    pub gate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Crew Responses
// ============================================================================

/// Crew member response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMemberResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub assigned_flight: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Embedded profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub bio: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// User response with embedded profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub profile: ProfileResponse,
}
