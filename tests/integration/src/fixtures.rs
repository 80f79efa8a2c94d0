//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Token obtain request
#[derive(Debug, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl TokenRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Token pair response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response with embedded profile
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub profile: ProfileResponse,
}

/// Embedded profile
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub bio: String,
    pub is_verified: bool,
}

// ============================================================================
// Flights
// ============================================================================

/// Create flight request
#[derive(Debug, Clone, Serialize)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub scheduled_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
}

impl CreateFlightRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            // flight_number is capped at 10 characters
            flight_number: format!("FO{suffix:04}"),
            origin: "SFO".to_string(),
            destination: "JFK".to_string(),
            scheduled_time: "2026-09-01T10:00:00Z".to_string(),
            status: None,
            airline: None,
        }
    }
}

/// Flight response
#[derive(Debug, Deserialize)]
pub struct FlightResponse {
    pub id: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub airline: String,
    pub gate: Option<String>,
}

// ============================================================================
// Crew
// ============================================================================

/// Create crew member request
#[derive(Debug, Serialize)]
pub struct CreateCrewMemberRequest {
    pub name: String,
    pub role: String,
    pub assigned_flight: String,
}

impl CreateCrewMemberRequest {
    pub fn for_flight(flight_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Crew Member {suffix}"),
            role: "pilot".to_string(),
            assigned_flight: flight_id.to_string(),
        }
    }
}

/// Crew member response
#[derive(Debug, Deserialize)]
pub struct CrewMemberResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub assigned_flight: String,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Paginated list envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}
