//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use flightops_core::entities::{CrewMember, Flight, Profile, User};

use super::responses::{CrewMemberResponse, FlightResponse, ProfileResponse, UserResponse};

// ============================================================================
// Flight Mappers
// ============================================================================

impl From<&Flight> for FlightResponse {
    fn from(flight: &Flight) -> Self {
        Self {
            id: flight.id.to_string(),
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            scheduled_time: flight.scheduled_time,
            status: flight.status.as_str().to_string(),
            airline: flight.airline.clone(),
            gate: flight.gate.clone(),
            created_at: flight.created_at,
            updated_at: flight.updated_at,
        }
    }
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self::from(&flight)
    }
}

// ============================================================================
// Crew Mappers
// ============================================================================

impl From<&CrewMember> for CrewMemberResponse {
    fn from(member: &CrewMember) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name.clone(),
            role: member.role.as_str().to_string(),
            assigned_flight: member.assigned_flight.to_string(),
            created_at: member.created_at,
        }
    }
}

impl From<CrewMember> for CrewMemberResponse {
    fn from(member: CrewMember) -> Self {
        Self::from(&member)
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            bio: profile.bio.clone(),
            is_verified: profile.is_verified,
            created_at: profile.created_at,
        }
    }
}

/// Combine a user and their profile into one response
pub fn user_response(user: &User, profile: &Profile) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        is_active: user.is_active,
        date_joined: user.date_joined,
        profile: ProfileResponse::from(profile),
    }
}
