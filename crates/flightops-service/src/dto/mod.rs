//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCrewMemberRequest, CreateFlightRequest, LoginRequest, RefreshTokenRequest,
    RegisterRequest, UpdateCrewMemberRequest, UpdateFlightRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CrewMemberResponse, FlightResponse, HealthResponse, PaginatedResponse,
    ProfileResponse, UserResponse,
};

// Re-export mapper helpers
pub use mappers::user_response;
