//! # flightops-core
//!
//! Domain layer containing entities, value objects, list queries, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod queries;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{CrewMember, CrewRole, Flight, FlightStatus, Profile, User, UserRole};
pub use error::DomainError;
pub use queries::{
    CrewQuery, FlightOrderKey, FlightOrdering, FlightQuery, Page, PageRequest, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use traits::{CrewRepository, FlightRepository, RepoResult, UserRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
