//! Entity to model mappers
//!
//! This module provides conversions between domain entities (flightops-core)
//! and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod crew_member;
mod flight;
mod user;

pub use crew_member::CrewMemberInsert;
pub use flight::FlightInsert;
pub use user::{user_with_profile, ProfileInsert, UserInsert, UserUpdate};
