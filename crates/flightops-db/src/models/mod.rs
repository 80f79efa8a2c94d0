//! Database models - SQLx-compatible structs for PostgreSQL tables

mod crew_member;
mod flight;
mod user;

pub use crew_member::CrewMemberModel;
pub use flight::FlightModel;
pub use user::{ProfileModel, UserModel, UserWithProfileModel};
