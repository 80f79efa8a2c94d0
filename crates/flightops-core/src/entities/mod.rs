//! Domain entities

mod crew_member;
mod flight;
mod user;

pub use crew_member::{CrewMember, CrewRole};
pub use flight::{Flight, FlightStatus};
pub use user::{Profile, User, UserRole};
