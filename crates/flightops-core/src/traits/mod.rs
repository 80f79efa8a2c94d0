//! Repository traits

mod repositories;

pub use repositories::{CrewRepository, FlightRepository, RepoResult, UserRepository};
