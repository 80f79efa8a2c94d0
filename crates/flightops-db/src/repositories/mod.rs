//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! flightops-core. Each repository handles database operations for a specific
//! domain entity.

mod crew;
mod error;
mod flight;
mod user;

pub use crew::PgCrewRepository;
pub use flight::PgFlightRepository;
pub use user::PgUserRepository;
