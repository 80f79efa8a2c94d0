//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and list query parsing.

mod auth;
mod list_params;
mod validated;

pub use auth::AuthUser;
pub use list_params::{CrewListParams, FlightListParams, PageParams};
pub use validated::ValidatedJson;
