//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod crew;
pub mod flights;
pub mod health;
pub mod users;
