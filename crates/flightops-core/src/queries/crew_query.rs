//! Crew list query - same shape as the flight query, without a cache layer

use crate::entities::CrewRole;
use crate::value_objects::Snowflake;

use super::page::PageRequest;

/// Fully parsed crew list query; filters are conjunctive
#[derive(Debug, Clone, Default)]
pub struct CrewQuery {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Set membership; empty means no role filter
    pub roles: Vec<CrewRole>,
    /// Exact match on the assigned flight
    pub assigned_flight: Option<Snowflake>,
    /// Free-text search across name/role
    pub search: Option<String>,
    pub page: PageRequest,
}
