//! Crew member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for crew_members table
#[derive(Debug, Clone, FromRow)]
pub struct CrewMemberModel {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub assigned_flight: i64,
    pub created_at: DateTime<Utc>,
}
