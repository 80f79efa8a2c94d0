//! Flight database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for flights table
#[derive(Debug, Clone, FromRow)]
pub struct FlightModel {
    pub id: i64,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub scheduled_time: DateTime<Utc>,
    pub status: String,
    pub airline: String,
    pub gate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
