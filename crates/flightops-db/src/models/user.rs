//! User and profile database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub bio: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Joined row: a user together with their profile
#[derive(Debug, Clone, FromRow)]
pub struct UserWithProfileModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub profile_id: i64,
    pub bio: String,
    pub is_verified: bool,
    pub profile_created_at: DateTime<Utc>,
}
