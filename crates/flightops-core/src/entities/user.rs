//! User and Profile entities
//!
//! Every user owns exactly one profile, created in the same unit of work as
//! the user itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Coarse account role; currently informational only (authorization is
/// authenticated-or-not, all roles may perform all actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Viewer,
    Staff,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Viewer, Self::Staff, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Self::Viewer),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String, email: String, role: UserRole) -> Self {
        Self {
            id,
            username,
            email,
            role,
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
            date_joined: Utc::now(),
        }
    }
}

/// Per-user auxiliary record for bio/verification metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub bio: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Fresh profile for a newly created user: empty bio, unverified
    pub fn for_user(id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            bio: String::new(),
            is_verified: false,
            created_at: Utc::now(),
        }
    }
}
