//! User/Profile entity <-> model mappers

use flightops_core::entities::{Profile, User, UserRole};
use flightops_core::value_objects::Snowflake;

use crate::models::{ProfileModel, UserModel, UserWithProfileModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            // Stored values are constrained at write time
            role: model.role.parse().unwrap_or(UserRole::Viewer),
            first_name: model.first_name,
            last_name: model.last_name,
            is_active: model.is_active,
            date_joined: model.date_joined,
        }
    }
}

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            bio: model.bio,
            is_verified: model.is_verified,
            created_at: model.created_at,
        }
    }
}

/// Split a joined user+profile row into the two entities
pub fn user_with_profile(model: UserWithProfileModel) -> (User, Profile) {
    let user = User {
        id: Snowflake::new(model.id),
        username: model.username,
        email: model.email,
        role: model.role.parse().unwrap_or(UserRole::Viewer),
        first_name: model.first_name,
        last_name: model.last_name,
        is_active: model.is_active,
        date_joined: model.date_joined,
    };
    let profile = Profile {
        id: Snowflake::new(model.profile_id),
        user_id: user.id,
        bio: model.bio,
        is_verified: model.is_verified,
        created_at: model.profile_created_at,
    };
    (user, profile)
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub username: &'a str,
    pub email: &'a str,
    pub role: &'static str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub is_active: bool,
    pub password_hash: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            email: &user.email,
            role: user.role.as_str(),
            first_name: &user.first_name,
            last_name: &user.last_name,
            is_active: user.is_active,
            password_hash,
        }
    }
}

/// Convert User entity reference to values for database update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub email: &'a str,
    pub role: &'static str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub is_active: bool,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            email: &user.email,
            role: user.role.as_str(),
            first_name: &user.first_name,
            last_name: &user.last_name,
            is_active: user.is_active,
        }
    }
}

/// Convert Profile entity reference to values for database insertion
pub struct ProfileInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub bio: &'a str,
    pub is_verified: bool,
}

impl<'a> ProfileInsert<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            id: profile.id.into_inner(),
            user_id: profile.user_id.into_inner(),
            bio: &profile.bio,
            is_verified: profile.is_verified,
        }
    }
}
