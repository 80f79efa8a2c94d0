//! User service
//!
//! Listing and maintenance of user accounts. User updates never touch the
//! profile row; the profile is created once with the user and stays 1:1.

use tracing::{info, instrument};

use flightops_core::entities::UserRole;
use flightops_core::queries::{Page, PageRequest};
use flightops_core::Snowflake;

use crate::dto::mappers::user_response;
use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Paginated listing of users with their profiles
    #[instrument(skip(self))]
    pub async fn list(&self, page: &PageRequest) -> ServiceResult<Page<UserResponse>> {
        let users = self.ctx.user_repo().list(page).await?;
        Ok(users.map(|(user, profile)| user_response(&user, &profile)))
    }

    /// Get a single user with profile
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<UserResponse> {
        let (user, profile) = self
            .ctx
            .user_repo()
            .find_with_profile(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        Ok(user_response(&user, &profile))
    }

    /// Partially update a user's account fields
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let (mut user, profile) = self
            .ctx
            .user_repo()
            .find_with_profile(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(role) = request.role.as_deref() {
            user.role = role.parse::<UserRole>().map_err(ServiceError::from)?;
        }
        if let Some(first_name) = request.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            user.last_name = last_name;
        }
        if let Some(is_active) = request.is_active {
            user.is_active = is_active;
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user.id, "User updated");

        Ok(user_response(&user, &profile))
    }
}
