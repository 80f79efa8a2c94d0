//! Authentication service
//!
//! Handles user registration, token obtain, and token refresh. Tokens are
//! stateless JWTs; nothing is stored server-side for a session.

use tracing::{info, instrument, warn};

use flightops_common::auth::{hash_password, validate_password_strength, verify_password};
use flightops_common::AppError;
use flightops_core::entities::{Profile, User, UserRole};

use crate::dto::mappers::user_response;
use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user; the profile is created in the same transaction
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let role = match request.role.as_deref() {
            Some(role) => role.parse::<UserRole>().map_err(ServiceError::from)?,
            None => UserRole::default(),
        };

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let mut user = User::new(user_id, request.username, request.email, role);
        user.first_name = request.first_name.unwrap_or_default();
        user.last_name = request.last_name.unwrap_or_default();

        let profile = Profile::for_user(self.ctx.generate_id(), user_id);

        // Duplicate username/email surfaces from the store as a validation
        // error (400).
        self.ctx
            .user_repo()
            .create_with_profile(&user, &profile, &password_hash)
            .await?;

        info!(user_id = %user_id, "User registered");

        Ok(user_response(&user, &profile))
    }

    /// Exchange username + password for a token pair
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Bad username and bad password both answer 401, never 404.
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        let pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
        ))
    }

    /// Exchange a valid refresh token for a fresh pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let pair = self
            .ctx
            .jwt_service()
            .refresh_tokens(&request.refresh)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
        ))
    }
}
