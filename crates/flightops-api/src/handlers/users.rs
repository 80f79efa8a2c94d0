//! User handlers
//!
//! Listing and maintenance of user accounts with embedded profiles.

use axum::{
    extract::{OriginalUri, Path, State},
    Json,
};
use flightops_core::queries::PageRequest;
use flightops_core::Snowflake;
use flightops_service::dto::{PaginatedResponse, UpdateUserRequest, UserResponse};
use flightops_service::UserService;

use crate::extractors::{AuthUser, PageParams, ValidatedJson};
use crate::response::{paginated, ApiError, ApiResult};
use crate::state::AppState;

/// List users with their profiles
///
/// GET /api/users/
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    OriginalUri(uri): OriginalUri,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let page = PageRequest::try_from(params)?;

    let service = UserService::new(state.service_context());
    let data = service.list(&page).await?;

    Ok(Json(paginated(&uri, page, data)))
}

/// Get a user by ID
///
/// GET /api/users/{user_id}/
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.get(user_id).await?;
    Ok(Json(response))
}

/// Partially update a user's account fields
///
/// PATCH /api/users/{user_id}/
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.update(user_id, request).await?;
    Ok(Json(response))
}

fn parse_user_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
}
