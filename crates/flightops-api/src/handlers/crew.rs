//! Crew member handlers

use axum::{
    extract::{OriginalUri, Path, State},
    Json,
};
use flightops_core::queries::CrewQuery;
use flightops_core::Snowflake;
use flightops_service::dto::{
    CreateCrewMemberRequest, CrewMemberResponse, PaginatedResponse, UpdateCrewMemberRequest,
};
use flightops_service::CrewService;

use crate::extractors::{AuthUser, CrewListParams, ValidatedJson};
use crate::response::{paginated, ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List crew members
///
/// GET /api/crew/
pub async fn list_crew(
    State(state): State<AppState>,
    _auth: AuthUser,
    OriginalUri(uri): OriginalUri,
    params: CrewListParams,
) -> ApiResult<Json<PaginatedResponse<CrewMemberResponse>>> {
    let query = CrewQuery::try_from(params)?;
    let page = query.page;

    let service = CrewService::new(state.service_context());
    let data = service.search(&query).await?;

    Ok(Json(paginated(&uri, page, data)))
}

/// Create a crew member
///
/// POST /api/crew/
pub async fn create_crew_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCrewMemberRequest>,
) -> ApiResult<Created<Json<CrewMemberResponse>>> {
    let service = CrewService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Get a crew member by ID
///
/// GET /api/crew/{crew_id}/
pub async fn get_crew_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(crew_id): Path<String>,
) -> ApiResult<Json<CrewMemberResponse>> {
    let crew_id = parse_crew_id(&crew_id)?;

    let service = CrewService::new(state.service_context());
    let response = service.get(crew_id).await?;
    Ok(Json(response))
}

/// Partially update a crew member
///
/// PUT/PATCH /api/crew/{crew_id}/
pub async fn update_crew_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(crew_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCrewMemberRequest>,
) -> ApiResult<Json<CrewMemberResponse>> {
    let crew_id = parse_crew_id(&crew_id)?;

    let service = CrewService::new(state.service_context());
    let response = service.update(crew_id, request).await?;
    Ok(Json(response))
}

/// Delete a crew member
///
/// DELETE /api/crew/{crew_id}/
pub async fn delete_crew_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(crew_id): Path<String>,
) -> ApiResult<NoContent> {
    let crew_id = parse_crew_id(&crew_id)?;

    let service = CrewService::new(state.service_context());
    service.delete(crew_id).await?;
    Ok(NoContent)
}

fn parse_crew_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid crew_id format"))
}
