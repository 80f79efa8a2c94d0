//! Flight handlers
//!
//! Flight CRUD plus the cached unfiltered listing.

use axum::{
    extract::{OriginalUri, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use flightops_core::queries::FlightQuery;
use flightops_core::Snowflake;
use flightops_service::dto::{CreateFlightRequest, FlightResponse, UpdateFlightRequest};
use flightops_service::FlightService;

use crate::extractors::{AuthUser, FlightListParams, ValidatedJson};
use crate::response::{paginated, ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List flights
///
/// GET /api/flights/
///
/// Without any query parameter the cached serialized array is returned as-is
/// (a bare JSON array). Any parameter bypasses the cache and answers the
/// paginated envelope.
pub async fn list_flights(
    State(state): State<AppState>,
    _auth: AuthUser,
    OriginalUri(uri): OriginalUri,
    params: FlightListParams,
) -> ApiResult<Response> {
    let service = FlightService::new(state.service_context());

    if params.is_unfiltered() {
        let payload = service.list_cached().await?;
        return Ok((
            [(header::CONTENT_TYPE, "application/json")],
            payload.get().to_owned(),
        )
            .into_response());
    }

    let query = FlightQuery::try_from(params)?;
    let page = query.page;
    let data = service.search(&query).await?;

    Ok(Json(paginated(&uri, page, data)).into_response())
}

/// Create a flight
///
/// POST /api/flights/
pub async fn create_flight(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFlightRequest>,
) -> ApiResult<Created<Json<FlightResponse>>> {
    let service = FlightService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Get a flight by ID
///
/// GET /api/flights/{flight_id}/
pub async fn get_flight(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(flight_id): Path<String>,
) -> ApiResult<Json<FlightResponse>> {
    let flight_id = parse_flight_id(&flight_id)?;

    let service = FlightService::new(state.service_context());
    let response = service.get(flight_id).await?;
    Ok(Json(response))
}

/// Partially update a flight
///
/// PUT/PATCH /api/flights/{flight_id}/
pub async fn update_flight(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(flight_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateFlightRequest>,
) -> ApiResult<Json<FlightResponse>> {
    let flight_id = parse_flight_id(&flight_id)?;

    let service = FlightService::new(state.service_context());
    let response = service.update(flight_id, request).await?;
    Ok(Json(response))
}

/// Delete a flight
///
/// DELETE /api/flights/{flight_id}/
pub async fn delete_flight(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(flight_id): Path<String>,
) -> ApiResult<NoContent> {
    let flight_id = parse_flight_id(&flight_id)?;

    let service = FlightService::new(state.service_context());
    service.delete(flight_id).await?;
    Ok(NoContent)
}

fn parse_flight_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid flight_id format"))
}
