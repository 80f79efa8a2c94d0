//! Route definitions
//!
//! All API routes organized by domain and mounted under /api. Paths keep
//! their trailing slashes to stay wire-compatible with existing clients.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, crew, flights, health, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check and service descriptor routes (exported separately to bypass
/// rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::service_descriptor))
        .route("/health/", get(health::health_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(flight_routes())
        .merge(crew_routes())
        .merge(user_routes())
}

/// Token routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token/", post(auth::obtain_token))
        .route("/token/refresh/", post(auth::refresh_token))
}

/// Flight routes
fn flight_routes() -> Router<AppState> {
    Router::new()
        .route("/flights/", get(flights::list_flights))
        .route("/flights/", post(flights::create_flight))
        .route("/flights/:flight_id/", get(flights::get_flight))
        .route("/flights/:flight_id/", put(flights::update_flight))
        .route("/flights/:flight_id/", patch(flights::update_flight))
        .route("/flights/:flight_id/", delete(flights::delete_flight))
}

/// Crew routes
fn crew_routes() -> Router<AppState> {
    Router::new()
        .route("/crew/", get(crew::list_crew))
        .route("/crew/", post(crew::create_crew_member))
        .route("/crew/:crew_id/", get(crew::get_crew_member))
        .route("/crew/:crew_id/", put(crew::update_crew_member))
        .route("/crew/:crew_id/", patch(crew::update_crew_member))
        .route("/crew/:crew_id/", delete(crew::delete_crew_member))
}

/// User routes; registration is public, the rest require authentication
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(auth::register))
        .route("/users/", get(users::list_users))
        .route("/users/:user_id/", get(users::get_user))
        .route("/users/:user_id/", patch(users::update_user))
}
