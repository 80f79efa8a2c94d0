//! Health check and service descriptor handlers

use axum::Json;
use flightops_service::dto::HealthResponse;
use serde_json::{json, Value};

/// Basic health check (liveness probe)
///
/// GET /health/
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "flightops-api",
    })
}

/// Service descriptor
///
/// GET /
pub async fn service_descriptor() -> Json<Value> {
    Json(json!({
        "message": "FlightOps API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "flights": "/api/flights/",
            "crew": "/api/crew/",
            "users": "/api/users/",
            "register": "/api/users/register",
            "token": "/api/token/",
            "token_refresh": "/api/token/refresh/",
            "health": "/health/"
        }
    }))
}
