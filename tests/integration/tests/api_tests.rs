//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use flightops_core::{Flight, FlightRepository, Snowflake, SnowflakeGenerator, UserRepository};
use flightops_db::{PgFlightRepository, PgUserRepository};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

/// Register a fresh user and obtain an access token
async fn obtain_access_token(server: &TestServer) -> String {
    let register = RegisterRequest::unique();
    let response = server
        .post("/api/users/register", &register)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/token/", &TokenRequest::from_register(&register))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    auth.access
}

/// Create a flight through the API and return it
async fn create_flight(server: &TestServer, token: &str, request: &CreateFlightRequest) -> FlightResponse {
    let response = server.post_auth("/api/flights/", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health & Descriptor
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_service_descriptor() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["endpoints"]["flights"].is_string());
}

// ============================================================================
// Registration & Auth
// ============================================================================

#[tokio::test]
async fn test_register_creates_user_with_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/users/register", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.role, "viewer");
    assert!(user.is_active);
    assert_eq!(user.profile.bio, "");
    assert!(!user.profile.is_verified);

    // Exactly one profile row backs the user
    let repo = PgUserRepository::new(server.db_pool().await.unwrap());
    let user_id: Snowflake = user.id.parse().unwrap();
    assert_eq!(repo.profile_count(user_id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_duplicate_username_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/users/register", &request).await.unwrap();

    let response = server.post("/api/users/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_token_obtain_and_refresh() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/users/register", &register).await.unwrap();

    let response = server
        .post("/api/token/", &TokenRequest::from_register(&register))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);

    // Refresh produces a fresh pair
    let response = server
        .post("/api/token/refresh/", &RefreshRequest { refresh: auth.refresh })
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access.is_empty());

    // An access token is not accepted on the refresh endpoint
    let response = server
        .post("/api/token/refresh/", &RefreshRequest { refresh: auth.access })
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_obtain_bad_credentials_is_401() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = TokenRequest {
        username: "no-such-user".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/token/", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_protected_endpoints_require_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/flights/").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Flight CRUD
// ============================================================================

#[tokio::test]
async fn test_create_flight_defaults() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let request = CreateFlightRequest::unique();
    let flight = create_flight(&server, &token, &request).await;

    assert_eq!(flight.flight_number, request.flight_number);
    assert_eq!(flight.status, "planned");
    assert_eq!(flight.airline, "Unknown");
    assert!(flight.gate.is_none());
}

#[tokio::test]
async fn test_duplicate_flight_number_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let request = CreateFlightRequest::unique();
    create_flight(&server, &token, &request).await;

    let response = server.post_auth("/api/flights/", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_flight_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let response = server.get_auth("/api/flights/1/", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_flight_clears_gate_with_null() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let flight = create_flight(&server, &token, &CreateFlightRequest::unique()).await;
    let path = format!("/api/flights/{}/", flight.id);

    let response = server
        .patch_auth(&path, &token, &json!({ "gate": "B7" }))
        .await
        .unwrap();
    let updated: FlightResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.gate.as_deref(), Some("B7"));

    let response = server
        .patch_auth(&path, &token, &json!({ "gate": null }))
        .await
        .unwrap();
    let updated: FlightResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.gate.is_none());
}

// ============================================================================
// Flight listing: filters, pagination, cache
// ============================================================================

#[tokio::test]
async fn test_flight_number_substring_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let request = CreateFlightRequest::unique();
    create_flight(&server, &token, &request).await;

    let path = format!("/api/flights/?flight_number={}", request.flight_number);
    let response = server.get_auth(&path, &token).await.unwrap();
    let envelope: Envelope<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.count, 1);
    assert_eq!(envelope.results[0].flight_number, request.flight_number);
}

#[tokio::test]
async fn test_pagination_links() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    // Three flights sharing a unique origin so the filter isolates them
    let origin = format!("XOR{}", unique_suffix());
    for _ in 0..3 {
        let mut request = CreateFlightRequest::unique();
        request.origin.clone_from(&origin);
        create_flight(&server, &token, &request).await;
    }

    let path = format!("/api/flights/?origin={origin}&page_size=1");
    let response = server.get_auth(&path, &token).await.unwrap();
    let envelope: Envelope<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.count, 3);
    assert_eq!(envelope.results.len(), 1);
    assert!(envelope.next.is_some());
    assert!(envelope.previous.is_none());

    // Follow the next link
    let response = server
        .get_auth(envelope.next.as_deref().unwrap(), &token)
        .await
        .unwrap();
    let envelope: Envelope<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.previous.is_some());
}

#[tokio::test]
async fn test_page_size_capped_at_100() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let response = server
        .get_auth("/api/flights/?page_size=500", &token)
        .await
        .unwrap();
    let envelope: Envelope<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.results.len() <= 100);
}

#[tokio::test]
async fn test_malformed_filters_are_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    for path in [
        "/api/flights/?status=cancelled",
        "/api/flights/?ordering=gate",
        "/api/flights/?page=two",
        "/api/flights/?page=0",
        "/api/flights/?scheduled_time_after=yesterday",
    ] {
        let response = server.get_auth(path, &token).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_unfiltered_list_is_bare_array_and_sees_writes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    // Prime the cache
    let response = server.get_auth("/api/flights/", &token).await.unwrap();
    let _: Vec<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // A write invalidates the whole namespace, so the next unfiltered read
    // must see the new flight
    let request = CreateFlightRequest::unique();
    create_flight(&server, &token, &request).await;

    let response = server.get_auth("/api/flights/", &token).await.unwrap();
    let flights: Vec<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(flights
        .iter()
        .any(|f| f.flight_number == request.flight_number));
}

#[tokio::test]
async fn test_unfiltered_list_is_stale_against_direct_store_writes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let repo = PgFlightRepository::new(server.db_pool().await.unwrap());
    let generator = SnowflakeGenerator::new(601);

    // Prime the cache
    let response = server.get_auth("/api/flights/", &token).await.unwrap();
    let _: Vec<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Insert straight into the store; nothing invalidates the cache
    let request = CreateFlightRequest::unique();
    let flight = Flight::new(
        generator.generate(),
        request.flight_number.clone(),
        request.origin.clone(),
        request.destination.clone(),
        Utc::now(),
    );
    repo.create(&flight).await.unwrap();

    // Within the TTL the listing still serves the cached snapshot
    let response = server.get_auth("/api/flights/", &token).await.unwrap();
    let flights: Vec<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!flights
        .iter()
        .any(|f| f.flight_number == request.flight_number));

    // A filtered request bypasses the cache and does see the row
    let path = format!("/api/flights/?flight_number={}", request.flight_number);
    let response = server.get_auth(&path, &token).await.unwrap();
    let envelope: Envelope<FlightResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.count, 1);
}

// ============================================================================
// Delay notifications
// ============================================================================

#[tokio::test]
async fn test_delay_transition_enqueues_once() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;
    let queue = server.delay_queue().expect("Failed to open queue");

    let flight = create_flight(&server, &token, &CreateFlightRequest::unique()).await;
    let path = format!("/api/flights/{}/", flight.id);

    let before = queue.len().await.unwrap();

    // departed is not delayed: nothing enqueued
    let response = server
        .patch_auth(&path, &token, &json!({ "status": "departed" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(queue.len().await.unwrap(), before);

    // transition into delayed enqueues exactly one job
    let response = server
        .patch_auth(&path, &token, &json!({ "status": "delayed" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(queue.len().await.unwrap(), before + 1);

    // delayed -> delayed enqueues nothing
    let response = server
        .patch_auth(&path, &token, &json!({ "status": "delayed" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(queue.len().await.unwrap(), before + 1);
}

#[tokio::test]
async fn test_flight_created_delayed_enqueues_nothing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;
    let queue = server.delay_queue().expect("Failed to open queue");

    let before = queue.len().await.unwrap();

    let mut request = CreateFlightRequest::unique();
    request.status = Some("delayed".to_string());
    create_flight(&server, &token, &request).await;

    assert_eq!(queue.len().await.unwrap(), before);
}

// ============================================================================
// Crew
// ============================================================================

#[tokio::test]
async fn test_crew_create_requires_existing_flight() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let request = CreateCrewMemberRequest::for_flight("1");
    let response = server.post_auth("/api/crew/", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_crew_unknown_role_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let flight = create_flight(&server, &token, &CreateFlightRequest::unique()).await;
    let mut request = CreateCrewMemberRequest::for_flight(&flight.id);
    request.role = "navigator".to_string();

    let response = server.post_auth("/api/crew/", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_deleting_flight_cascades_to_crew() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let flight = create_flight(&server, &token, &CreateFlightRequest::unique()).await;
    let request = CreateCrewMemberRequest::for_flight(&flight.id);

    let response = server.post_auth("/api/crew/", &token, &request).await.unwrap();
    let member: CrewMemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(member.assigned_flight, flight.id);

    let response = server
        .delete_auth(&format!("/api/flights/{}/", flight.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/crew/{}/", member.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_update_keeps_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register = RegisterRequest::unique();
    let response = server.post("/api/users/register", &register).await.unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/token/", &TokenRequest::from_register(&register))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let suffix = unique_suffix();
    let path = format!("/api/users/{}/", created.id);
    let response = server
        .patch_auth(
            &path,
            &auth.access,
            &json!({ "email": format!("changed{suffix}@example.com") }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The same profile row survives the update, and no new one appears
    assert_eq!(updated.profile.id, created.profile.id);

    let repo = PgUserRepository::new(server.db_pool().await.unwrap());
    let user_id: Snowflake = created.id.parse().unwrap();
    assert_eq!(repo.profile_count(user_id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_user_list_is_paginated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = obtain_access_token(&server).await;

    let response = server.get_auth("/api/users/?page_size=1", &token).await.unwrap();
    let envelope: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(envelope.count >= 1);
    assert_eq!(envelope.results.len(), 1);
}
