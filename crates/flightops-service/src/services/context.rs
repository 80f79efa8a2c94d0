//! Service context - dependency container for services
//!
//! Holds all repositories, cache stores, and other dependencies needed by
//! services.

use std::sync::Arc;

use flightops_cache::{DelayNotificationQueue, FlightListCache};
use flightops_common::auth::JwtService;
use flightops_core::traits::{CrewRepository, FlightRepository, UserRepository};
use flightops_core::SnowflakeGenerator;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The flight-list cache and the delay-notification queue
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    flight_repo: Arc<dyn FlightRepository>,
    crew_repo: Arc<dyn CrewRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Redis stores
    flight_cache: FlightListCache,
    delay_queue: DelayNotificationQueue,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        flight_repo: Arc<dyn FlightRepository>,
        crew_repo: Arc<dyn CrewRepository>,
        user_repo: Arc<dyn UserRepository>,
        flight_cache: FlightListCache,
        delay_queue: DelayNotificationQueue,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            flight_repo,
            crew_repo,
            user_repo,
            flight_cache,
            delay_queue,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Repositories ===

    /// Get the flight repository
    pub fn flight_repo(&self) -> &dyn FlightRepository {
        self.flight_repo.as_ref()
    }

    /// Get the crew repository
    pub fn crew_repo(&self) -> &dyn CrewRepository {
        self.crew_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Redis Stores ===

    /// Get the flight-list cache
    pub fn flight_cache(&self) -> &FlightListCache {
        &self.flight_cache
    }

    /// Get the delay-notification queue producer
    pub fn delay_queue(&self) -> &DelayNotificationQueue {
        &self.delay_queue
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> flightops_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("redis_stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    flight_repo: Option<Arc<dyn FlightRepository>>,
    crew_repo: Option<Arc<dyn CrewRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    flight_cache: Option<FlightListCache>,
    delay_queue: Option<DelayNotificationQueue>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            flight_repo: None,
            crew_repo: None,
            user_repo: None,
            flight_cache: None,
            delay_queue: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn flight_repo(mut self, repo: Arc<dyn FlightRepository>) -> Self {
        self.flight_repo = Some(repo);
        self
    }

    pub fn crew_repo(mut self, repo: Arc<dyn CrewRepository>) -> Self {
        self.crew_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn flight_cache(mut self, cache: FlightListCache) -> Self {
        self.flight_cache = Some(cache);
        self
    }

    pub fn delay_queue(mut self, queue: DelayNotificationQueue) -> Self {
        self.delay_queue = Some(queue);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.flight_repo
                .ok_or_else(|| ServiceError::validation("flight_repo is required"))?,
            self.crew_repo
                .ok_or_else(|| ServiceError::validation("crew_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.flight_cache
                .ok_or_else(|| ServiceError::validation("flight_cache is required"))?,
            self.delay_queue
                .ok_or_else(|| ServiceError::validation("delay_queue is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
