//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation.

use async_trait::async_trait;

use crate::entities::{CrewMember, Flight, Profile, User};
use crate::error::DomainError;
use crate::queries::{CrewQuery, FlightQuery, Page, PageRequest};
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Flight Repository
// ============================================================================

#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Find flight by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Flight>>;

    /// Full collection ordered by scheduled_time descending (the cacheable,
    /// unfiltered listing)
    async fn list_all(&self) -> RepoResult<Vec<Flight>>;

    /// Filtered, ordered, paginated listing
    async fn search(&self, query: &FlightQuery) -> RepoResult<Page<Flight>>;

    /// Insert a new flight; duplicate flight_number is a validation error
    async fn create(&self, flight: &Flight) -> RepoResult<()>;

    /// Update an existing flight; duplicate flight_number is a validation error
    async fn update(&self, flight: &Flight) -> RepoResult<()>;

    /// Delete a flight; its crew members go with it (FK cascade)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Crew Repository
// ============================================================================

#[async_trait]
pub trait CrewRepository: Send + Sync {
    /// Find crew member by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<CrewMember>>;

    /// Filtered, paginated listing
    async fn search(&self, query: &CrewQuery) -> RepoResult<Page<CrewMember>>;

    /// Insert a new crew member; a missing assigned flight is a validation error
    async fn create(&self, member: &CrewMember) -> RepoResult<()>;

    /// Update an existing crew member
    async fn update(&self, member: &CrewMember) -> RepoResult<()>;

    /// Delete a crew member
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username (login lookup)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user together with their profile
    async fn find_with_profile(&self, id: Snowflake) -> RepoResult<Option<(User, Profile)>>;

    /// Paginated listing of users with their profiles
    async fn list(&self, page: &PageRequest) -> RepoResult<Page<(User, Profile)>>;

    /// Create user and profile in one transaction; duplicate username/email
    /// is a validation error
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
        password_hash: &str,
    ) -> RepoResult<()>;

    /// Update user fields; must never touch the profile
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Count profiles attached to a user (invariant check: always exactly one)
    async fn profile_count(&self, user_id: Snowflake) -> RepoResult<i64>;
}
