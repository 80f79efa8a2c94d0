//! Read-through cache for the unfiltered flight listing.
//!
//! Only the unfiltered list is cached; any filtered or paginated request goes
//! straight to the store. The cached value is the serialized response array,
//! returned verbatim on a hit so cached and fresh responses are byte-equal.

use serde_json::value::RawValue;

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for every flight cache entry
const FLIGHTS_PREFIX: &str = "flightops:flights:";
/// Key for the unfiltered list
const LIST_KEY: &str = "flightops:flights:all";

/// Flight list cache store
#[derive(Clone)]
pub struct FlightListCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl FlightListCache {
    /// Create a new cache store with the given entry TTL
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Key for the unfiltered flight list
    #[must_use]
    pub fn list_key() -> &'static str {
        LIST_KEY
    }

    /// Get the cached serialized list, if present and unexpired
    pub async fn get(&self) -> RedisResult<Option<Box<RawValue>>> {
        self.pool.get_value(LIST_KEY).await
    }

    /// Cache the serialized list under the configured TTL
    pub async fn set(&self, payload: &RawValue) -> RedisResult<()> {
        self.pool
            .set(LIST_KEY, payload, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(key = LIST_KEY, ttl = self.ttl_seconds, "Cached flight list");

        Ok(())
    }

    /// Drop every flight cache entry. Called after any flight write; the
    /// whole namespace goes, not just the list key.
    pub async fn invalidate_all(&self) -> RedisResult<i32> {
        let pattern = format!("{FLIGHTS_PREFIX}*");
        let keys = self.pool.scan_keys(&pattern, 100).await?;
        let deleted = self.pool.delete_many(&keys).await?;

        tracing::debug!(deleted, "Invalidated flight cache");

        Ok(deleted)
    }
}
