//! # flightops-cache
//!
//! Redis layer for the flight-list cache and the delay-notification queue.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Flight List Cache**: Read-through cache for the unfiltered flight
//!   listing with TTL and wholesale invalidation
//! - **Delay Queue**: Fire-and-forget producer for delay-notification jobs
//!
//! ## Example
//!
//! ```ignore
//! use flightops_cache::{RedisPool, RedisPoolConfig, FlightListCache, DelayNotificationQueue};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//!
//! let cache = FlightListCache::new(pool.clone(), 300);
//! let queue = DelayNotificationQueue::new(pool.clone());
//!
//! if cache.get().await?.is_none() {
//!     // query the store, then cache.set(&payload).await?;
//! }
//! ```

pub mod flights;
pub mod notify;
pub mod pool;

pub use flights::FlightListCache;
pub use notify::{DelayNotification, DelayNotificationQueue};
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
