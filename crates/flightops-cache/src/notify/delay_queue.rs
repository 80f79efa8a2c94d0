//! Producer side of the delay-notification queue.
//!
//! When a flight transitions into `delayed`, one job is pushed onto a Redis
//! list for an out-of-process worker to consume. Enqueueing is fire-and-forget:
//! the caller logs failures and never fails the originating request.

use serde::{Deserialize, Serialize};

use flightops_core::value_objects::Snowflake;

use crate::pool::{RedisPool, RedisResult};

/// Redis list the jobs land on
const DELAY_QUEUE_KEY: &str = "flightops:notifications:delays";

/// One delay-notification job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayNotification {
    /// Flight that became delayed
    pub flight_id: Snowflake,
    /// Flight number, so the worker need not look it up
    pub flight_number: String,
    /// Enqueue timestamp (unix seconds)
    pub queued_at: i64,
}

impl DelayNotification {
    /// Create a new job stamped with the current time
    #[must_use]
    pub fn new(flight_id: Snowflake, flight_number: impl Into<String>) -> Self {
        Self {
            flight_id,
            flight_number: flight_number.into(),
            queued_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Delay-notification queue producer
#[derive(Clone)]
pub struct DelayNotificationQueue {
    pool: RedisPool,
}

impl DelayNotificationQueue {
    /// Create a new queue producer
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Queue key the jobs are pushed onto
    #[must_use]
    pub fn queue_key() -> &'static str {
        DELAY_QUEUE_KEY
    }

    /// Push one job onto the queue
    pub async fn enqueue(&self, notification: &DelayNotification) -> RedisResult<()> {
        self.pool.lpush(DELAY_QUEUE_KEY, notification).await?;

        tracing::info!(
            flight_id = %notification.flight_id,
            flight_number = %notification.flight_number,
            "Enqueued delay notification"
        );

        Ok(())
    }

    /// Number of jobs currently queued
    pub async fn len(&self) -> RedisResult<u64> {
        self.pool.llen(DELAY_QUEUE_KEY).await
    }

    /// Whether the queue is empty
    pub async fn is_empty(&self) -> RedisResult<bool> {
        Ok(self.len().await? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_shape() {
        let job = DelayNotification::new(Snowflake::new(42), "TK1234");
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["flight_id"], "42");
        assert_eq!(json["flight_number"], "TK1234");
        assert!(json["queued_at"].is_i64());
    }

    #[test]
    fn test_queue_key_is_namespaced() {
        assert_eq!(
            DelayNotificationQueue::queue_key(),
            "flightops:notifications:delays"
        );
    }
}
