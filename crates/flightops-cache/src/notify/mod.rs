//! Delay-notification queue

mod delay_queue;

pub use delay_queue::{DelayNotification, DelayNotificationQueue};
