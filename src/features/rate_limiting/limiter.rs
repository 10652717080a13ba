//! Sliding-window rate limiter for inbound commands.
//!
//! The router checks each command against a per-user window; over-limit
//! commands get a short reply instead of being dispatched. There is no
//! waiting: a blocked command is simply dropped.

use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct RateLimiter {
    requests: DashMap<String, Vec<Instant>>,
    max_requests: usize,
    time_window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, time_window: Duration) -> Self {
        RateLimiter {
            requests: DashMap::new(),
            max_requests,
            time_window,
        }
    }

    /// Record one request for `user_id`; false when the window is full.
    pub fn check(&self, user_id: &str) -> bool {
        let now = Instant::now();
        let mut entry = self.requests.entry(user_id.to_string()).or_default();

        entry.retain(|&time| now.duration_since(time) < self.time_window);

        if entry.len() >= self.max_requests {
            false
        } else {
            entry.push(now);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[test]
    fn test_allows_under_limit() {
        let limiter = RateLimiter::new(3, Duration::from_secs(1));

        assert!(limiter.check("user1"));
        assert!(limiter.check("user1"));
        assert!(limiter.check("user1"));
    }

    #[test]
    fn test_blocks_over_limit() {
        let limiter = RateLimiter::new(2, Duration::from_secs(1));

        assert!(limiter.check("user1"));
        assert!(limiter.check("user1"));
        assert!(!limiter.check("user1"));
    }

    #[test]
    fn test_users_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));

        assert!(limiter.check("user1"));
        assert!(limiter.check("user2"));
        assert!(!limiter.check("user1"));
        assert!(!limiter.check("user2"));
    }

    #[tokio::test]
    async fn test_resets_after_window() {
        let limiter = RateLimiter::new(1, Duration::from_millis(100));

        assert!(limiter.check("user1"));
        assert!(!limiter.check("user1"));

        sleep(Duration::from_millis(150)).await;
        assert!(limiter.check("user1"));
    }
}
