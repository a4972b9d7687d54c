//! Rate limiting implementation
//!
//! Uses the governor crate for token bucket rate limiting. The bucket holds
//! up to `max` tokens, starts full, and regains one token every `duration`.
//! Governor tracks this arithmetically, so there is no background refill
//! task to start or stop; dropping the last handle frees the limiter.

use crate::error::{Error, Result};
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Configuration for rate limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Bucket capacity (maximum burst)
    pub max: u32,
    /// Time to regain one token
    pub duration: Duration,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max: 10,
            duration: Duration::from_millis(100),
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(max: u32, duration: Duration) -> Self {
        Self { max, duration }
    }

    /// Allow `requests` per second with an equal burst
    pub fn per_second(requests: u32) -> Self {
        Self {
            max: requests,
            duration: Duration::from_secs(1) / requests.max(1),
        }
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    config: RateLimiterConfig,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: &RateLimiterConfig) -> Result<Self> {
        let max = NonZeroU32::new(config.max)
            .ok_or_else(|| Error::config("rate limit max must be greater than zero"))?;
        let quota = Quota::with_period(config.duration)
            .ok_or_else(|| Error::config("rate limit duration must be greater than zero"))?
            .allow_burst(max);

        Ok(Self {
            limiter: Arc::new(Governor::direct(quota)),
            config: *config,
        })
    }

    /// The config this limiter was built from
    pub fn config(&self) -> &RateLimiterConfig {
        &self.config
    }

    /// Wait until a token is available and consume it
    pub async fn wait(&self) {
        if self.limiter.check().is_ok() {
            return;
        }
        debug!("Rate limit reached, waiting for a token");
        self.limiter.until_ready().await;
    }

    /// Try to consume a token without waiting
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Wait with a timeout, returning false if no token arrived in time
    pub async fn wait_with_timeout(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.limiter.until_ready())
            .await
            .is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .finish()
    }
}
