use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AppError;

use super::metrics::RequestMetrics;
use super::region::Region;

/// How transient failures are handled before the client gives up.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total requests allowed for one call, first try included.
    pub max_attempts: u32,
    /// Pause after a 429 before asking again.
    pub rate_limit_cooldown: Duration,
    /// Base pause after a 5xx, doubled on every further failed attempt.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            rate_limit_cooldown: Duration::from_secs(130),
            retry_delay: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub struct RiotClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    retry: RetryPolicy,
    base_url: String,
    pub metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(
        key: String,
        region: Region,
        rate_limit_per_second: NonZeroU32,
        retry: RetryPolicy,
    ) -> Self {
        let q = Quota::per_second(rate_limit_per_second).allow_burst(nonzero!(20_u32));

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            key,
            retry,
            base_url: region.base_url(),
            metrics: RequestMetrics::new(),
        }
    }

    /// Point the client somewhere else than the regional routing host. Tests
    /// use this to talk to a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one GET against the Riot API, retrying transient failures.
    ///
    /// A 429 waits out the configured cool-down, a 5xx waits the base delay
    /// doubled per failed attempt. Anything else non-200 is permanent and
    /// returned as [`AppError::RiotApi`]. Once the attempt cap is reached the
    /// last transient status is surfaced as [`AppError::RetriesExhausted`].
    pub(crate) async fn request<T: DeserializeOwned>(&self, path: String) -> Result<T, AppError> {
        let mut attempts = 0u32;

        loop {
            // Ensure we do not enforce the RIOT API rate limits before doing any request
            self.limiter.until_ready().await;
            self.metrics.inc();

            let res = self
                .client
                .get(&path)
                .header("X-Riot-Token", &self.key)
                .send()
                .await?;

            let status = res.status();
            if status == StatusCode::OK {
                return Ok(res.json().await?);
            }

            if status != StatusCode::TOO_MANY_REQUESTS && !status.is_server_error() {
                return Err(AppError::RiotApi {
                    status: status.as_u16(),
                    message: res.text().await.unwrap_or_default(),
                });
            }

            attempts += 1;
            if attempts >= self.retry.max_attempts {
                return Err(AppError::RetriesExhausted {
                    status: status.as_u16(),
                    attempts,
                });
            }

            let wait = if status == StatusCode::TOO_MANY_REQUESTS {
                self.retry.rate_limit_cooldown
            } else {
                self.retry.retry_delay * 2u32.saturating_pow(attempts - 1)
            };
            warn!(
                %status,
                attempt = attempts,
                wait_ms = wait.as_millis() as u64,
                "transient Riot API failure, backing off"
            );
            tokio::time::sleep(wait).await;
        }
    }
}
