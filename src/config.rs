use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::error::AppError;
use crate::riot::client::RetryPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub rate_limit_per_second: NonZeroU32,
    pub max_retries: u32,
    pub rate_limit_cooldown: Duration,
    pub retry_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_RATE_LIMIT_PER_SECOND: u32 = 20;
        const DEFAULT_MAX_RETRIES: u32 = 5;
        const DEFAULT_RATE_LIMIT_COOLDOWN_SECS: u64 = 130;
        const DEFAULT_RETRY_DELAY_SECS: u64 = 10;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let rate_limit_per_second = env::var("RIOT_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN)
            });

        let max_retries = env::var("RIOT_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);

        let rate_limit_cooldown = env::var("RIOT_RATE_LIMIT_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_RATE_LIMIT_COOLDOWN_SECS));

        let retry_delay = env::var("RIOT_RETRY_DELAY_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_RETRY_DELAY_SECS));

        Ok(Self {
            riot_api_key,
            rate_limit_per_second,
            max_retries,
            rate_limit_cooldown,
            retry_delay,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_retries,
            rate_limit_cooldown: self.rate_limit_cooldown,
            retry_delay: self.retry_delay,
        }
    }
}
