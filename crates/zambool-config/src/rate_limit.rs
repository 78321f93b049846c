//! Rate limiting configuration for API endpoints.
//!
//! Signup and login are rate limited per client IP with a token bucket:
//! tokens are replenished every `per_second` seconds and at most
//! `burst_size` requests can be made back to back.
//!
//! # Environment Variables
//!
//! - `RATE_LIMIT_ENABLED`: Set to `false` to disable limiting (default: enabled)
//! - `RATE_LIMIT_GENERAL_PER_SECOND`: Replenish period for general endpoints (default: 2)
//! - `RATE_LIMIT_GENERAL_BURST_SIZE`: Burst size for general endpoints (default: 30)
//! - `RATE_LIMIT_AUTH_PER_SECOND`: Replenish period for auth endpoints (default: 10)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: Burst size for auth endpoints (default: 5)

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

use crate::server::parse_flag;

pub type IpGovernorConfig =
    GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub general_per_second: u64,
    pub general_burst_size: u32,
    /// Stricter limits for signup/login to slow down credential stuffing.
    pub auth_per_second: u64,
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            general_per_second: 2,
            general_burst_size: 30,
            auth_per_second: 10,
            auth_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// Falls back to defaults for unset or unparsable values. Zero values are
    /// raised to one since the governor cannot be built from them.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: std::env::var("RATE_LIMIT_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.enabled),
            general_per_second: env_or("RATE_LIMIT_GENERAL_PER_SECOND", defaults.general_per_second)
                .max(1),
            general_burst_size: env_or("RATE_LIMIT_GENERAL_BURST_SIZE", defaults.general_burst_size)
                .max(1),
            auth_per_second: env_or("RATE_LIMIT_AUTH_PER_SECOND", defaults.auth_per_second).max(1),
            auth_burst_size: env_or("RATE_LIMIT_AUTH_BURST_SIZE", defaults.auth_burst_size).max(1),
        }
    }

    /// Governor config for general API endpoints, keyed by client IP
    /// (`X-Forwarded-For`, `X-Real-Ip`, `Forwarded`, then the peer address).
    #[must_use]
    pub fn general_governor_config(&self) -> IpGovernorConfig {
        GovernorConfigBuilder::default()
            .per_second(self.general_per_second.max(1))
            .burst_size(self.general_burst_size.max(1))
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("non-zero period and burst size always build")
    }

    /// Governor config for signup/login.
    #[must_use]
    pub fn auth_governor_config(&self) -> IpGovernorConfig {
        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second.max(1))
            .burst_size(self.auth_burst_size.max(1))
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("non-zero period and burst size always build")
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.general_per_second, 2);
        assert_eq!(config.general_burst_size, 30);
        assert_eq!(config.auth_per_second, 10);
        assert_eq!(config.auth_burst_size, 5);
    }

    #[test]
    fn test_governor_configs_build() {
        let config = RateLimitConfig::default();
        let _ = config.general_governor_config();
        let _ = config.auth_governor_config();
    }

    #[test]
    fn test_zero_values_still_build() {
        let config = RateLimitConfig {
            enabled: true,
            general_per_second: 0,
            general_burst_size: 0,
            auth_per_second: 0,
            auth_burst_size: 0,
        };
        let _ = config.auth_governor_config();
    }
}
