//! Application-wide constants and default tunables
//!
//! This module centralizes all magic numbers and configuration defaults
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default base URL for the upstream sports-data API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sportradar.us/rugby-league/trial/v2/en";

/// Default season identifier used when none is configured.
/// The real identifier comes from the upstream provider's season listing.
pub const DEFAULT_SEASON_ID: &str = "sr:season:5678";

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Cache tunables
pub mod cache {
    /// Default TTL for cached API responses (5 minutes).
    /// Live data bypasses the cache entirely, so this only bounds the
    /// staleness of schedule, standings and player panels.
    pub const DEFAULT_TTL_MS: u64 = 300_000;
}

/// Refresh intervals in milliseconds
pub mod intervals {
    /// Polling interval for the live matches panel
    pub const LIVE_POLL_MS: u64 = 30_000;

    /// Polling interval for slow-moving panels (ladder, player stats)
    pub const SLOW_POLL_MS: u64 = 300_000;
}

/// HTTP request tunables
pub mod http {
    /// Default timeout for a single request attempt (10 seconds).
    /// A timeout counts as a failed attempt and goes through the same
    /// retry/backoff path as any other transient failure.
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
}

/// Retry configuration
pub mod retry {
    /// Maximum number of attempts per logical request
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base unit for exponential backoff; the delay after attempt `n`
    /// is `2^n * BASE_DELAY_MS`.
    pub const BASE_DELAY_MS: u64 = 1000;
}

/// Environment variable names
pub mod env_vars {
    /// Override for the API base URL
    pub const API_BASE_URL: &str = "TRYLINE_API_BASE_URL";

    /// Override for the API key
    pub const API_KEY: &str = "TRYLINE_API_KEY";

    /// Override for the log file path
    pub const LOG_FILE: &str = "TRYLINE_LOG_FILE";

    /// Override for the HTTP request timeout in milliseconds
    pub const HTTP_TIMEOUT_MS: &str = "TRYLINE_HTTP_TIMEOUT_MS";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_constants_are_reasonable() {
        // Live polling must be tighter than the slow panels
        assert!(intervals::LIVE_POLL_MS < intervals::SLOW_POLL_MS);
        // The cache must outlive a single live polling cycle, otherwise
        // cached panels would refetch on every live tick
        assert!(cache::DEFAULT_TTL_MS >= intervals::LIVE_POLL_MS);
    }

    #[test]
    fn test_retry_constants_are_reasonable() {
        assert!(retry::MAX_ATTEMPTS > 0);
        assert!(retry::BASE_DELAY_MS > 0);

        // The full backoff schedule must fit well under the cache TTL,
        // otherwise a retried request could outlive its own cache slot
        let worst_case_ms: u64 = (1..retry::MAX_ATTEMPTS)
            .map(|attempt| 2u64.pow(attempt) * retry::BASE_DELAY_MS)
            .sum();
        assert!(worst_case_ms < cache::DEFAULT_TTL_MS);
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::API_BASE_URL.is_empty());
        assert!(!env_vars::API_KEY.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT_MS.is_empty());
    }

    #[test]
    fn test_default_base_url_is_https() {
        assert!(DEFAULT_API_BASE_URL.starts_with("https://"));
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
