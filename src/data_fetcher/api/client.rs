//! HTTP client with response caching, bounded retry and error classification
//!
//! The client is explicitly constructed and injectable: it owns its own
//! [`ResponseCache`] and `reqwest::Client`, so independent configurations
//! never share state and tests get full isolation.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::endpoints::cache_key;
use crate::config::Config;
use crate::constants;
use crate::data_fetcher::cache::ResponseCache;
use crate::error::AppError;

pub struct ApiClient {
    http: Client,
    cache: ResponseCache,
    base_url: String,
    api_key: String,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl ApiClient {
    /// Builds a client from the configuration: per-attempt timeout,
    /// pooled connections, and a cache bounded by the configured TTL.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(Self {
            http,
            cache: ResponseCache::new(config.cache_ttl()),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay(),
        })
    }

    /// The cache owned by this client. Exposed for monitoring and for
    /// explicit `clear`/`clear_expired` calls.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Performs a GET against `path`, going through the cache unless
    /// `use_cache` is false.
    ///
    /// With `use_cache`:
    /// - a valid cached body short-circuits the request entirely (no
    ///   network call, no retry machinery);
    /// - a successful fresh response is written through to the cache.
    ///
    /// With `use_cache == false` the cache is neither read nor written —
    /// the live polling path, where staleness is unacceptable.
    ///
    /// Transient failures (timeout, connection error, 429, 5xx) are
    /// retried up to the configured attempt ceiling with exponential
    /// backoff (`2^attempt * base`); the last error is the one returned.
    /// Fatal errors (404, other 4xx, undecodable payloads) surface
    /// immediately.
    #[instrument(skip(self, params))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        use_cache: bool,
    ) -> Result<T, AppError> {
        let key = cache_key(path, params);

        if use_cache && let Some(body) = self.cache.get(&key).await {
            match serde_json::from_str::<T>(&body) {
                Ok(parsed) => {
                    debug!("Serving {key} from cache");
                    return Ok(parsed);
                }
                Err(e) => {
                    // Continue with a fresh request if the cached body no
                    // longer matches the expected shape
                    warn!("Failed to parse cached response for {key}: {e}");
                }
            }
        }

        let url = format!("{}{}", self.base_url, path);
        let body = self.fetch_with_retry(&url, params).await?;

        let parsed = parse_payload::<T>(&body, &url)?;
        if use_cache {
            self.cache.set(key, body).await;
        }
        Ok(parsed)
    }

    async fn fetch_with_retry(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, AppError> {
        let mut attempt = 1u32;
        loop {
            match self.fetch_once(url, params).await {
                Ok(body) => {
                    debug!("Request succeeded on attempt {attempt}: {url}");
                    return Ok(body);
                }
                Err(e) if attempt < self.max_retries && e.is_transient() => {
                    let delay = self.retry_base_delay * 2u32.pow(attempt);
                    warn!(
                        "Transient failure for {}: {}. Retrying in {:?} (attempt {}/{})",
                        url, e, delay, attempt, self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!("Request failed for {url} after {attempt} attempt(s): {e}");
                    return Err(e);
                }
            }
        }
    }

    /// One request attempt: send, classify the status, read the body.
    async fn fetch_once(&self, url: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
        info!("Fetching data from URL: {url}");

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        if !self.api_key.is_empty() {
            query.push(("api_key", self.api_key.as_str()));
        }
        query.extend_from_slice(params);

        let response = match self.http.get(url).query(&query).send().await {
            Ok(response) => response,
            Err(e) => {
                return Err(if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                });
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");

            return Err(match status_code {
                404 => AppError::api_not_found(url),
                429 => AppError::api_rate_limit(reason, url),
                400..=499 => AppError::api_client_error(status_code, reason, url),
                502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
                _ => AppError::api_server_error(status_code, reason, url),
            });
        }

        match response.text().await {
            Ok(body) => {
                debug!("Response length: {} bytes", body.len());
                Ok(body)
            }
            Err(e) => {
                if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else {
                    Err(AppError::ApiFetch(e))
                }
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

/// Decodes a response body, splitting undecodable payloads into the
/// empty / not-JSON / unexpected-structure cases so callers can log a
/// useful failure.
fn parse_payload<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            let preview: String = body.chars().take(200).collect();
            error!("Failed to parse API response: {e} (URL: {url}, body starts: {preview})");

            if body.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !body.trim_start().starts_with('{') && !body.trim_start().starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
