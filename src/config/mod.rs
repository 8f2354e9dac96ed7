use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the upstream sports-data API. Should include https:// prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key appended to every request as the `api_key` query parameter.
    #[serde(default)]
    pub api_key: String,
    /// Season identifier substituted into season-scoped endpoint paths.
    #[serde(default = "default_season_id")]
    pub season_id: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// How long a cached API response stays valid, in milliseconds.
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    /// Refresh interval for the live matches panel, in milliseconds.
    #[serde(default = "default_live_poll_interval_ms")]
    pub live_poll_interval_ms: u64,
    /// Timeout for a single HTTP request attempt, in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Maximum number of attempts per request before the last error surfaces.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base unit of the exponential backoff between attempts, in milliseconds.
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_season_id() -> String {
    constants::DEFAULT_SEASON_ID.to_string()
}

fn default_cache_ttl_ms() -> u64 {
    constants::cache::DEFAULT_TTL_MS
}

fn default_live_poll_interval_ms() -> u64 {
    constants::intervals::LIVE_POLL_MS
}

fn default_request_timeout_ms() -> u64 {
    constants::http::REQUEST_TIMEOUT_MS
}

fn default_max_retries() -> u32 {
    constants::retry::MAX_ATTEMPTS
}

fn default_retry_base_delay_ms() -> u64 {
    constants::retry::BASE_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            season_id: default_season_id(),
            log_file_path: None,
            cache_ttl_ms: default_cache_ttl_ms(),
            live_poll_interval_ms: default_live_poll_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, starts from built-in defaults.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `TRYLINE_API_BASE_URL` - Override API base URL
    /// - `TRYLINE_API_KEY` - Override API key
    /// - `TRYLINE_LOG_FILE` - Override log file path
    /// - `TRYLINE_HTTP_TIMEOUT_MS` - Override HTTP timeout in milliseconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    /// Environment variables take precedence over the config file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(constants::env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(api_key) = std::env::var(constants::env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(log_file_path) = std::env::var(constants::env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(constants::env_vars::HTTP_TIMEOUT_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.request_timeout_ms = timeout;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_base_url, &self.log_file_path)
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Live panel polling interval as a [`Duration`].
    pub fn live_poll_interval(&self) -> Duration {
        Duration::from_millis(self.live_poll_interval_ms)
    }

    /// Per-attempt request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Backoff base unit as a [`Duration`].
    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    /// - The API key is masked; only its presence is reported
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("API Key:");
            println!(
                "{}",
                if config.api_key.is_empty() {
                    "(not set)"
                } else {
                    "(set)"
                }
            );
            println!("────────────────────────────────────");
            println!("Season:");
            println!("{}", config.season_id);
            println!("────────────────────────────────────");
            println!("Cache TTL / Live Poll / Timeout:");
            println!(
                "{} ms / {} ms / {} ms",
                config.cache_ttl_ms, config.live_poll_interval_ms, config.request_timeout_ms
            );
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/tryline.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the
    /// base URL carries an https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_base_url = if !self.api_base_url.starts_with("https://") {
            format!(
                "https://{}",
                self.api_base_url.trim_start_matches("http://")
            )
        } else {
            self.api_base_url.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_base_url,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
