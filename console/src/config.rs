//! # Console Configuration
//!
//! Configuration loaded from environment variables. Every value has a
//! default, so an empty environment yields a working local setup; malformed
//! values are reported instead of silently replaced.
//!
//! ```rust,no_run
//! use console::config::ConsoleConfig;
//!
//! let config = ConsoleConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), console::core::ApiError>(())
//! ```

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::{ApiError, Result};
use crate::query::QueryOptions;

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";

/// Path segment for admin auth endpoints. The backend has shipped both.
pub const ADMIN_PATHS: [&str; 2] = ["admins", "admin"];

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL, without a trailing slash
    pub api_base_url: String,
    /// `admins` (current) or `admin` (older deployments)
    pub admin_path: String,
    /// Per-request timeout for the transport client
    pub http_timeout: Duration,
    /// Query cache behaviour
    pub query: QueryOptions,
    /// JSON file backing the access token store
    pub token_file: PathBuf,
    /// Directory for rolling log files
    pub log_dir: PathBuf,
    /// Tracing filter directive
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            admin_path: ADMIN_PATHS[0].to_string(),
            http_timeout: Duration::from_secs(10),
            query: QueryOptions::default(),
            token_file: PathBuf::from(".console/storage.json"),
            log_dir: PathBuf::from("logs"),
            log_level: "console=info,warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("CONSOLE_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let admin_path = env::var("CONSOLE_ADMIN_PATH").unwrap_or(defaults.admin_path);

        let http_timeout = env_parse::<u64>("CONSOLE_HTTP_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        let query = QueryOptions {
            retry: env_parse("CONSOLE_QUERY_RETRY")?.unwrap_or(defaults.query.retry),
            retry_delay: env_parse::<u64>("CONSOLE_QUERY_RETRY_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.query.retry_delay),
            stale_time: env_parse::<u64>("CONSOLE_QUERY_STALE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.query.stale_time),
            gc_time: env_parse::<u64>("CONSOLE_QUERY_GC_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.query.gc_time),
            refetch_on_window_focus: env::var("CONSOLE_REFETCH_ON_FOCUS")
                .map(|v| v == "1")
                .unwrap_or(defaults.query.refetch_on_window_focus),
        };

        let token_file = env::var("CONSOLE_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.token_file);

        let log_dir = env::var("CONSOLE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Self {
            api_base_url,
            admin_path,
            http_timeout,
            query,
            token_file,
            log_dir,
            log_level,
        })
    }

    /// Validate values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ApiError::Config(format!(
                "CONSOLE_API_BASE_URL must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }

        if !ADMIN_PATHS.contains(&self.admin_path.as_str()) {
            return Err(ApiError::Config(format!(
                "CONSOLE_ADMIN_PATH must be one of {:?}, got {}",
                ADMIN_PATHS, self.admin_path
            )));
        }

        if self.http_timeout.is_zero() {
            return Err(ApiError::Config(
                "CONSOLE_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read and parse an optional environment variable.
fn env_parse<T: FromStr>(name: &'static str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ApiError::Config(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.admin_path, "admins");
        assert_eq!(config.query.retry, 1);
        assert!(!config.query.refetch_on_window_focus);
    }

    #[test]
    fn test_validate_rejects_unknown_admin_path() {
        let config = ConsoleConfig {
            admin_path: "staff".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let config = ConsoleConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ConsoleConfig {
            http_timeout: Duration::ZERO,
            ..ConsoleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
