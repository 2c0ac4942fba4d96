//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; unset variables fall back to their defaults:
//! - `MOSTRADOR_API_BASE_URL` - Backend base URL (default: <http://localhost:3000>)
//! - `MOSTRADOR_TIMEZONE` - IANA timezone for report date keys (default: America/Bogota)
//! - `MOSTRADOR_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30)

use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Data-layer configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend.
    pub base_url: Url,
    /// IANA timezone the store operates in, used for report date keys.
    pub timezone: Tz,
    /// Hard per-request timeout enforced by the HTTP client.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration for a known backend, with defaults for everything else.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timezone: chrono_tz::America::Bogota,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a set variable does not
    /// parse; unset variables use defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(
            "MOSTRADOR_API_BASE_URL",
            &get_env_or_default("MOSTRADOR_API_BASE_URL", DEFAULT_BASE_URL),
        )?;
        let timezone = parse_timezone(
            "MOSTRADOR_TIMEZONE",
            &get_env_or_default("MOSTRADOR_TIMEZONE", "America/Bogota"),
        )?;
        let request_timeout = parse_timeout_secs(
            "MOSTRADOR_REQUEST_TIMEOUT_SECS",
            &get_env_or_default(
                "MOSTRADOR_REQUEST_TIMEOUT_SECS",
                &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            ),
        )?;

        Ok(Self {
            base_url,
            timezone,
            request_timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_timezone(key: &str, raw: &str) -> Result<Tz, ConfigError> {
    raw.parse::<Tz>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_timeout_secs(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = ClientConfig::from_env().expect("defaults should load");
        assert_eq!(config.timezone, chrono_tz::America::Bogota);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = parse_base_url("MOSTRADOR_API_BASE_URL", "not a url").expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "MOSTRADOR_API_BASE_URL"));
    }

    #[test]
    fn test_invalid_timezone_is_rejected() {
        assert!(parse_timezone("MOSTRADOR_TIMEZONE", "America/Nowhere").is_err());
        assert!(parse_timezone("MOSTRADOR_TIMEZONE", "Asia/Tokyo").is_ok());
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        assert!(parse_timeout_secs("MOSTRADOR_REQUEST_TIMEOUT_SECS", "soon").is_err());
        assert_eq!(
            parse_timeout_secs("MOSTRADOR_REQUEST_TIMEOUT_SECS", "5").expect("valid"),
            Duration::from_secs(5)
        );
    }
}
