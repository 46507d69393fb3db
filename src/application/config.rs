use crate::constants::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;
use tracing::{debug, error};

fn serialize_redacted<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("***")
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Authentication credentials for the BuiltWith API
pub struct Credentials {
    /// API key sent as the `KEY` parameter; never printed
    #[serde(serialize_with = "serialize_redacted")]
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL, without the endpoint path
    pub base_url: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RestApiConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the BuiltWith clients
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// Loads `.env` if present, then reads `BUILTWITH_API_KEY`,
    /// `BUILTWITH_BASE_URL` and `BUILTWITH_TIMEOUT`. A missing API key is only
    /// logged: the API rejects the first request instead.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key: Option<String> = get_env_or_none(API_KEY_ENV);
        if api_key.is_none() {
            error!("{} not found in environment variables or .env file", API_KEY_ENV);
        }

        Config {
            credentials: Credentials {
                api_key: api_key.unwrap_or_default(),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("BUILTWITH_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("BUILTWITH_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Builds a configuration with an explicit API key and default REST settings
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Replaces the base URL, e.g. to point at a mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Replaces the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Full URL for an endpoint path and format extension
    ///
    /// `endpoint_url("lists12/api", "json")` gives
    /// `https://api.builtwith.com/lists12/api.json`.
    #[must_use]
    pub fn endpoint_url(&self, path: &str, extension: &str) -> String {
        format!(
            "{}/{}.{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/'),
            extension
        )
    }
}
