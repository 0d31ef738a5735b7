use crate::application::session::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOGIN_TIMEOUT_SECS, DEFAULT_POLL_ATTEMPTS,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_PUBLIC_URL,
};
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_origin};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Origin every relative request path is joined to
    pub base_url: String,
    /// Bounded wait applied to login, in seconds
    pub login_timeout_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Where the session token lives
pub struct SessionConfig {
    /// JSON file holding the token; in-memory storage when `None`
    pub token_file: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Order status polling settings
pub struct PollingConfig {
    /// Seconds between two polls
    pub interval_secs: u64,
    /// Polls before giving up
    pub max_attempts: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the storefront client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Public origin of the storefront, used to build checkout and order links
    pub public_url: String,
    /// Session token storage
    pub session: SessionConfig,
    /// Order status polling
    pub polling: PollingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `STOREFRONT_API_BASE_URL` | `http://localhost:5000` |
    /// | `STOREFRONT_PUBLIC_URL` | `http://localhost:3000` |
    /// | `STOREFRONT_TOKEN_FILE` | unset (memory) |
    /// | `STOREFRONT_LOGIN_TIMEOUT_SECS` | `5` |
    /// | `STOREFRONT_POLL_INTERVAL_SECS` | `5` |
    /// | `STOREFRONT_POLL_MAX_ATTEMPTS` | `60` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_origin("STOREFRONT_API_BASE_URL", DEFAULT_API_BASE_URL),
                login_timeout_secs: get_env_or_default(
                    "STOREFRONT_LOGIN_TIMEOUT_SECS",
                    DEFAULT_LOGIN_TIMEOUT_SECS,
                ),
            },
            public_url: get_env_origin("STOREFRONT_PUBLIC_URL", DEFAULT_PUBLIC_URL),
            session: SessionConfig {
                token_file: get_env_or_none("STOREFRONT_TOKEN_FILE"),
            },
            polling: PollingConfig {
                interval_secs: get_env_or_default(
                    "STOREFRONT_POLL_INTERVAL_SECS",
                    DEFAULT_POLL_INTERVAL_SECS,
                ),
                max_attempts: get_env_or_default("STOREFRONT_POLL_MAX_ATTEMPTS", DEFAULT_POLL_ATTEMPTS),
            },
        }
    }

    /// Configuration pointing at `base_url`, everything else at its default
    ///
    /// Does not read the environment.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                login_timeout_secs: DEFAULT_LOGIN_TIMEOUT_SECS,
            },
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            session: SessionConfig { token_file: None },
            polling: PollingConfig {
                interval_secs: DEFAULT_POLL_INTERVAL_SECS,
                max_attempts: DEFAULT_POLL_ATTEMPTS,
            },
        }
    }

    /// Bounded wait for the login call
    #[must_use]
    pub fn login_timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.login_timeout_secs)
    }

    /// Delay between two order status polls
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_secs)
    }

    /// Builds the token store this configuration asks for
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        match &self.session.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        }
    }
}
