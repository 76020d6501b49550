//! Configuration for the country data client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// REST Countries endpoint returning every country.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for fetching raw country records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL answering a GET with a JSON array of countries.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_system_proxy(mut self, enable: bool) -> Self {
        self.use_system_proxy = enable;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_use_system_proxy() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("country-atlas/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_rest_countries() {
        let config = FetchConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("country-atlas/"));
        assert!(config.use_system_proxy);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: FetchConfig =
            serde_json::from_str(r#"{"timeout_secs": 5}"#).expect("deserialize config");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn builders_override_fields() {
        let config = FetchConfig::default()
            .with_endpoint("http://localhost:8080/all")
            .with_timeout_secs(2)
            .with_user_agent("test");
        assert_eq!(config.endpoint, "http://localhost:8080/all");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.user_agent, "test");
    }
}
