use std::time::Duration;

use crate::request::DEFAULT_API_VERSION;

pub const DEFAULT_ENDPOINT: &str = "https://api.buildkite.com";

/// Transport settings for an [`ApiClient`](crate::ApiClient).
///
/// There is no timeout by default; set one here if calls must not block
/// indefinitely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub api_version: u32,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION,
            timeout: None,
            user_agent: format!("buildkite-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientSettings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }
}
