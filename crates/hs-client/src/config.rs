//! Transport settings shared by every service built on one client.

use std::time::Duration;

use crate::{DEFAULT_API_VERSION, DEFAULT_BASE_URL};

/// Settings for [`HubSpotClient`](crate::HubSpotClient) and its HTTP pool.
///
/// The API version is only a path segment: services splice it into
/// `<area>/<version>/<resource>`, endpoints that HubSpot pins to an older
/// version ignore it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root every relative request path is joined onto.
    pub base_url: String,
    pub api_version: String,
    /// Send `Accept-Encoding` for gzip and deflate.
    pub accept_compressed: bool,
    /// Whole-request deadline, including reading the body.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
    /// Emit `debug!` events for each request and response.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            accept_compressed: true,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// `<area>/<version>/<resource>` for this configuration.
    pub fn api_path(&self, area: &str, resource: &str) -> String {
        format!("{area}/{}/{resource}", self.api_version)
    }
}

/// Builder for [`ClientConfig`]; unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Point the client at another host, e.g. a sandbox proxy or a mock server.
    /// Defaults to `https://api.hubapi.com/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Version segment for versioned services. Defaults to `v3`.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Turn per-request `debug!` events on or off.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
