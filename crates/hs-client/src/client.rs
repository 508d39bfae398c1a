//! Core HTTP client with HubSpot error handling.

use tracing::{debug, info, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder};
use crate::response::{Response, ResponseExt};

/// HTTP client for HubSpot APIs.
///
/// Sends exactly one attempt per request; retry policy is left to callers.
#[derive(Debug, Clone)]
pub struct HsHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HsHttpClient {
    /// Create a new HTTP client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Wrap an existing reqwest client.
    ///
    /// Timeouts, pooling and the user agent come from the given client;
    /// `config` still drives URL resolution and tracing.
    pub fn from_reqwest(inner: reqwest::Client, config: ClientConfig) -> Self {
        Self { inner, config }
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying reqwest client, shared by clones.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Execute a request, converting error statuses into [`ErrorKind::Api`].
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut url = Url::parse(&request.url)?;
        if !request.query_params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query_params.iter());
        }

        let mut req = self.inner.request(request.method.to_reqwest(), url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.json(&value),
                RequestBody::Bytes(bytes) => req.body(bytes),
                RequestBody::Form(data) => req.body(serde_urlencoded::to_string(&data)?),
            };
        }

        if self.config.enable_tracing {
            debug!(
                method = ?request.method,
                url = %request.url,
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Response::new(response).check_hubspot_error().await
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }
}
