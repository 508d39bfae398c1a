//! High-level HubSpot client with typed HTTP methods.
//!
//! `HubSpotClient` binds a base URL, an HTTP client and exactly one
//! [`Authenticator`]. Every request is resolved against the base URL, passed
//! through the authenticator, sent once, and its body decoded into the
//! caller's type.
//!
//! ## Security
//!
//! - Credentials live inside the authenticator, whose Debug output is redacted
//! - Request bodies are skipped in tracing spans

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;
use url::Url;

use crate::auth::{ApiKey, Authenticator, PrivateAppToken};
use crate::client::HsHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::MIME_JSON;

/// HubSpot API client.
///
/// Cheap to clone; clones share the connection pool and the authenticator.
///
/// # Example
///
/// ```rust,ignore
/// use hubspot_client::{HubSpotClient, ResponseResource};
///
/// let client = HubSpotClient::builder()
///     .private_app_token("pat-na1-...")
///     .build()?;
///
/// let contact: ResponseResource<serde_json::Value> =
///     client.get("crm/v3/objects/contacts/51").await?;
/// ```
#[derive(Clone)]
pub struct HubSpotClient {
    http: HsHttpClient,
    base_url: Url,
    authenticator: Arc<dyn Authenticator>,
}

impl fmt::Debug for HubSpotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubSpotClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version())
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

impl HubSpotClient {
    /// Create a client builder.
    pub fn builder() -> HubSpotClientBuilder {
        HubSpotClientBuilder::default()
    }

    /// Create a client with default configuration and the given authenticator.
    pub fn new(authenticator: impl Authenticator + 'static) -> Result<Self> {
        Self::builder().authenticator(authenticator).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the API version used to build resource paths.
    pub fn api_version(&self) -> &str {
        &self.http.config().api_version
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &HsHttpClient {
        &self.http
    }

    /// Resolve a relative path against the base URL.
    ///
    /// A single leading `/` is stripped; any query string in `path` is kept.
    pub fn url(&self, path: &str) -> Result<Url> {
        let path = path.strip_prefix('/').unwrap_or(path);
        Ok(self.base_url.join(path)?)
    }

    /// Build a versioned resource path, e.g. `api_path("crm", "objects/contacts")`
    /// yields `crm/v3/objects/contacts`.
    pub fn api_path(&self, area: &str, resource: &str) -> String {
        self.http.config().api_path(area, resource)
    }

    /// Build an unauthenticated request for a relative path.
    pub fn request(&self, method: RequestMethod, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        Ok(RequestBuilder::new(method, url).header("Content-Type", MIME_JSON))
    }

    /// Authenticate and send a request.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = self.authenticator.authenticate(request).await?;
        self.http.execute(request).await
    }

    async fn create_and_do<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.create_and_do(self.request(RequestMethod::Get, path)?)
            .await
    }

    /// GET request with query options.
    #[instrument(skip(self, options))]
    pub async fn get_with_options<T, Q>(&self, path: &str, options: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .request(RequestMethod::Get, path)?
            .query_struct(options)?;
        self.create_and_do(request).await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body))]
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(RequestMethod::Post, path)?.json(body)?;
        self.create_and_do(request).await
    }

    /// POST request without a body.
    #[instrument(skip(self))]
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.create_and_do(self.request(RequestMethod::Post, path)?)
            .await
    }

    /// POST a pre-encoded `multipart/form-data` body.
    #[instrument(skip(self, body))]
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        boundary: &str,
        body: impl Into<Bytes>,
    ) -> Result<T> {
        let request = self
            .request(RequestMethod::Post, path)?
            .multipart(boundary, body);
        self.create_and_do(request).await
    }

    /// PUT request with JSON body and response.
    #[instrument(skip(self, body))]
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(RequestMethod::Put, path)?.json(body)?;
        self.create_and_do(request).await
    }

    /// PUT request without a body.
    #[instrument(skip(self))]
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.create_and_do(self.request(RequestMethod::Put, path)?)
            .await
    }

    /// PATCH request with JSON body and response.
    #[instrument(skip(self, body))]
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(RequestMethod::Patch, path)?.json(body)?;
        self.create_and_do(request).await
    }

    /// DELETE request. The response body is discarded.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(RequestMethod::Delete, path)?)
            .await?;
        Ok(())
    }

    /// DELETE request with query options.
    #[instrument(skip(self, options))]
    pub async fn delete_with_options<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        options: &Q,
    ) -> Result<()> {
        let request = self
            .request(RequestMethod::Delete, path)?
            .query_struct(options)?;
        self.execute(request).await?;
        Ok(())
    }
}

/// Builder for [`HubSpotClient`].
#[derive(Debug, Default)]
pub struct HubSpotClientBuilder {
    config: ClientConfig,
    authenticator: Option<Arc<dyn Authenticator>>,
    http_client: Option<reqwest::Client>,
}

impl HubSpotClientBuilder {
    /// Set the client configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Use an existing reqwest client instead of building one from the config.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Bind the authenticator.
    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Bind a shared authenticator.
    pub fn shared_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Authenticate with a legacy API key.
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.authenticator(ApiKey::new(key))
    }

    /// Authenticate with a private app access token.
    pub fn private_app_token(self, token: impl Into<String>) -> Self {
        self.authenticator(PrivateAppToken::new(token))
    }

    /// Build the client.
    ///
    /// Fails if no authenticator was bound or the base URL is invalid.
    pub fn build(self) -> Result<HubSpotClient> {
        let authenticator = self.authenticator.ok_or_else(|| {
            Error::new(ErrorKind::Config(
                "the authentication method is not set".to_string(),
            ))
        })?;

        let base_url = parse_base_url(&self.config.base_url)?;

        let http = match self.http_client {
            Some(inner) => HsHttpClient::from_reqwest(inner, self.config),
            None => HsHttpClient::new(self.config)?,
        };

        Ok(HubSpotClient {
            http,
            base_url,
            authenticator,
        })
    }
}

/// Parse a base URL, ensuring relative paths resolve beneath it.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
