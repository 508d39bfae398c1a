//! Authentication strategies applied to every outgoing request.
//!
//! An [`Authenticator`] receives each request after it is built and before
//! it is sent. The client holds exactly one authenticator for its lifetime.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::request::RequestBuilder;

/// Query parameter carrying a legacy HubSpot API key.
pub const API_KEY_PARAM: &str = "hapikey";

/// Decorates outgoing requests with credentials.
///
/// Implementations must be safe to call from concurrent requests.
#[async_trait]
pub trait Authenticator: fmt::Debug + Send + Sync {
    /// Apply credentials to the request.
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder>;
}

/// Legacy API key authentication via the `hapikey` query parameter.
///
/// The key is appended on every call; a request authenticated twice carries
/// the parameter twice.
#[derive(Clone)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for ApiKey {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.query(API_KEY_PARAM, self.key.as_str()))
    }
}

/// Private app access token, sent as a bearer token.
#[derive(Clone)]
pub struct PrivateAppToken {
    token: String,
}

impl PrivateAppToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for PrivateAppToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateAppToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for PrivateAppToken {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.bearer_auth(self.token.as_str()))
    }
}
