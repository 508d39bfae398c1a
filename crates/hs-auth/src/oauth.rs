//! OAuth 2.0 refresh-token flow.
//!
//! [`OAuthTokenManager`] owns one cached access token. The cache is checked on
//! every request and refreshed against the token endpoint when it is empty or
//! within ten minutes of expiry.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use hubspot_client::{is_error_status, Authenticator, RequestBuilder};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};

/// Token endpoint path, relative to the API base URL.
pub const OAUTH_TOKEN_PATH: &str = "oauth/v1/token";

/// The only grant type HubSpot's token endpoint supports for refreshes.
pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";

/// Seconds subtracted from a token's lifetime to avoid using it at the edge of expiry.
pub const EXPIRY_MARGIN_SECS: i64 = 600;

/// OAuth configuration for a HubSpot app.
///
/// `client_secret` and `refresh_token` are redacted in Debug output.
#[derive(Clone, Default)]
pub struct OAuthConfig {
    pub grant_type: String,
    pub client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

impl OAuthConfig {
    /// Create a refresh-token configuration.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: GRANT_TYPE_REFRESH_TOKEN.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Override the grant type.
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `HUBSPOT_CLIENT_ID`, `HUBSPOT_CLIENT_SECRET` and
    /// `HUBSPOT_REFRESH_TOKEN`; `HUBSPOT_GRANT_TYPE` is optional.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| Error::new(ErrorKind::EnvVar(name.to_string())))
        };

        let config = Self::new(
            var("HUBSPOT_CLIENT_ID")?,
            var("HUBSPOT_CLIENT_SECRET")?,
            var("HUBSPOT_REFRESH_TOKEN")?,
        );

        Ok(match std::env::var("HUBSPOT_GRANT_TYPE") {
            Ok(grant_type) => config.with_grant_type(grant_type),
            Err(_) => config,
        })
    }

    /// Check that every field the token endpoint requires is non-empty.
    ///
    /// The error names each missing field, comma-joined, in form order.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = self
            .to_form()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::MissingOptions(missing.join(","))))
        }
    }

    /// The form fields posted to the token endpoint.
    pub fn to_form(&self) -> [(&'static str, &str); 4] {
        [
            ("grant_type", self.grant_type.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
        ]
    }
}

/// An access token issued by the token endpoint.
///
/// Token values are redacted in Debug output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Lifetime in seconds, as reported by the token endpoint.
    #[serde(default)]
    pub expires_in: i64,
    /// Instant after which the token must be refreshed. Set by [`OAuthToken::set_expiry`].
    #[serde(skip)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl OAuthToken {
    /// Compute `expires_at` as `issued_at + expires_in - 10 minutes`.
    pub fn set_expiry(&mut self, issued_at: DateTime<Utc>) {
        self.expires_at = Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .and_then(|at| at.checked_sub_signed(Duration::seconds(EXPIRY_MARGIN_SECS)));
    }

    /// True when no expiry was computed or the expiry is not after `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => true,
        }
    }

    /// True when both token strings are present and the token has not expired.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty() && !self.is_expired(now)
    }
}

/// Caches one access token and refreshes it on demand.
///
/// The cache lock is held across the whole check-and-refresh, so concurrent
/// callers that find a stale token wait for a single refresh and share its
/// result. A failed refresh leaves the cache as it was.
pub struct OAuthTokenManager {
    config: OAuthConfig,
    token_url: String,
    http_client: reqwest::Client,
    token: Mutex<Option<OAuthToken>>,
}

impl fmt::Debug for OAuthTokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthTokenManager")
            .field("config", &self.config)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

impl OAuthTokenManager {
    /// Create a manager against the default HubSpot token endpoint.
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            config,
            token_url: format!("{}{}", hubspot_client::DEFAULT_BASE_URL, OAUTH_TOKEN_PATH),
            http_client: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    /// Create a manager whose token endpoint lives under `base_url`.
    pub fn for_base_url(config: OAuthConfig, base_url: &str) -> Result<Self> {
        let base = hubspot_client::parse_base_url(base_url)
            .map_err(|e| Error::new(ErrorKind::Config(e.to_string())))?;
        Ok(Self::new(config).with_token_url(base.join(OAUTH_TOKEN_PATH)?))
    }

    /// Override the token endpoint URL.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Use an existing reqwest client for token refreshes.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Seed the cache with a previously issued token.
    pub fn with_token(self, token: OAuthToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
            ..self
        }
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// A snapshot of the cached token, without refreshing.
    pub async fn cached_token(&self) -> Option<OAuthToken> {
        self.token.lock().await.clone()
    }

    /// Return the cached token, refreshing it first if it is absent or expired.
    #[instrument(skip(self), fields(token_url = %self.token_url))]
    pub async fn retrieve_token(&self) -> Result<OAuthToken> {
        let mut slot = self.token.lock().await;

        if let Some(token) = slot.as_ref().filter(|t| t.is_valid(Utc::now())) {
            return Ok(token.clone());
        }

        let body = self.fetch_token().await?;
        if body.is_empty() {
            return Err(Error::new(ErrorKind::MissingToken));
        }

        let token = parse_token(&body, Utc::now())?;
        debug!(expires_at = ?token.expires_at, "OAuth access token refreshed");
        *slot = Some(token.clone());

        Ok(token)
    }

    async fn fetch_token(&self) -> Result<Vec<u8>> {
        self.config.validate()?;

        debug!("Refreshing OAuth access token");
        let body = serde_urlencoded::to_string(self.config.to_form())?;

        let response = self
            .http_client
            .post(&self.token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?.to_vec();

        if is_error_status(status) {
            return Err(Error::new(ErrorKind::Authorize(
                String::from_utf8_lossy(&bytes).into_owned(),
            )));
        }

        Ok(bytes)
    }
}

fn parse_token(body: &[u8], issued_at: DateTime<Utc>) -> Result<OAuthToken> {
    let mut token: OAuthToken = serde_json::from_slice(body)?;
    token.set_expiry(issued_at);

    if !token.is_valid(issued_at) {
        return Err(Error::new(ErrorKind::InvalidToken));
    }

    Ok(token)
}

/// Authenticator that attaches the managed OAuth access token as a bearer token.
#[derive(Debug, Clone)]
pub struct OAuth {
    manager: Arc<OAuthTokenManager>,
}

impl OAuth {
    pub fn new(manager: OAuthTokenManager) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }

    /// Share a manager with other holders.
    pub fn from_shared(manager: Arc<OAuthTokenManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &OAuthTokenManager {
        &self.manager
    }
}

#[async_trait]
impl Authenticator for OAuth {
    async fn authenticate(&self, request: RequestBuilder) -> hubspot_client::Result<RequestBuilder> {
        let token = self.manager.retrieve_token().await?;
        Ok(request.bearer_auth(token.access_token))
    }
}
