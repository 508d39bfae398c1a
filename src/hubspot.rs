//! Single entry point binding one authentication method to every service.

use std::fmt;

use hubspot_auth::{OAuth, OAuthConfig, OAuthTokenManager};
use hubspot_client::{ClientConfig, Error, HsHttpClient, HubSpotClient, Result};
use tracing::debug;

#[cfg(feature = "crm")]
use hubspot_crm::Crm;
#[cfg(feature = "marketing")]
use hubspot_marketing::{Conversations, Marketing};

/// How requests are authenticated.
///
/// Credentials are redacted in Debug output.
#[derive(Clone)]
pub enum AuthMethod {
    /// Legacy developer API key, sent as the `hapikey` query parameter.
    ApiKey(String),
    /// Private app access token, sent as a bearer token.
    PrivateAppToken(String),
    /// OAuth refresh-token flow; the access token is refreshed on demand.
    OAuth(OAuthConfig),
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&"[REDACTED]").finish(),
            Self::PrivateAppToken(_) => f
                .debug_tuple("PrivateAppToken")
                .field(&"[REDACTED]")
                .finish(),
            Self::OAuth(config) => f.debug_tuple("OAuth").field(config).finish(),
        }
    }
}

impl AuthMethod {
    /// Pick an authentication method from the environment.
    ///
    /// `HUBSPOT_PRIVATE_APP_TOKEN` wins over `HUBSPOT_API_KEY`; without
    /// either, the OAuth variables read by [`OAuthConfig::from_env`] are
    /// required.
    pub fn from_env() -> Result<Self> {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        if let Some(token) = non_empty("HUBSPOT_PRIVATE_APP_TOKEN") {
            return Ok(Self::PrivateAppToken(token));
        }
        if let Some(key) = non_empty("HUBSPOT_API_KEY") {
            return Ok(Self::ApiKey(key));
        }
        Ok(Self::OAuth(OAuthConfig::from_env()?))
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api_key",
            Self::PrivateAppToken(_) => "private_app_token",
            Self::OAuth(_) => "oauth",
        }
    }
}

/// HubSpot API entry point.
///
/// All services share one [`HubSpotClient`], and with it one connection pool
/// and one authenticator. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct HubSpot {
    client: HubSpotClient,
    #[cfg(feature = "crm")]
    crm: Crm,
    #[cfg(feature = "marketing")]
    marketing: Marketing,
    #[cfg(feature = "marketing")]
    conversations: Conversations,
}

impl HubSpot {
    /// Connect to `https://api.hubapi.com/` with the default configuration.
    pub fn new(auth: AuthMethod) -> Result<Self> {
        Self::with_config(auth, ClientConfig::default())
    }

    /// Connect with a custom configuration.
    ///
    /// With OAuth, the token endpoint is resolved against the configured base
    /// URL, so a test server or proxy receives token refreshes as well.
    /// Token refreshes go through the same connection pool as API calls and
    /// are bounded by the same timeouts.
    pub fn with_config(auth: AuthMethod, config: ClientConfig) -> Result<Self> {
        debug!(
            method = auth.name(),
            base_url = %config.base_url,
            api_version = %config.api_version,
            "Creating HubSpot client"
        );

        let http = HsHttpClient::new(config.clone())?;
        let builder = HubSpotClient::builder()
            .http_client(http.inner().clone())
            .config(config);
        let builder = match auth {
            AuthMethod::ApiKey(key) => builder.api_key(key),
            AuthMethod::PrivateAppToken(token) => builder.private_app_token(token),
            AuthMethod::OAuth(oauth) => {
                oauth.validate()?;
                let manager = OAuthTokenManager::for_base_url(oauth, &http.config().base_url)?
                    .with_http_client(http.inner().clone());
                builder.authenticator(OAuth::new(manager))
            }
        };

        Ok(Self::from_client(builder.build()?))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: HubSpotClient) -> Self {
        Self {
            #[cfg(feature = "crm")]
            crm: Crm::new(client.clone()),
            #[cfg(feature = "marketing")]
            marketing: Marketing::new(client.clone()),
            #[cfg(feature = "marketing")]
            conversations: Conversations::new(client.clone()),
            client,
        }
    }

    /// The underlying client, for endpoints without a typed service.
    pub fn client(&self) -> &HubSpotClient {
        &self.client
    }

    #[cfg(feature = "crm")]
    pub fn crm(&self) -> &Crm {
        &self.crm
    }

    #[cfg(feature = "marketing")]
    pub fn marketing(&self) -> &Marketing {
        &self.marketing
    }

    #[cfg(feature = "marketing")]
    pub fn conversations(&self) -> &Conversations {
        &self.conversations
    }
}

impl TryFrom<AuthMethod> for HubSpot {
    type Error = Error;

    fn try_from(auth: AuthMethod) -> Result<Self> {
        Self::new(auth)
    }
}
