//! # hubspot-auth
//!
//! OAuth authentication for HubSpot apps.
//!
//! ## Security
//!
//! - Client secrets and tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages never carry token values
//!
//! ## Example
//!
//! ```rust,ignore
//! use hubspot_auth::{OAuth, OAuthConfig, OAuthTokenManager};
//! use hubspot_client::HubSpotClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hubspot_client::Error> {
//!     let config = OAuthConfig::from_env()?;
//!     let client = HubSpotClient::builder()
//!         .authenticator(OAuth::new(OAuthTokenManager::new(config)))
//!         .build()?;
//!
//!     // The first request refreshes the access token; later ones reuse it.
//!     let contacts: serde_json::Value = client.get("crm/v3/objects/contacts").await?;
//!
//!     Ok(())
//! }
//! ```

mod error;
mod oauth;

pub use error::{Error, ErrorKind, Result};
pub use oauth::{
    OAuth, OAuthConfig, OAuthToken, OAuthTokenManager, EXPIRY_MARGIN_SECS,
    GRANT_TYPE_REFRESH_TOKEN, OAUTH_TOKEN_PATH,
};
