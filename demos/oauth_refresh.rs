//! OAuth refresh-token flow
//!
//! The first request refreshes the access token; later requests reuse the
//! cached token until it is within ten minutes of expiry.
//!
//! Run with:
//!   HUBSPOT_CLIENT_ID=... HUBSPOT_CLIENT_SECRET=... HUBSPOT_REFRESH_TOKEN=... \
//!     cargo run --example oauth_refresh

use hubspot_api::auth::{OAuth, OAuthConfig, OAuthTokenManager};
use hubspot_api::client::HubSpotClient;
use hubspot_api::crm::{Company, Crm};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hubspot_auth=debug,hubspot_client=info")),
        )
        .init();

    let config = OAuthConfig::from_env()?;
    config.validate()?;

    let oauth = OAuth::new(OAuthTokenManager::new(config));
    let client = HubSpotClient::builder().authenticator(oauth.clone()).build()?;
    let crm = Crm::new(client);

    let found = crm.companies().search_by_domain("hubspot.com").await?;
    println!("Companies on hubspot.com: {}", found.total);
    for company in &found.results {
        let Company { name, domain, .. } = &company.properties;
        println!("  {} {:?} {:?}", company.id, name, domain);
    }

    if let Some(token) = oauth.manager().cached_token().await {
        println!("Access token valid until {:?}", token.expires_at);
    }

    // Served from the cache, no second refresh.
    let again = crm.companies().search_by_name("HubSpot").await?;
    println!("Companies named HubSpot: {}", again.total);

    Ok(())
}
