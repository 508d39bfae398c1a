//! Shared helpers for the integration suite.

use hubspot_api::{AuthMethod, ClientConfig, HubSpot};
use wiremock::MockServer;

/// A facade pointed at `server`, with request tracing off.
pub fn hubspot_for(server: &MockServer, auth: AuthMethod) -> HubSpot {
    let config = ClientConfig::builder()
        .with_base_url(server.uri())
        .with_tracing(false)
        .build();
    HubSpot::with_config(auth, config).expect("facade should build")
}

pub fn token_body(access_token: &str, expires_in: i64) -> serde_json::Value {
    serde_json::json!({
        "access_token": access_token,
        "refresh_token": "refresh-token",
        "expires_in": expires_in
    })
}
