//! Authentication selection and the OAuth refresh flow.

use std::time::Duration;

use super::common::{hubspot_for, token_body};
use hubspot_api::{AuthMethod, ClientConfig, HubSpot, OAuthConfig};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_api_key_is_sent_as_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/51"))
        .and(query_param("hapikey", "demo-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "51"})))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, AuthMethod::ApiKey("demo-key".into()));
    let contact: Value = hubspot
        .client()
        .get("crm/v3/objects/contacts/51")
        .await
        .expect("request should succeed");
    assert_eq!(contact["id"], "51");
}

#[tokio::test]
async fn test_private_app_token_is_sent_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/deals/7"))
        .and(header("Authorization", "Bearer pat-na1-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7"})))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, AuthMethod::PrivateAppToken("pat-na1-123".into()));
    let deal: Value = hubspot.client().get("crm/v3/objects/deals/7").await.unwrap();
    assert_eq!(deal["id"], "7");
}

#[tokio::test]
async fn test_oauth_refreshes_once_then_reuses_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("client_id=my-app"))
        .and(body_string_contains("refresh_token=refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", 21600)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/1"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(2)
        .mount(&server)
        .await;

    let oauth = OAuthConfig::new("my-app", "app-secret", "refresh-token");
    let hubspot = hubspot_for(&server, AuthMethod::OAuth(oauth));

    for _ in 0..2 {
        let contact: Value = hubspot
            .client()
            .get("crm/v3/objects/contacts/1")
            .await
            .expect("request should succeed");
        assert_eq!(contact["id"], "1");
    }
}

#[tokio::test]
async fn test_short_lived_token_is_rejected() {
    let server = MockServer::start().await;

    // A lifetime inside the ten minute margin is already stale.
    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", 300)))
        .mount(&server)
        .await;

    let oauth = OAuthConfig::new("my-app", "app-secret", "refresh-token");
    let hubspot = hubspot_for(&server, AuthMethod::OAuth(oauth));

    let err = hubspot
        .client()
        .get::<Value>("crm/v3/objects/contacts/1")
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.to_string().contains("invalid authorization token"));
}

#[tokio::test]
async fn test_token_endpoint_failure_is_an_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"status":"BAD_REFRESH_TOKEN"}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let oauth = OAuthConfig::new("my-app", "app-secret", "refresh-token");
    let hubspot = hubspot_for(&server, AuthMethod::OAuth(oauth));

    let err = hubspot
        .client()
        .get::<Value>("crm/v3/objects/contacts/1")
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.to_string().contains("BAD_REFRESH_TOKEN"));
    assert!(!err.to_string().contains("app-secret"));
}

#[tokio::test]
async fn test_token_refresh_honours_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .and(header("user-agent", "portal-sync/2.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("access-1", 3600))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200))
        .with_user_agent("portal-sync/2.1")
        .with_tracing(false)
        .build();
    let oauth = OAuthConfig::new("my-app", "app-secret", "refresh-token");
    let hubspot = HubSpot::with_config(AuthMethod::OAuth(oauth), config).unwrap();

    let err = tokio::time::timeout(
        Duration::from_secs(3),
        hubspot.client().get::<Value>("crm/v3/objects/contacts/1"),
    )
    .await
    .expect("refresh should be cut off by the client timeout")
    .unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.to_string().contains("HTTP error"));
}
