//! Marketing and conversations services through the facade.

use super::common::hubspot_for;
use hubspot_api::marketing::{
    IdentificationTokenRequest, SendSingleEmailMessage, SendSingleEmailProperties, Statistics,
};
use hubspot_api::AuthMethod;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_visitor_token_then_transactional_send() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/conversations/v3/visitor-identification/tokens/create"))
        .and(body_json(json!({
            "email": "visitor@example.com",
            "firstName": "Gob",
            "lastName": "Bluth"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "vid-token"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/marketing/v3/transactional/single-email/send"))
        .and(body_json(json!({
            "emailId": "77",
            "message": {"to": "visitor@example.com", "sendId": "welcome-visitor"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "requestedAt": "2024-05-01T12:00:00Z",
            "statusId": "s-1",
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, AuthMethod::ApiKey("demo-key".into()));

    let request = IdentificationTokenRequest::new("visitor@example.com").with_name("Gob", "Bluth");
    let token = hubspot
        .conversations()
        .visitor_identification()
        .generate_identification_token(&request)
        .await
        .expect("token should be issued");
    assert_eq!(token.token, "vid-token");

    let sent = hubspot
        .marketing()
        .transactional()
        .send_single_email(&SendSingleEmailProperties {
            email_id: "77".into(),
            message: SendSingleEmailMessage {
                to: "visitor@example.com".into(),
                send_id: "welcome-visitor".into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .expect("send should succeed");
    assert_eq!(sent.status, "PENDING");
}

#[tokio::test]
async fn test_email_statistics_ignore_api_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/marketing-emails/v1/emails/with-statistics/12"))
        .and(query_param("hapikey", "demo-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "Launch",
            "stats": {"counters": {"sent": 3}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = hubspot_api::ClientConfig::builder()
        .with_base_url(server.uri())
        .with_api_version("v4")
        .with_tracing(false)
        .build();
    let hubspot =
        hubspot_api::HubSpot::with_config(AuthMethod::ApiKey("demo-key".into()), config).unwrap();

    let stats: Statistics = hubspot
        .marketing()
        .email()
        .get_statistics(12, None)
        .await
        .expect("statistics should load");
    assert_eq!(stats.name, "Launch");
    assert_eq!(stats.stats.counters.sent, 3);
}
