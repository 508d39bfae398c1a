//! Error responses decoded into structured errors.

use super::common::hubspot_for;
use hubspot_api::client::{INVALID_EMAIL_ERROR, UNKNOWN_DETAIL_ERROR};
use hubspot_api::crm::Contact;
use hubspot_api::{AuthMethod, ErrorKind, HsStr};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pat() -> AuthMethod {
    AuthMethod::PrivateAppToken("pat-test".into())
}

#[tokio::test]
async fn test_validation_details_are_mined_from_message() {
    let server = MockServer::start().await;

    let message = concat!(
        r#"Property values were not valid: [{"isValid":false,"message":"Email address bh@ is invalid","error":"INVALID_EMAIL","name":"email"},"#,
        r#"{"isValid":false,"message":"x is not a valid date","error":"INVALID_DATE","name":"closedate"}]"#
    );
    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": message,
            "correlationId": "3d4b4e9e-8a6c-4f1b-9f3e-1c2b3a4d5e6f",
            "category": "VALIDATION_ERROR"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let err = hubspot
        .crm()
        .contacts()
        .create(&Contact {
            email: Some(HsStr::new("bh@")),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.is_validation_error());
    assert_eq!(err.status(), Some(400));
    let api = err.as_api_error().expect("structured error");
    assert_eq!(api.correlation_id, "3d4b4e9e-8a6c-4f1b-9f3e-1c2b3a4d5e6f");
    assert_eq!(api.details.len(), 2);
    assert!(api.has_detail(INVALID_EMAIL_ERROR));
    assert_eq!(api.details[1].name, "closedate");
}

#[tokio::test]
async fn test_conflict_keeps_context() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "status": "error",
            "message": "Contact already exists. Existing ID: 51",
            "category": "CONFLICT",
            "context": {"id": ["51"]}
        })))
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let err = hubspot
        .crm()
        .contacts()
        .create(&Contact::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(!err.is_validation_error());
    let api = err.as_api_error().unwrap();
    assert_eq!(api.context.id, vec!["51"]);
    assert!(api.details.is_empty());
    assert_eq!(api.to_string(), "409: Contact already exists. Existing ID: 51");
}

#[tokio::test]
async fn test_malformed_detail_becomes_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/crm/v3/objects/deals/9"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid input: {oops}",
            "category": "VALIDATION_ERROR"
        })))
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let err = hubspot
        .crm()
        .deals()
        .update("9", &hubspot_api::crm::Deal::default())
        .await
        .unwrap_err();

    let api = err.as_api_error().unwrap();
    assert_eq!(api.details.len(), 1);
    assert_eq!(api.details[0].error, UNKNOWN_DETAIL_ERROR);
}

#[tokio::test]
async fn test_unreadable_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/crm/v3/objects/notes/3"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let err = hubspot.crm().notes().delete("3").await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Api(_)));
    assert_eq!(err.status(), Some(502));
    assert!(err
        .as_api_error()
        .unwrap()
        .message
        .starts_with("unable to read response from hubspot"));
}

#[tokio::test]
async fn test_null_fields_do_not_hide_category() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "resource not found",
            "correlationId": "c0ffee",
            "category": "OBJECT_NOT_FOUND",
            "context": null,
            "links": null,
            "details": null
        })))
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let err = hubspot
        .crm()
        .contacts()
        .get::<Contact>("404", None)
        .await
        .unwrap_err();

    let api = err.as_api_error().expect("structured error");
    assert_eq!(api.category, "OBJECT_NOT_FOUND");
    assert_eq!(api.correlation_id, "c0ffee");
    assert!(api.details.is_empty());
}
