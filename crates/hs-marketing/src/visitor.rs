//! Visitor identification for the chat widget.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use hubspot_client::{HubSpotClient, Result};

/// Path of the token endpoint. The conversations API is versioned separately
/// from the CRM.
pub const IDENTIFICATION_TOKEN_PATH: &str =
    "conversations/v3/visitor-identification/tokens/create";

/// Identity of a logged-in visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationTokenRequest {
    pub email: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(rename = "lastName", default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

impl IdentificationTokenRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationTokenResponse {
    pub token: String,
}

impl std::fmt::Debug for IdentificationTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentificationTokenResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Client for the visitor identification API.
#[derive(Debug, Clone)]
pub struct VisitorIdentification {
    client: HubSpotClient,
}

impl VisitorIdentification {
    pub fn new(client: HubSpotClient) -> Self {
        Self { client }
    }

    /// Issue a token the chat widget uses to recognise the visitor.
    #[instrument(skip(self, request))]
    pub async fn generate_identification_token(
        &self,
        request: &IdentificationTokenRequest,
    ) -> Result<IdentificationTokenResponse> {
        self.client.post(IDENTIFICATION_TOKEN_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_identification_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/conversations/v3/visitor-identification/tokens/create"))
            .and(header("Authorization", "Bearer pat-test"))
            .and(body_json(json!({
                "email": "gob@bluth.example",
                "firstName": "Gob",
                "lastName": "Bluth"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-123"})))
            .expect(1)
            .mount(&server)
            .await;

        let visitors = VisitorIdentification::new(client_for(&server));
        let request = IdentificationTokenRequest::new("gob@bluth.example").with_name("Gob", "Bluth");
        let response = visitors
            .generate_identification_token(&request)
            .await
            .expect("token request should succeed");

        assert_eq!(response.token, "tok-123");
        assert!(!format!("{response:?}").contains("tok-123"));
    }
}
