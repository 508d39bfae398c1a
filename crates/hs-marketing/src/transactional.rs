//! Single-send transactional email.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use hubspot_client::{HubSpotClient, Result};
use hubspot_crm::Contact;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSingleEmailMessage {
    pub to: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    /// Idempotency key; a repeated id is not sent twice.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub send_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
}

/// Body of a single-send request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSingleEmailProperties {
    /// Id of the transactional email template.
    pub email_id: String,
    pub message: SendSingleEmailMessage,
    /// Contact properties to set on the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_properties: Option<Contact>,
    /// Values for the template's custom placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendSingleEmailResponse {
    pub requested_at: String,
    pub status_id: String,
    /// `PENDING`, `PROCESSING`, `CANCELED` or `COMPLETE`.
    pub status: String,
}

/// Client for `marketing/<version>/transactional`.
#[derive(Debug, Clone)]
pub struct Transactional {
    client: HubSpotClient,
    path: String,
}

impl Transactional {
    pub fn new(client: HubSpotClient) -> Self {
        let path = client.api_path("marketing", "transactional");
        Self { client, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Queue one transactional email.
    #[instrument(skip(self, props), fields(email_id = %props.email_id))]
    pub async fn send_single_email(
        &self,
        props: &SendSingleEmailProperties,
    ) -> Result<SendSingleEmailResponse> {
        let path = format!("{}/single-email/send", self.path);
        self.client.post(&path, props).await
    }
}
