//! Custom object schemas.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use hubspot_client::{HsBool, HsInt, HsStr, HsTime, HubSpotClient, RequestQueryOption, Result};

use crate::properties::Property;
use crate::segment;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAssociation {
    #[serde(default)]
    pub from_object_type_id: Option<HsStr>,
    #[serde(default)]
    pub to_object_type_id: Option<HsStr>,
    #[serde(default)]
    pub name: Option<HsStr>,
    #[serde(default)]
    pub id: Option<HsStr>,
    #[serde(default)]
    pub created_at: Option<HsTime>,
    #[serde(default)]
    pub updated_at: Option<HsTime>,
    #[serde(default)]
    pub cardinality: Option<HsStr>,
    #[serde(default)]
    pub inverse_cardinality: Option<HsStr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaLabels {
    #[serde(default)]
    pub singular: Option<HsStr>,
    #[serde(default)]
    pub plural: Option<HsStr>,
}

/// Definition of a custom object type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<SchemaLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_display_property: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type_id: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<SchemaAssociation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_type: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_properties: Vec<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restorable: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub searchable_properties: Vec<HsStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_display_properties: Vec<HsStr>,
    #[serde(default)]
    pub portal_id: Option<HsInt>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaList {
    #[serde(default)]
    pub results: Vec<Schema>,
}

/// Client for `crm/<version>/schemas`.
#[derive(Debug, Clone)]
pub struct SchemaService {
    client: HubSpotClient,
    path: String,
}

impl SchemaService {
    pub fn new(client: HubSpotClient) -> Self {
        let path = client.api_path("crm", "schemas");
        Self { client, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn schema_path(&self, object_type: &str) -> String {
        format!("{}/{}", self.path, segment(object_type))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<SchemaList> {
        self.client.get(&self.path).await
    }

    /// Create a custom object type.
    #[instrument(skip(self, request))]
    pub async fn create<B: Serialize + ?Sized>(&self, request: &B) -> Result<Schema> {
        self.client.post(&self.path, request).await
    }

    /// Get a schema by object type id (`2-123456`) or fully qualified name.
    #[instrument(skip(self))]
    pub async fn get(&self, object_type: &str) -> Result<Schema> {
        self.client.get(&self.schema_path(object_type)).await
    }

    #[instrument(skip(self, request))]
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        object_type: &str,
        request: &B,
    ) -> Result<Schema> {
        self.client
            .patch(&self.schema_path(object_type), request)
            .await
    }

    /// Delete a schema. Pass `archived = true` to purge an already archived one.
    #[instrument(skip(self, option))]
    pub async fn delete(
        &self,
        object_type: &str,
        option: Option<&RequestQueryOption>,
    ) -> Result<()> {
        let default = RequestQueryOption::default();
        self.client
            .delete_with_options(&self.schema_path(object_type), option.unwrap_or(&default))
            .await
    }
}
