//! Property definitions for CRM object types.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use hubspot_client::{HsBool, HsInt, HsStr, HsTime, HubSpotClient, Result};

use crate::segment;

/// One property definition, e.g. `firstname` on `contacts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<HsStr>,
    /// Data type: `string`, `number`, `date`, `datetime`, `enumeration`, `bool`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<HsStr>,
    /// Form control: `text`, `textarea`, `select`, `checkbox`, …
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_user_id: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_object_type: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<HsInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_options: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_unique_value: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hubspot_defined: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_currency_symbol: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_metadata: Option<PropertyModificationMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_field: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_formula: Option<HsStr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyModificationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archivable: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_definition: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_value: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_options: Option<HsBool>,
}

/// A choice of an enumeration property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<HsInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<HsBool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    #[serde(default)]
    pub results: Vec<Property>,
}

/// Client for `crm/<version>/properties`.
#[derive(Debug, Clone)]
pub struct PropertyService {
    client: HubSpotClient,
    path: String,
}

impl PropertyService {
    pub fn new(client: HubSpotClient) -> Self {
        let path = client.api_path("crm", "properties");
        Self { client, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn property_path(&self, object_type: &str, property_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.path,
            segment(object_type),
            segment(property_name)
        )
    }

    /// List the properties of an object type.
    #[instrument(skip(self))]
    pub async fn list(&self, object_type: &str) -> Result<PropertyList> {
        let path = format!("{}/{}", self.path, segment(object_type));
        self.client.get(&path).await
    }

    /// Create a property. `request` is usually a [`Property`] or a JSON value.
    #[instrument(skip(self, request))]
    pub async fn create<B>(&self, object_type: &str, request: &B) -> Result<Property>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("{}/{}", self.path, segment(object_type));
        self.client.post(&path, request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, object_type: &str, property_name: &str) -> Result<Property> {
        self.client
            .get(&self.property_path(object_type, property_name))
            .await
    }

    #[instrument(skip(self, request))]
    pub async fn update<B>(
        &self,
        object_type: &str,
        property_name: &str,
        request: &B,
    ) -> Result<Property>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .patch(&self.property_path(object_type, property_name), request)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, object_type: &str, property_name: &str) -> Result<()> {
        self.client
            .delete(&self.property_path(object_type, property_name))
            .await
    }
}
